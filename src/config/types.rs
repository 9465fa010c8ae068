use serde::{Deserialize, Serialize};

use crate::model::{Recipe, RecipeCollection};
use crate::store::DEFAULT_COMMAND_BUFFER;
use crate::ui::runtime::DEFAULT_INTENT_BUFFER;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub lists: ListsConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Recipes the store starts with, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed_recipes")]
    pub recipes: Vec<String>,
}

/// Labels of the three lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListsConfig {
    #[serde(default = "default_label_a")]
    pub a: String,
    #[serde(default = "default_label_b")]
    pub b: String,
    #[serde(default = "default_label_c")]
    pub c: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Pending mutations the store queue holds before callers wait (default: 32).
    #[serde(default = "default_command_buffer")]
    pub command_buffer: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Pending intents the runtime queue holds (default: 64).
    #[serde(default = "default_intent_buffer")]
    pub intent_buffer: usize,
    /// How long the console waits for an effect to show up in state (default: 500).
    #[serde(default = "default_settle_timeout_ms")]
    pub settle_timeout_ms: u64,
}

fn default_seed_recipes() -> Vec<String> {
    vec![
        "Model A".to_string(),
        "Model B".to_string(),
        "Model C".to_string(),
    ]
}

fn default_label_a() -> String {
    "A".to_string()
}

fn default_label_b() -> String {
    "B".to_string()
}

fn default_label_c() -> String {
    "C".to_string()
}

fn default_command_buffer() -> usize {
    DEFAULT_COMMAND_BUFFER
}

fn default_intent_buffer() -> usize {
    DEFAULT_INTENT_BUFFER
}

fn default_settle_timeout_ms() -> u64 {
    500
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            recipes: default_seed_recipes(),
        }
    }
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            a: default_label_a(),
            b: default_label_b(),
            c: default_label_c(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            command_buffer: default_command_buffer(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            intent_buffer: default_intent_buffer(),
            settle_timeout_ms: default_settle_timeout_ms(),
        }
    }
}

impl SeedConfig {
    /// Build the initial collection, giving each seed recipe a fresh id.
    pub fn collection(&self) -> RecipeCollection {
        self.recipes.iter().map(|name| Recipe::named(name.as_str())).collect()
    }
}

impl ListsConfig {
    pub fn labels(&self) -> [String; 3] {
        [self.a.clone(), self.b.clone(), self.c.clone()]
    }
}
