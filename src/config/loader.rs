use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/recipe-catalog/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("recipe-catalog").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise behaves like [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Queue sizes are non-zero
    /// - List labels are not blank
    /// - Seed recipe names are not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.command_buffer == 0 {
            return Err(ConfigError::ValidationError {
                message: "store.command_buffer must be greater than zero".to_string(),
            });
        }

        if self.runtime.intent_buffer == 0 {
            return Err(ConfigError::ValidationError {
                message: "runtime.intent_buffer must be greater than zero".to_string(),
            });
        }

        if let Some(label) = self.lists.labels().iter().find(|l| l.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: format!("List label '{}' must not be blank", label),
            });
        }

        if let Some(index) = self.seed.recipes.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: format!("Seed recipe #{} has a blank name", index + 1),
            });
        }

        Ok(())
    }
}
