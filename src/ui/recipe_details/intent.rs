use crate::ui::mvi::Intent;

/// The detail pane does not accept any intents yet.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeDetailsIntent {}

impl Intent for RecipeDetailsIntent {}
