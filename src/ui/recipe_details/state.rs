use crate::model::{Recipe, RecipeId};
use crate::ui::mvi::UiState;

/// Projection of one recipe from its owning list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetailsState {
    parent_name: String,
    recipe: Recipe,
}

impl UiState for RecipeDetailsState {}

impl RecipeDetailsState {
    pub fn new(parent_name: impl Into<String>, recipe: Recipe) -> Self {
        Self {
            parent_name: parent_name.into(),
            recipe,
        }
    }

    pub fn id(&self) -> RecipeId {
        self.recipe.id()
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Label of the list this recipe was opened from.
    pub fn parent_name(&self) -> &str {
        &self.parent_name
    }
}
