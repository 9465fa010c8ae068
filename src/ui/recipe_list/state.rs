use crate::model::{RecipeCollection, RecipeId};
use crate::ui::mvi::UiState;
use crate::ui::recipe_details::RecipeDetailsState;

use super::destination::Destination;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeListState {
    /// Catalog label, fixed for the lifetime of the list.
    pub name: String,
    pub recipes: RecipeCollection,
    /// Detail pane. Always refers to a member of `recipes` once a transition completes.
    pub details: Option<RecipeDetailsState>,
    /// Modal sheet, independent of `details`.
    pub destination: Option<Destination>,
}

impl UiState for RecipeListState {}

impl RecipeListState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Detail projection for `id`, if it is in the current collection.
    pub fn details_for(&self, id: RecipeId) -> Option<RecipeDetailsState> {
        self.recipes
            .get(id)
            .map(|recipe| RecipeDetailsState::new(self.name.clone(), recipe.clone()))
    }

    pub fn selected_id(&self) -> Option<RecipeId> {
        self.details.as_ref().map(RecipeDetailsState::id)
    }
}
