use crate::model::Recipe;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewRecipeState {
    pub name: String,
}

impl UiState for NewRecipeState {}

impl NewRecipeState {
    /// Whether the save action should be enabled.
    pub fn can_save(&self) -> bool {
        !self.name.is_empty()
    }

    /// Build the recipe to persist, with a fresh id and the name as typed.
    /// `None` while the name is empty.
    pub fn recipe(&self) -> Option<Recipe> {
        self.can_save().then(|| Recipe::named(self.name.clone()))
    }
}
