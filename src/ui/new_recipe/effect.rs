use crate::model::Recipe;

/// Work requested by the creation form.
#[derive(Debug, Clone, PartialEq)]
pub enum NewRecipeEffect {
    /// Ask the owner to close the form.
    Dismiss,
    /// Persist the recipe, then close the form once the store has applied it.
    SaveAndDismiss(Recipe),
}
