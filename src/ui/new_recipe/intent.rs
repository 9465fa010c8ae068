use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum NewRecipeIntent {
    /// Name field edited.
    SetName(String),
    CancelTapped,
    /// Only enabled while [`NewRecipeState::can_save`](super::NewRecipeState::can_save) holds.
    SaveTapped,
}

impl Intent for NewRecipeIntent {}
