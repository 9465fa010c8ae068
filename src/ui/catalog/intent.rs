use crate::ui::mvi::Intent;
use crate::ui::recipe_list::RecipeListIntent;

use super::state::ListTag;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIntent {
    /// Deliver an intent to one list only.
    List(ListTag, RecipeListIntent),
    /// Sidebar selection changed.
    SetDestination(Option<ListTag>),
}

impl Intent for CatalogIntent {}
