use crate::ui::recipe_list::RecipeListEffect;

use super::state::ListTag;

/// A list effect, tagged with the list that issued it.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEffect {
    List(ListTag, RecipeListEffect),
}
