use crate::model::{RecipeCollection, RecipeId};
use crate::ui::mvi::{Intent, PresentationIntent};
use crate::ui::recipe_details::RecipeDetailsIntent;

use super::destination::DestinationIntent;

#[derive(Debug, Clone, PartialEq)]
pub enum RecipeListIntent {
    /// The list became visible: start following the store.
    Start,
    /// The list went away: stop following the store.
    Stop,
    /// A snapshot arrived from the store subscription.
    SetRecipes(RecipeCollection),
    /// Row selection changed. `None` clears the detail pane.
    ShowDetails(Option<RecipeId>),
    Delete(RecipeId),
    NewRecipeTapped,
    Details(PresentationIntent<RecipeDetailsIntent>),
    Destination(PresentationIntent<DestinationIntent>),
}

impl Intent for RecipeListIntent {}
