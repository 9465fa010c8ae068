use crate::model::RecipeId;

use super::destination::DestinationEffect;

/// Work a list asks the runtime to perform on its behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeListEffect {
    /// Follow the store and feed every snapshot back as `SetRecipes`.
    /// Replaces any subscription this list already holds.
    Subscribe,
    /// Cancel the list's store subscription.
    Unsubscribe,
    /// Delete from the store. When `clear_details` is set, `ShowDetails(None)`
    /// is sent back only after the store has applied the delete.
    Delete { id: RecipeId, clear_details: bool },
    Destination(DestinationEffect),
}
