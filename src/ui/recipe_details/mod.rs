//! Read-only detail pane for the selected recipe.

mod intent;
mod reducer;
mod state;

pub use intent::RecipeDetailsIntent;
pub use reducer::RecipeDetailsReducer;
pub use state::RecipeDetailsState;
