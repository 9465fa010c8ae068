//! One catalog: the recipe list plus its detail pane and creation sheet.

mod destination;
mod effect;
mod intent;
mod reducer;
mod state;

pub use destination::{Destination, DestinationEffect, DestinationIntent, DestinationReducer};
pub use effect::RecipeListEffect;
pub use intent::RecipeListIntent;
pub use reducer::RecipeListReducer;
pub use state::RecipeListState;
