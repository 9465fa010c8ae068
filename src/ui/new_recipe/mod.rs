//! Creation form for a new recipe, presented as a sheet over a list.

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::NewRecipeEffect;
pub use intent::NewRecipeIntent;
pub use reducer::NewRecipeReducer;
pub use state::NewRecipeState;
