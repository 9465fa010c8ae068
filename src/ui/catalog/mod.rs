//! Root machine: three independent recipe lists and the sidebar selection.

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::CatalogEffect;
pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::{CatalogState, ListTag, ParseListTagError};
