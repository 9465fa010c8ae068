//! Catalog domain values.

mod collection;
mod recipe;

pub use collection::RecipeCollection;
pub use recipe::{Recipe, RecipeId};
