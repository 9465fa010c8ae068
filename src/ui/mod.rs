//! State machines for the catalog views and the runtime that drives them.

pub mod catalog;
pub mod mvi;
pub mod new_recipe;
pub mod recipe_details;
pub mod recipe_list;
pub mod runtime;
