//! Modal surfaces a list can present. Only one is live at a time.

use crate::ui::mvi::{Intent, Reducer, UiState, Update};
use crate::ui::new_recipe::{NewRecipeEffect, NewRecipeIntent, NewRecipeReducer, NewRecipeState};

#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    NewRecipe(NewRecipeState),
}

impl UiState for Destination {}

#[derive(Debug, Clone, PartialEq)]
pub enum DestinationIntent {
    NewRecipe(NewRecipeIntent),
}

impl Intent for DestinationIntent {}

#[derive(Debug, Clone, PartialEq)]
pub enum DestinationEffect {
    NewRecipe(NewRecipeEffect),
}

pub struct DestinationReducer;

impl Reducer for DestinationReducer {
    type State = Destination;
    type Intent = DestinationIntent;
    type Effect = DestinationEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Update<Self::State, Self::Effect> {
        match (state, intent) {
            (Destination::NewRecipe(form), DestinationIntent::NewRecipe(intent)) => {
                NewRecipeReducer::reduce(form, intent)
                    .map(Destination::NewRecipe, DestinationEffect::NewRecipe)
            }
        }
    }
}
