use std::convert::Infallible;

use crate::ui::mvi::{Reducer, Update};
use crate::ui::recipe_details::intent::RecipeDetailsIntent;
use crate::ui::recipe_details::state::RecipeDetailsState;

pub struct RecipeDetailsReducer;

impl Reducer for RecipeDetailsReducer {
    type State = RecipeDetailsState;
    type Intent = RecipeDetailsIntent;
    type Effect = Infallible;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Update<Self::State, Self::Effect> {
        match intent {}
    }
}
