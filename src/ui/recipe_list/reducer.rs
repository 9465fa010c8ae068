use std::convert::Infallible;

use crate::ui::mvi::{reduce_presented, Reducer, Update};
use crate::ui::new_recipe::NewRecipeState;
use crate::ui::recipe_details::RecipeDetailsReducer;
use crate::ui::recipe_list::destination::{Destination, DestinationReducer};
use crate::ui::recipe_list::effect::RecipeListEffect;
use crate::ui::recipe_list::intent::RecipeListIntent;
use crate::ui::recipe_list::state::RecipeListState;

pub struct RecipeListReducer;

impl Reducer for RecipeListReducer {
    type State = RecipeListState;
    type Intent = RecipeListIntent;
    type Effect = RecipeListEffect;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Update<Self::State, Self::Effect> {
        match intent {
            RecipeListIntent::Start => {
                Update::state(state).with_effect(RecipeListEffect::Subscribe)
            }
            RecipeListIntent::Stop => {
                Update::state(state).with_effect(RecipeListEffect::Unsubscribe)
            }
            RecipeListIntent::SetRecipes(recipes) => {
                state.recipes = recipes;
                // Refresh the open detail from the new snapshot, or close it
                // if its recipe is gone.
                state.details = state
                    .selected_id()
                    .and_then(|id| state.details_for(id));
                Update::state(state)
            }
            RecipeListIntent::ShowDetails(id) => {
                state.details = id.and_then(|id| state.details_for(id));
                Update::state(state)
            }
            RecipeListIntent::Delete(id) => {
                let clear_details = state.selected_id() == Some(id);
                Update::state(state).with_effect(RecipeListEffect::Delete { id, clear_details })
            }
            RecipeListIntent::NewRecipeTapped => {
                state.destination = Some(Destination::NewRecipe(NewRecipeState::default()));
                Update::state(state)
            }
            RecipeListIntent::Details(intent) => {
                reduce_presented::<RecipeDetailsReducer>(state.details.take(), intent).map(
                    |details| RecipeListState { details, ..state },
                    |never: Infallible| -> RecipeListEffect { match never {} },
                )
            }
            RecipeListIntent::Destination(intent) => {
                reduce_presented::<DestinationReducer>(state.destination.take(), intent).map(
                    |destination| RecipeListState {
                        destination,
                        ..state
                    },
                    RecipeListEffect::Destination,
                )
            }
        }
    }
}
