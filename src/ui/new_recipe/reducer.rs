use crate::ui::mvi::{Reducer, Update};
use crate::ui::new_recipe::effect::NewRecipeEffect;
use crate::ui::new_recipe::intent::NewRecipeIntent;
use crate::ui::new_recipe::state::NewRecipeState;

pub struct NewRecipeReducer;

impl Reducer for NewRecipeReducer {
    type State = NewRecipeState;
    type Intent = NewRecipeIntent;
    type Effect = NewRecipeEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Update<Self::State, Self::Effect> {
        match intent {
            NewRecipeIntent::SetName(name) => Update::state(NewRecipeState { name }),
            NewRecipeIntent::CancelTapped => {
                Update::state(state).with_effect(NewRecipeEffect::Dismiss)
            }
            NewRecipeIntent::SaveTapped => match state.recipe() {
                Some(recipe) => {
                    Update::state(state).with_effect(NewRecipeEffect::SaveAndDismiss(recipe))
                }
                // The view disables Save for an empty name; ignore stray taps.
                None => Update::state(state),
            },
        }
    }
}
