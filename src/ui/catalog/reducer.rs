use crate::ui::catalog::effect::CatalogEffect;
use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::state::CatalogState;
use crate::ui::mvi::{Reducer, Update};
use crate::ui::recipe_list::RecipeListReducer;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;
    type Effect = CatalogEffect;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Update<Self::State, Self::Effect> {
        match intent {
            CatalogIntent::List(tag, intent) => {
                let list = state.list_mut(tag);
                let update = RecipeListReducer::reduce(std::mem::take(list), intent);
                *list = update.state;
                Update {
                    state,
                    effects: update
                        .effects
                        .into_iter()
                        .map(|effect| CatalogEffect::List(tag, effect))
                        .collect(),
                }
            }
            CatalogIntent::SetDestination(tag) => {
                state.destination_tag = tag;
                Update::state(state)
            }
        }
    }
}
