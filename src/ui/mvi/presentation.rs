//! Optional child state presented by a parent (sheets, detail panes).

use super::intent::Intent;
use super::reducer::{Reducer, Update};

/// Intent addressed to an optionally-present child.
#[derive(Debug, Clone, PartialEq)]
pub enum PresentationIntent<I> {
    /// Tear the child down.
    Dismiss,
    /// Forward to the child reducer while it is present.
    Presented(I),
}

impl<I: Intent> Intent for PresentationIntent<I> {}

/// Run `R` against an optional child slot.
///
/// `Dismiss` clears the slot. A `Presented` intent arriving while the slot is
/// empty is dropped, since its child has already gone away.
pub fn reduce_presented<R: Reducer>(
    slot: Option<R::State>,
    intent: PresentationIntent<R::Intent>,
) -> Update<Option<R::State>, R::Effect> {
    match (slot, intent) {
        (_, PresentationIntent::Dismiss) => Update::state(None),
        (Some(state), PresentationIntent::Presented(intent)) => {
            R::reduce(state, intent).map(Some, |effect| effect)
        }
        (None, PresentationIntent::Presented(_)) => {
            tracing::debug!("Dropped intent for dismissed presentation");
            Update::state(None)
        }
    }
}
