//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Result of a single transition: the next state plus the effects to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Update<S, E> {
    pub state: S,
    pub effects: Vec<E>,
}

impl<S, E> Update<S, E> {
    /// Transition without side effects.
    pub fn state(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// Lift both halves into a parent's state and effect types.
    pub fn map<S2, E2>(
        self,
        state: impl FnOnce(S) -> S2,
        effect: impl FnMut(E) -> E2,
    ) -> Update<S2, E2> {
        Update {
            state: state(self.state),
            effects: self.effects.into_iter().map(effect).collect(),
        }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must not perform I/O: anything asynchronous is returned as an
/// effect and executed by the runtime, which later feeds the outcome
/// back in as another intent.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Side effects this reducer may request.
    type Effect: Send + 'static;

    /// Process an intent and return the new state with its effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Update<Self::State, Self::Effect>;
}
