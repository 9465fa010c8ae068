//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          └──→ Effect ──→ Runtime
//!    └────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function `(State, Intent) -> (State, Effects)`
//! - **Effect**: Asynchronous work described as data

mod intent;
mod presentation;
mod reducer;
mod state;

pub use intent::Intent;
pub use presentation::{reduce_presented, PresentationIntent};
pub use reducer::{Reducer, Update};
pub use state::UiState;
