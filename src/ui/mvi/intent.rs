//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (row selection, button taps, text edits)
/// - System events (store snapshots, completed effects)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
