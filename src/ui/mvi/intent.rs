//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents come from the user (navigation keys, replay) or from the
/// runtime (reveal timers firing). Reducers turn them into new states.
pub trait Intent: Send + 'static {}
