//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where a feature's state changes.
///
/// Side effects (arming timers, logging) belong to the caller that
/// dispatches the intent, never to `reduce`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
