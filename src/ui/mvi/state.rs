//! Base trait for UI state.

/// Marker trait for UI state objects: cloneable snapshots that can be
/// compared to detect changes and reset to a default.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
