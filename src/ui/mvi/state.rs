//! Base trait for screen state.

/// Marker trait for screen state objects.
///
/// States are moved through the reducer by value and start from `Default`
/// when a screen is created.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
