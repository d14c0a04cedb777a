//! Base trait for state snapshots in MVI architecture.

/// Marker trait for state objects.
///
/// States are cloned to create new states, compared to detect changes,
/// and carry everything needed to render the view.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
