//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are plain values: cloning one yields an independent copy, and
/// `PartialEq` is what dirty-tracking compares.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
