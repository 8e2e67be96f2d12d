//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are edits forwarded by the display surface (a changed cell, a
/// pressed add/remove/reset button, a new text value). Reducers turn them
/// into new states.
pub trait Intent: Send + 'static {}
