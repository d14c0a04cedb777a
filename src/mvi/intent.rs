//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, form submission)
/// - Remote call completions (page loaded, entry deleted)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
