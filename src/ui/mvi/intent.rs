//! Base trait for screen intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Keyboard input already mapped to a form action
/// - Submission lifecycle events (started, finished)
pub trait Intent: Send + 'static {}
