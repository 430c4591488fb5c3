//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button presses, navigation)
/// - System events (fetch results, timer expirations)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
