//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (typing, mode selection, submit)
/// - System events (a finished network exchange)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
