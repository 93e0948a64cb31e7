//! Base trait for intents (validated transition requests).

/// Marker trait for intent objects.
///
/// Intents represent transitions that have already passed input
/// validation; the reducer only decides whether the current state
/// accepts them.
pub trait Intent: Send + 'static {}
