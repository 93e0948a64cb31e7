//! Base trait for state-machine states.

/// Marker trait for state objects.
///
/// States should be:
/// - Replaced wholesale by the reducer, never mutated in place
/// - Comparable (PartialEq for assertions and change detection)
pub trait State: Clone + PartialEq + Default + Send + 'static {}
