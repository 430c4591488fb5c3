//! Base trait for application state slices.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything a consumer needs to decide what to show)
/// - Comparable (PartialEq for change detection)
///
/// `Default` is the pre-interaction state, so stores and reducers can
/// start without ceremony.
pub trait AppState: Clone + PartialEq + Default + Send + 'static {}
