/// Marker trait for reducer-owned state.
///
/// `Default` is the initial state; `PartialEq` lets callers skip work when
/// a transition was the identity.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
