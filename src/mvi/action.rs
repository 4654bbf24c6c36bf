/// Marker trait for values submitted to a reducer.
///
/// Actions come from user gestures (key presses in the view) or from
/// async work finishing (fetch completion delivered over the event queue).
pub trait Action: Send + 'static {}
