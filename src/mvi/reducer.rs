use super::action::Action;
use super::state::State;

/// The only place state transitions happen.
pub trait Reducer {
    type State: State;
    type Action: Action;

    /// Compute the next state. Must not perform I/O.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
