use crate::model::User;
use crate::mvi::State;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub users: Vec<User>,
    /// True only while a fetch is in flight.
    pub loading: bool,
    /// Last fetch failure message; empty when there is none.
    pub error: String,
}

impl State for AppState {}

impl AppState {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
