use crate::model::{User, UserId};
use crate::mvi::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    FetchRequest,
    FetchSuccess(Vec<User>),
    FetchFailure(String),
    Add(User),
    Delete(UserId),
    /// Replaces the user with the same id. Never inserts.
    Edit(User),
    /// Anything outside this reducer's vocabulary. Always an identity transition.
    Unrecognized(String),
}

impl Action for UserAction {}

impl UserAction {
    pub fn add(user: User) -> Self {
        Self::Add(user)
    }

    pub fn delete(id: UserId) -> Self {
        Self::Delete(id)
    }

    pub fn edit(user: User) -> Self {
        Self::Edit(user)
    }

    /// Short name for trace logs; avoids dumping whole payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FetchRequest => "fetch_request",
            Self::FetchSuccess(_) => "fetch_success",
            Self::FetchFailure(_) => "fetch_failure",
            Self::Add(_) => "add",
            Self::Delete(_) => "delete",
            Self::Edit(_) => "edit",
            Self::Unrecognized(_) => "unrecognized",
        }
    }
}
