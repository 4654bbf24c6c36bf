use crate::model::User;
use crate::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    /// Start editing a copy of `user`.
    Open { user: User },
    Close,
    FocusNext,
    FocusPrev,
    Insert(char),
    Backspace,
    /// Empty the focused field.
    Clear,
}

impl Action for EditorIntent {}
