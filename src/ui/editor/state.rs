use crate::model::User;
use crate::mvi::State;
use crate::ui::editor::field::EditField;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Hidden,
    Visible {
        draft: User,
        focused: EditField,
        /// Draft differs from what was opened.
        dirty: bool,
    },
}

impl State for EditorState {}

impl EditorState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn draft(&self) -> Option<&User> {
        match self {
            Self::Visible { draft, .. } => Some(draft),
            Self::Hidden => None,
        }
    }
}
