use crate::mvi::Reducer;
use crate::ui::editor::field::EditField;
use crate::ui::editor::intent::EditorIntent;
use crate::ui::editor::state::EditorState;

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Action = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Action) -> Self::State {
        match intent {
            EditorIntent::Open { user } => EditorState::Visible {
                draft: user,
                focused: EditField::default(),
                dirty: false,
            },
            EditorIntent::Close => EditorState::Hidden,
            EditorIntent::FocusNext => match state {
                EditorState::Visible {
                    draft,
                    focused,
                    dirty,
                } => EditorState::Visible {
                    draft,
                    focused: focused.next(),
                    dirty,
                },
                other => other,
            },
            EditorIntent::FocusPrev => match state {
                EditorState::Visible {
                    draft,
                    focused,
                    dirty,
                } => EditorState::Visible {
                    draft,
                    focused: focused.prev(),
                    dirty,
                },
                other => other,
            },
            EditorIntent::Insert(ch) => match state {
                EditorState::Visible {
                    mut draft, focused, ..
                } => {
                    focused.value_mut(&mut draft).push(ch);
                    EditorState::Visible {
                        draft,
                        focused,
                        dirty: true,
                    }
                }
                other => other,
            },
            EditorIntent::Backspace => match state {
                EditorState::Visible {
                    mut draft,
                    focused,
                    dirty,
                } => {
                    let removed = focused.value_mut(&mut draft).pop().is_some();
                    EditorState::Visible {
                        draft,
                        focused,
                        dirty: dirty || removed,
                    }
                }
                other => other,
            },
            EditorIntent::Clear => match state {
                EditorState::Visible {
                    mut draft,
                    focused,
                    dirty,
                } => {
                    let value = focused.value_mut(&mut draft);
                    let changed = !value.is_empty();
                    value.clear();
                    EditorState::Visible {
                        draft,
                        focused,
                        dirty: dirty || changed,
                    }
                }
                other => other,
            },
        }
    }
}
