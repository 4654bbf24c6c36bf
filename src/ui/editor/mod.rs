//! Edit-user modal. Changes are staged in a draft and only reach the store
//! when the user saves.

mod dialog;
mod field;
mod intent;
mod reducer;
mod state;

pub use dialog::render_editor_dialog;
pub use field::EditField;
pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::EditorState;
