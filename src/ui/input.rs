use crate::ui::app::App;
use crate::ui::editor::EditorIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.editor().is_visible() {
        handle_editor_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('a') => app.add_user(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_editor(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.save_editor();
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.dispatch_editor(EditorIntent::Clear);
        return;
    }

    match key.code {
        KeyCode::Esc => app.close_editor(),
        KeyCode::Enter => app.save_editor(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_editor(EditorIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_editor(EditorIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_editor(EditorIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_editor(EditorIntent::Insert(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
