use crate::store::AppState;
use crate::ui::app::App;
use crate::ui::editor::render_editor_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::table::users_table;
use crate::ui::theme::{GLOBAL_BORDER, MUTED_TEXT, STATUS_ERROR, STATUS_WARN};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, TableState};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    frame.render_widget(Header::new(state, app.animation_tick()).widget(), header);
    frame.render_widget(Clear, body);
    if state.users.is_empty() {
        render_empty(frame, body, state);
    } else {
        let mut table_state = TableState::default().with_selected(Some(app.selected()));
        frame.render_stateful_widget(users_table(&state.users), body, &mut table_state);
    }
    frame.render_widget(Footer::new(app.editor().is_visible()).widget(footer), footer);

    render_editor_dialog(frame, app.editor(), body);
}

fn render_empty(frame: &mut Frame<'_>, body: Rect, state: &AppState) {
    let (text, color) = if state.loading {
        ("Loading...", STATUS_WARN)
    } else if state.has_error() {
        (state.error.as_str(), STATUS_ERROR)
    } else {
        ("No users. Press 'a' to add one.", MUTED_TEXT)
    };

    let widget = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(widget, body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelToken;
    use crate::model::User;
    use crate::store::{UserAction, UsersStore};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn make_app() -> App {
        App::new(UsersStore::default(), CancelToken::new())
    }

    #[test]
    fn shows_loading_indicator() {
        let mut app = make_app();
        app.dispatch(UserAction::FetchRequest);
        let screen = render(&app);
        assert!(screen.contains("Loading..."));
    }

    #[test]
    fn shows_error_verbatim() {
        let mut app = make_app();
        app.dispatch(UserAction::FetchFailure("Network Error".to_string()));
        let screen = render(&app);
        assert!(screen.contains("Network Error"));
        assert!(!screen.contains("Loading..."));
    }

    #[test]
    fn shows_one_row_per_user() {
        let mut app = make_app();
        app.dispatch(UserAction::FetchSuccess(vec![
            User::placeholder(1),
            User {
                name: "Ervin Howell".to_string(),
                ..User::placeholder(2)
            },
        ]));
        let screen = render(&app);
        assert!(screen.contains("Zip Code"));
        assert!(screen.contains("Ervin Howell"));
        assert!(screen.contains("999999"));
        assert!(screen.contains("2 users"));
    }

    #[test]
    fn shows_editor_with_selected_user() {
        let mut app = make_app();
        app.dispatch(UserAction::FetchSuccess(vec![User {
            name: "Leanne".to_string(),
            ..User::placeholder(7)
        }]));
        app.open_editor();
        let screen = render(&app);
        assert!(screen.contains("Edit User #7"));
        assert!(screen.contains("Leanne"));
    }

    #[test]
    fn editor_handles_very_long_field() {
        let mut app = make_app();
        app.dispatch(UserAction::FetchSuccess(vec![User {
            name: "x".repeat(65_530),
            ..User::placeholder(3)
        }]));
        app.open_editor();
        let screen = render(&app);
        assert!(screen.contains("Edit User #3"));
    }
}
