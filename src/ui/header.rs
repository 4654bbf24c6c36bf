use crate::store::AppState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_WARN,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Title bar: user count, loading spinner, last fetch error.
pub struct Header<'a> {
    state: &'a AppState,
    animation_tick: u8,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, animation_tick: u8) -> Self {
        Self {
            state,
            animation_tick,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let count = self.state.users.len();
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Users",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{} {}", count, if count == 1 { "user" } else { "users" }),
                text_style,
            ),
        ];

        if self.state.loading {
            let frame = SPINNER_FRAMES[self.animation_tick as usize % SPINNER_FRAMES.len()];
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{frame} Loading..."),
                Style::default().fg(STATUS_WARN),
            ));
        }

        if self.state.has_error() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                self.state.error.clone(),
                Style::default().fg(STATUS_ERROR),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
