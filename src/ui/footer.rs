use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const TABLE_HINTS: &str = " a: Add │ e/Enter: Edit │ d: Delete │ ↑↓: Select │ q: Quit";
const EDITOR_HINTS: &str = " Tab: Next field │ Ctrl+U: Clear │ Enter/Ctrl+S: Save │ Esc: Cancel";

/// Key hints for whichever surface has focus, version on the right.
pub struct Footer {
    editing: bool,
}

impl Footer {
    pub fn new(editing: bool) -> Self {
        Self { editing }
    }

    pub fn hints(&self) -> &'static str {
        if self.editing {
            EDITOR_HINTS
        } else {
            TABLE_HINTS
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // display width, not bytes: the separators are multi-byte
        let used = Span::raw(hints).width() + Span::raw(version.as_str()).width();
        let padding = (area.width.saturating_sub(2) as usize).saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::raw(hints),
            Span::raw(" ".repeat(padding)),
            Span::raw(version),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
