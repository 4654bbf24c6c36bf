//! Rendering for the edit-user modal.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::editor::field::EditField;
use crate::ui::editor::state::EditorState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_WARN};

const DIALOG_WIDTH: u16 = 56;
const LABEL_WIDTH: usize = 10;

/// Render the modal on top of `area`. No-op while hidden.
pub fn render_editor_dialog(frame: &mut Frame, state: &EditorState, area: Rect) {
    let EditorState::Visible {
        draft,
        focused,
        dirty,
    } = state
    else {
        return;
    };

    // fields + blank + hints, plus borders
    let height = EditField::ALL.len() as u16 + 4;
    let dialog = centered_rect_by_size(area, DIALOG_WIDTH, height);
    frame.render_widget(Clear, dialog);

    let title = if *dirty {
        format!(" Edit User #{} * ", draft.id)
    } else {
        format!(" Edit User #{} ", draft.id)
    };
    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let mut lines: Vec<Line> = EditField::ALL
        .iter()
        .map(|&field| {
            let value = field.value(draft);
            let label = Span::styled(
                format!(" {:<width$}", field.label(), width = LABEL_WIDTH),
                Style::default().fg(MUTED_TEXT),
            );
            let content = if value.is_empty() {
                Span::styled(
                    field.placeholder(),
                    Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
                )
            } else {
                Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT))
            };
            let line = Line::from(vec![label, content]);
            if field == *focused {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Tab/↑↓: Field  Enter: Save  Esc: Close",
        Style::default().fg(STATUS_WARN),
    )));

    frame.render_widget(Paragraph::new(lines), inner);

    // Cursor sits after the focused value.
    let row = EditField::ALL
        .iter()
        .position(|f| f == focused)
        .unwrap_or(0) as u16;
    if inner.width > 0 && row < inner.height {
        let x = inner.x + cursor_column(focused.value(draft), inner.width);
        frame.set_cursor_position((x, inner.y + row));
    }
}

/// Display column just past `value`, clamped to the last cell of `width`.
fn cursor_column(value: &str, width: u16) -> u16 {
    let column = (1 + LABEL_WIDTH)
        .saturating_add(Span::raw(value).width())
        .min(usize::from(width.saturating_sub(1)));
    u16::try_from(column).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_follows_value() {
        assert_eq!(cursor_column("abc", 54), 14);
    }

    #[test]
    fn cursor_counts_display_width() {
        // two wide glyphs take four cells
        assert_eq!(cursor_column("日本", 54), 15);
        // combining accent takes none
        assert_eq!(cursor_column("e\u{301}", 54), 12);
    }

    #[test]
    fn cursor_is_clamped_for_long_values() {
        let long = "x".repeat(65_530);
        assert_eq!(cursor_column(&long, 54), 53);
        assert_eq!(cursor_column(&long, 0), 0);
    }
}
