use crate::model::User;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

pub const COLUMNS: [&str; 6] = ["ID", "Name", "Email", "Phone", "City", "Zip Code"];

fn row(user: &User) -> Row<'static> {
    Row::new(vec![
        Cell::from(user.id.to_string()),
        Cell::from(user.name.clone()),
        Cell::from(user.email.clone()),
        Cell::from(user.phone.clone()),
        Cell::from(user.address.city.clone()),
        Cell::from(user.address.zipcode.clone()),
    ])
}

pub fn users_table(users: &[User]) -> Table<'static> {
    let header = Row::new(COLUMNS.iter().map(|title| Cell::from(*title))).style(
        Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Length(5),
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Length(11),
    ];

    Table::new(users.iter().map(row), widths)
        .header(header)
        .style(Style::default().fg(HEADER_TEXT))
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
