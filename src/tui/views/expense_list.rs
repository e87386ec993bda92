//! Expense list view
//!
//! One row per expense with its removal shortcut. Rebuilt from the screen's
//! rows on every frame.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the expense list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();
    let focused = app.focus == Focus::List && !app.has_dialog();
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" Expenses ({}) ", screen.rows.len()))
        .title_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if screen.rows.is_empty() {
        let text = Paragraph::new("No expenses yet. Fill in the form above and press Enter.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Expense"),
        Cell::from("Amount"),
        Cell::from("Added"),
        Cell::from("ID"),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = screen
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.position.to_string()),
                Cell::from(row.name.clone()),
                Cell::from(row.amount.clone()),
                Cell::from(row.added.clone()),
                Cell::from(row.id.short()).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(16),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(13),
    ];

    let highlight = if focused {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index.min(screen.rows.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
