//! Expense entry form
//!
//! Name and amount fields. Greyed out and locked while the budget is
//! exhausted.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::tui::app::App;

/// Render the entry form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let enabled = app.screen().submission_enabled;
    let focused = app.focus.is_form() && !app.has_dialog();

    let (title, border_color) = if !enabled {
        (" Add Expense (blocked: budget exhausted) ", Color::Red)
    } else if focused {
        (" Add Expense [Enter] ", Color::Cyan)
    } else {
        (" Add Expense ", Color::DarkGray)
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(&app.name_input, rows[0]);
    frame.render_widget(&app.amount_input, rows[1]);
}
