//! Budget header
//!
//! Shows total, spent and remaining, with remaining colored by status band.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::status_color;
use crate::tui::app::App;

/// Render the budget header
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();

    let block = Block::default()
        .title(" Budget ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = match (&screen.summary, &screen.status) {
        (Some(summary), status) => {
            let remaining_color = status
                .as_ref()
                .map(|s| status_color(s.status))
                .unwrap_or(Color::White);

            Line::from(vec![
                Span::styled("Total: ", Style::default().fg(Color::White)),
                Span::styled(
                    summary.total.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled("Spent: ", Style::default().fg(Color::White)),
                Span::raw(summary.spent.clone()),
                Span::raw("   "),
                Span::styled("Remaining: ", Style::default().fg(Color::White)),
                Span::styled(
                    summary.remaining.clone(),
                    Style::default()
                        .fg(remaining_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        }
        (None, _) => Line::from(Span::styled(
            "No budget set",
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
