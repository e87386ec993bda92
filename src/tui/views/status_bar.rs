//! Status bar view
//!
//! Shows the remaining percentage, the status band and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::status_color;
use crate::tui::app::{App, Focus};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();
    let mut spans = vec![];

    if let (Some(summary), Some(status)) = (&screen.summary, &screen.status) {
        let color = status_color(status.status);
        spans.push(Span::styled(" Left: ", Style::default().fg(Color::White)));
        spans.push(Span::styled(
            summary.remaining.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" ({:.1}%)", status.remaining_percent),
            Style::default().fg(color),
        ));
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(status.status.label(), Style::default().fg(color)));
        if status.exhausted {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                "Budget exhausted",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
    } else {
        spans.push(Span::styled(
            " Waiting for a budget",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let hints = match app.focus {
        Focus::List => " d:Remove  a:Add  r:Restart  ?:Help  q:Quit ",
        Focus::Name | Focus::Amount => " Tab:Next  Enter:Add  Esc:List  F1:Help ",
    };

    // Right-align the hints
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
