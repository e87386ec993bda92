//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Expense Form"),
        Line::from(""),
        key_line("Tab/S-Tab", "Next/previous field"),
        key_line("Enter", "Add the expense"),
        key_line("Esc", "Go to the expense list"),
        key_line("F1", "Show this help"),
        Line::from(""),
        section("Expense List"),
        Line::from(""),
        key_line("j/k", "Move selection down/up"),
        key_line("d/Del", "Remove selected expense"),
        key_line("a", "Back to the form"),
        key_line("r", "Start over with a new budget"),
        key_line("?", "Show this help"),
        key_line("q/Esc", "Quit"),
        Line::from(""),
        section("Anywhere"),
        Line::from(""),
        key_line("Ctrl-C", "Quit"),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a key binding line
fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>10}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(description),
    ])
}
