//! Budget prompt dialog
//!
//! Blocks the session until a budget is entered. An invalid answer restarts
//! the session and asks again.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the budget prompt
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(46, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Question
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "What is your budget?",
            Style::default().fg(Color::White),
        ))),
        chunks[1],
    );

    frame.render_widget(&app.budget_input, chunks[3]);

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Start  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[5]);
}

/// Handle key events for the budget prompt
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_budget(),
        KeyCode::Esc => app.quit(),
        KeyCode::Backspace => app.budget_input.backspace(),
        KeyCode::Delete => app.budget_input.delete(),
        KeyCode::Left => app.budget_input.move_left(),
        KeyCode::Right => app.budget_input.move_right(),
        KeyCode::Home => app.budget_input.move_start(),
        KeyCode::End => app.budget_input.move_end(),
        KeyCode::Char(c) => app.budget_input.insert(c),
        _ => {}
    }
}
