//! Toast notification widget
//!
//! Draws the presenter's current notification with a countdown bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presenter::{Notification, NotificationKind};

/// Get the color for a notification kind
pub fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Info => Color::Blue,
        NotificationKind::Success => Color::Green,
        NotificationKind::Warning => Color::Yellow,
        NotificationKind::Error => Color::Red,
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.kind;
        let color = kind_color(kind);

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", kind.icon(), kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        // Shrinking bar showing how long the toast has left
        let inner_width = area.width.saturating_sub(2) as f64;
        let bar_len = (inner_width * self.notification.remaining_fraction()).round() as usize;

        let lines = vec![
            Line::from(Span::styled(
                self.notification.message.as_str(),
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled("▔".repeat(bar_len), Style::default().fg(color))),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_kind_colors() {
        assert_eq!(kind_color(NotificationKind::Info), Color::Blue);
        assert_eq!(kind_color(NotificationKind::Success), Color::Green);
        assert_eq!(kind_color(NotificationKind::Warning), Color::Yellow);
        assert_eq!(kind_color(NotificationKind::Error), Color::Red);
    }

    #[test]
    fn test_render_into_buffer() {
        let n = Notification::new(
            "Expense added",
            NotificationKind::Success,
            Duration::from_secs(3),
        );
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        NotificationWidget::new(&n).render(area, &mut buf);

        let text: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(text.contains("Expense added"));
    }
}
