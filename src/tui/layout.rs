//! Layout definitions for the TUI
//!
//! Budget header on top, the entry form below it, the expense list filling
//! the middle and a one-line status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Total / spent / remaining
    pub header: Rect,
    /// Expense entry form
    pub form: Rect,
    /// Expense list
    pub list: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(4), // Form
                Constraint::Min(3),    // List
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            form: chunks[1],
            list: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Area for the notification toast: top right, over the header
pub fn notification_area(area: Rect) -> Rect {
    let width = 44.min(area.width);
    let height = 4.min(area.height);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = AppLayout::new(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.form.height, 4);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.list.height, 24 - 3 - 4 - 1);
    }

    #[test]
    fn test_notification_area_fits_small_terminals() {
        let area = Rect::new(0, 0, 30, 2);
        let toast = notification_area(area);
        assert_eq!(toast, Rect::new(0, 0, 30, 2));

        let wide = notification_area(Rect::new(0, 0, 100, 30));
        assert_eq!(wide, Rect::new(56, 0, 44, 4));
    }

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_rect_fixed(40, 10, area), Rect::new(30, 20, 40, 10));
    }
}
