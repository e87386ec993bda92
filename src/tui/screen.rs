//! Terminal rendering surface
//!
//! Holds what the presenter last asked to show. The views read it on every
//! frame, so the screen always reflects the latest ledger snapshot.

use crate::presenter::{
    ExpenseRow, Notification, NotificationSlot, RenderSurface, StatusView, SummaryView,
};

/// View data for the TUI
#[derive(Debug)]
pub struct Screen {
    pub summary: Option<SummaryView>,
    pub rows: Vec<ExpenseRow>,
    pub status: Option<StatusView>,
    pub notification: NotificationSlot,
    pub submission_enabled: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            summary: None,
            rows: Vec::new(),
            status: None,
            notification: NotificationSlot::new(),
            submission_enabled: true,
        }
    }
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on every tick to auto-dismiss notifications
    pub fn tick(&mut self) {
        self.notification.remove_expired();
    }
}

impl RenderSurface for Screen {
    fn show_summary(&mut self, summary: SummaryView) {
        self.summary = Some(summary);
    }

    fn show_expenses(&mut self, rows: Vec<ExpenseRow>) {
        self.rows = rows;
    }

    fn show_status(&mut self, status: StatusView) {
        self.status = Some(status);
    }

    fn show_notification(&mut self, notification: Notification) {
        self.notification.show(notification);
    }

    fn set_submission_enabled(&mut self, enabled: bool) {
        self.submission_enabled = enabled;
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::presenter::Presenter;
    use crate::session::Session;

    #[test]
    fn test_screen_shows_single_notification() {
        let mut session = Session::new(Presenter::new(Screen::new(), &Settings::default()));
        session.start("100").unwrap();
        session.submit_expense("coffee", "5").unwrap();
        let _ = session.submit_expense("", "5");

        let screen = session.surface();
        assert_eq!(screen.rows.len(), 1);
        let current = screen.notification.current().unwrap();
        assert_eq!(current.message, "Both fields are required");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut session = Session::new(Presenter::new(Screen::new(), &Settings::default()));
        session.start("10").unwrap();
        session.submit_expense("lunch", "10").unwrap();
        assert!(!session.surface().submission_enabled);

        session.reset();
        let screen = session.surface();
        assert!(screen.summary.is_none());
        assert!(screen.rows.is_empty());
        assert!(screen.notification.is_empty());
        assert!(screen.submission_enabled);
    }
}
