//! TUI Views module
//!
//! Budget header, entry form, expense list and status bar, plus the dialog
//! and notification overlays.

pub mod expense_list;
pub mod form;
pub mod status_bar;
pub mod summary;

use ratatui::style::Color;
use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{notification_area, AppLayout};
use super::widgets::NotificationWidget;
use crate::ledger::BudgetStatus;

/// Color of a status band
pub fn status_color(status: BudgetStatus) -> Color {
    match status {
        BudgetStatus::Normal => Color::Green,
        BudgetStatus::Warning => Color::Yellow,
        BudgetStatus::Critical => Color::Red,
    }
}

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    summary::render(frame, app, layout.header);
    form::render(frame, app, layout.form);
    expense_list::render(frame, app, layout.list);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.screen().notification.current() {
        let area = notification_area(frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::BudgetPrompt => dialogs::budget_prompt::render(frame, app),
        ActiveDialog::ConfirmRemove(id) => {
            let name = app
                .session
                .ledger()
                .and_then(|ledger| ledger.get(*id))
                .map(|e| e.name.clone())
                .unwrap_or_else(|| id.short());
            dialogs::confirm::render(frame, "Remove Expense", &format!("Remove '{}'?", name));
        }
        ActiveDialog::ConfirmReset => {
            dialogs::confirm::render(frame, "Restart", "Discard all expenses and start over?")
        }
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}
