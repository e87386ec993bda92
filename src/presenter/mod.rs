//! Display synchronization
//!
//! The [`Presenter`] turns already computed ledger figures into view data and
//! pushes them to a [`RenderSurface`]. It decides how things look (formatting,
//! status band, notifications, whether submission is allowed) but never does
//! budget arithmetic and never mutates the ledger.

pub mod notification;

use std::time::Duration;

use tracing::warn;

use crate::config::Settings;
use crate::ledger::{BudgetStatus, Ledger, Thresholds};
use crate::models::{Expense, ExpenseId, Money};

pub use notification::{Notification, NotificationKind, NotificationSlot};

/// Message shown when nothing is left of the budget
pub const MSG_EXHAUSTED: &str = "Budget exhausted";

/// Formatted budget figures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub total: String,
    pub remaining: String,
    pub spent: String,
}

/// One line of the expense list. `id` is what the removal control acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    /// 1-based position in the list
    pub position: usize,
    pub name: String,
    pub amount: String,
    pub added: String,
}

/// Band and percentage of the remaining budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusView {
    pub status: BudgetStatus,
    pub remaining_percent: f64,
    pub exhausted: bool,
}

/// Whatever actually shows things to the user.
///
/// Implementations only store or draw what they are given.
pub trait RenderSurface {
    fn show_summary(&mut self, summary: SummaryView);

    /// Replace the whole list
    fn show_expenses(&mut self, rows: Vec<ExpenseRow>);

    fn show_status(&mut self, status: StatusView);

    fn show_notification(&mut self, notification: Notification);

    /// Enable or block the expense entry form
    fn set_submission_enabled(&mut self, enabled: bool);

    /// Forget everything shown so far (session restart)
    fn clear(&mut self);
}

/// Renders ledger state onto a surface
#[derive(Debug)]
pub struct Presenter<S> {
    surface: S,
    thresholds: Thresholds,
    currency_symbol: String,
    notification_duration: Duration,
}

impl<S: RenderSurface> Presenter<S> {
    pub fn new(surface: S, settings: &Settings) -> Self {
        Self {
            surface,
            thresholds: settings.thresholds(),
            currency_symbol: settings.currency_symbol.clone(),
            notification_duration: settings.notification_duration(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    pub fn render_budget_summary(&mut self, total: Money, remaining: Money) {
        let summary = SummaryView {
            total: self.format_money(total),
            remaining: self.format_money(remaining),
            spent: self.format_money(total - remaining),
        };
        self.surface.show_summary(summary);
    }

    /// Rebuild the displayed list from scratch
    pub fn render_expense_list(&mut self, expenses: &[Expense]) {
        let rows = expenses
            .iter()
            .enumerate()
            .map(|(i, expense)| ExpenseRow {
                id: expense.id,
                position: i + 1,
                name: expense.name.clone(),
                amount: self.format_money(expense.amount),
                added: expense.created_at.format("%H:%M:%S").to_string(),
            })
            .collect();
        self.surface.show_expenses(rows);
    }

    /// Show the status band; block submission once the budget is exhausted
    pub fn render_status(&mut self, total: Money, remaining: Money) {
        let remaining_percent = remaining.percent_of(total);
        let exhausted = !remaining.is_positive();

        self.surface.show_status(StatusView {
            status: BudgetStatus::classify(remaining_percent, &self.thresholds),
            remaining_percent,
            exhausted,
        });

        if exhausted {
            warn!(remaining = %remaining, "budget exhausted, blocking submissions");
            self.notify(MSG_EXHAUSTED, NotificationKind::Error);
        }
        self.surface.set_submission_enabled(!exhausted);
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let notification = Notification::new(message, kind, self.notification_duration);
        self.surface.show_notification(notification);
    }

    /// Summary, list and status in one go
    pub fn render_ledger(&mut self, ledger: &Ledger) {
        self.render_budget_summary(ledger.total(), ledger.remaining());
        self.render_expense_list(ledger.expenses());
        self.render_status(ledger.total(), ledger.remaining());
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Surface that remembers what it was asked to show
    #[derive(Debug)]
    pub struct RecordingSurface {
        pub summary: Option<SummaryView>,
        pub rows: Vec<ExpenseRow>,
        pub status: Option<StatusView>,
        pub notifications: Vec<Notification>,
        pub submission_enabled: bool,
        pub list_renders: usize,
    }

    impl Default for RecordingSurface {
        fn default() -> Self {
            Self {
                summary: None,
                rows: Vec::new(),
                status: None,
                notifications: Vec::new(),
                submission_enabled: true,
                list_renders: 0,
            }
        }
    }

    impl RecordingSurface {
        pub fn last_notification(&self) -> Option<&Notification> {
            self.notifications.last()
        }
    }

    impl RenderSurface for RecordingSurface {
        fn show_summary(&mut self, summary: SummaryView) {
            self.summary = Some(summary);
        }

        fn show_expenses(&mut self, rows: Vec<ExpenseRow>) {
            self.rows = rows;
            self.list_renders += 1;
        }

        fn show_status(&mut self, status: StatusView) {
            self.status = Some(status);
        }

        fn show_notification(&mut self, notification: Notification) {
            self.notifications.push(notification);
        }

        fn set_submission_enabled(&mut self, enabled: bool) {
            self.submission_enabled = enabled;
        }

        fn clear(&mut self) {
            *self = Self::default();
        }
    }
}
