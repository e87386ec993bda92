//! Session context and event dispatch
//!
//! A [`Session`] owns the (optional) ledger and the presenter for one budgeting
//! session. Front ends forward user events to it; each event is validated,
//! applied to the ledger and then the surface is refreshed.
//!
//! ```text
//! Uninitialized --start(ok)--> AwaitingExpenses <--remove--> Exhausted
//!       ^   |                         |  submit                  ^
//!       +---+ start(err) = reset      +--------------------------+
//! ```

use tracing::{debug, info, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;
use crate::models::{Expense, ExpenseId};
use crate::presenter::{NotificationKind, Presenter, RenderSurface};

/// Message shown after a successful submission
pub const MSG_EXPENSE_ADDED: &str = "Expense added";

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No budget yet
    Uninitialized,
    /// Budget set and money left
    AwaitingExpenses,
    /// Nothing left; only removals are accepted
    Exhausted,
}

/// One budgeting session
#[derive(Debug)]
pub struct Session<S> {
    ledger: Option<Ledger>,
    presenter: Presenter<S>,
}

impl<S: RenderSurface> Session<S> {
    pub fn new(presenter: Presenter<S>) -> Self {
        Self {
            ledger: None,
            presenter,
        }
    }

    pub fn state(&self) -> SessionState {
        match &self.ledger {
            None => SessionState::Uninitialized,
            Some(ledger) if ledger.is_exhausted() => SessionState::Exhausted,
            Some(_) => SessionState::AwaitingExpenses,
        }
    }

    pub fn ledger(&self) -> Option<&Ledger> {
        self.ledger.as_ref()
    }

    pub fn presenter(&self) -> &Presenter<S> {
        &self.presenter
    }

    pub fn into_presenter(self) -> Presenter<S> {
        self.presenter
    }

    pub fn surface(&self) -> &S {
        self.presenter.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.presenter.surface_mut()
    }

    /// Set the budget from the raw prompt answer.
    ///
    /// An invalid answer restarts the whole session: nothing survives and the
    /// caller is expected to prompt again.
    pub fn start(&mut self, input: &str) -> TrackerResult<()> {
        match Ledger::from_input(input) {
            Ok(ledger) => {
                info!(total = %ledger.total(), "budget set");
                self.presenter.clear();
                self.ledger = Some(ledger);
                self.refresh();
                Ok(())
            }
            Err(err) => {
                warn!(input, error = %err, "invalid budget, restarting session");
                self.reset();
                self.presenter
                    .notify(err.user_message(), NotificationKind::Error);
                Err(err)
            }
        }
    }

    /// Handle a submission of the expense form
    pub fn submit_expense(&mut self, name: &str, amount: &str) -> TrackerResult<ExpenseId> {
        let Some(ledger) = self.ledger.as_mut() else {
            let err = TrackerError::NoBudget;
            self.presenter
                .notify(err.user_message(), NotificationKind::Error);
            return Err(err);
        };

        if ledger.is_exhausted() {
            let err = TrackerError::SubmissionBlocked;
            debug!("submission rejected, budget exhausted");
            self.presenter
                .notify(err.user_message(), NotificationKind::Error);
            return Err(err);
        }

        let band_before = ledger.status(self.presenter.thresholds());

        match ledger.add_expense_input(name, amount) {
            Ok(id) => {
                info!(%id, name = name.trim(), remaining = %ledger.remaining(), "expense added");
                let band_after = ledger.status(self.presenter.thresholds());
                let percent_left = ledger.remaining_fraction();
                let exhausted = ledger.is_exhausted();

                self.presenter
                    .notify(MSG_EXPENSE_ADDED, NotificationKind::Success);
                if band_after != band_before && !exhausted {
                    self.presenter.notify(
                        format!("{} ({:.1}% left)", band_after.label(), percent_left),
                        NotificationKind::Warning,
                    );
                }
                self.refresh();
                Ok(id)
            }
            Err(err) => {
                warn!(name, amount, error = %err, "expense rejected");
                self.presenter
                    .notify(err.user_message(), NotificationKind::Error);
                Err(err)
            }
        }
    }

    /// Handle a removal request. Unknown ids change nothing.
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let ledger = self.ledger.as_mut()?;
        let removed = ledger.remove_expense(id);

        match &removed {
            Some(expense) => {
                info!(%id, name = %expense.name, remaining = %ledger.remaining(), "expense removed");
                self.presenter
                    .notify(format!("Removed '{}'", expense.name), NotificationKind::Info);
            }
            None => debug!(%id, "removal of unknown expense ignored"),
        }

        self.refresh();
        removed
    }

    /// Re-render everything from the current ledger
    pub fn refresh(&mut self) {
        if let Some(ledger) = &self.ledger {
            self.presenter.render_ledger(ledger);
        }
    }

    /// Throw the session away and go back to waiting for a budget
    pub fn reset(&mut self) {
        if self.ledger.take().is_some() {
            info!("session reset");
        }
        self.presenter.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::ledger::BudgetStatus;
    use crate::models::Money;
    use crate::presenter::testing::RecordingSurface;
    use crate::presenter::MSG_EXHAUSTED;

    fn session() -> Session<RecordingSurface> {
        Session::new(Presenter::new(
            RecordingSurface::default(),
            &Settings::default(),
        ))
    }

    fn started(budget: &str) -> Session<RecordingSurface> {
        let mut s = session();
        s.start(budget).unwrap();
        s
    }

    #[test]
    fn test_start_renders_full_budget() {
        let s = started("100");
        assert_eq!(s.state(), SessionState::AwaitingExpenses);

        let surface = s.surface();
        let summary = surface.summary.as_ref().unwrap();
        assert_eq!(summary.total, "$100.00");
        assert_eq!(summary.remaining, "$100.00");
        assert!(surface.rows.is_empty());
        assert_eq!(surface.status.unwrap().status, BudgetStatus::Normal);
        assert!(surface.submission_enabled);
    }

    #[test]
    fn test_invalid_budget_resets_session() {
        let mut s = started("100");
        s.submit_expense("coffee", "5").unwrap();

        let err = s.start("-5").unwrap_err();
        assert!(matches!(err, TrackerError::InvalidBudget(_)));
        assert_eq!(s.state(), SessionState::Uninitialized);
        assert!(s.ledger().is_none());

        let surface = s.surface();
        assert!(surface.summary.is_none());
        assert!(surface.rows.is_empty());
        assert_eq!(surface.notifications.len(), 1);
        assert_eq!(
            surface.last_notification().unwrap().kind,
            NotificationKind::Error
        );

        // A fresh answer starts over
        s.start("50").unwrap();
        assert_eq!(s.ledger().unwrap().total(), Money::from_cents(5_000));
    }

    #[test]
    fn test_submit_before_budget_is_rejected() {
        let mut s = session();
        assert!(matches!(
            s.submit_expense("coffee", "5"),
            Err(TrackerError::NoBudget)
        ));
        assert_eq!(s.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_coffee_rent_scenario() {
        let mut s = started("100");

        let coffee = s.submit_expense("coffee", "5").unwrap();
        {
            let surface = s.surface();
            assert_eq!(surface.summary.as_ref().unwrap().remaining, "$95.00");
            let status = surface.status.unwrap();
            assert_eq!(status.remaining_percent, 95.0);
            assert_eq!(status.status, BudgetStatus::Normal);
        }

        assert_eq!(
            s.surface().last_notification().unwrap().kind,
            NotificationKind::Success
        );

        s.submit_expense("rent", "70").unwrap();
        {
            let surface = s.surface();
            assert_eq!(surface.summary.as_ref().unwrap().remaining, "$25.00");
            assert_eq!(surface.status.unwrap().status, BudgetStatus::Critical);
            let shown: Vec<_> = surface
                .notifications
                .iter()
                .rev()
                .take(2)
                .map(|n| (n.kind, n.message.as_str()))
                .collect();
            assert_eq!(
                shown,
                vec![
                    (NotificationKind::Warning, "Critical (25.0% left)"),
                    (NotificationKind::Success, MSG_EXPENSE_ADDED),
                ]
            );
            assert_eq!(surface.rows.len(), 2);
        }

        s.remove_expense(coffee).unwrap();
        let surface = s.surface();
        let n = surface.last_notification().unwrap();
        assert_eq!(n.kind, NotificationKind::Info);
        assert_eq!(n.message, "Removed 'coffee'");
        assert_eq!(surface.summary.as_ref().unwrap().remaining, "$30.00");
        assert_eq!(surface.status.unwrap().status, BudgetStatus::Warning);
        assert_eq!(surface.rows.len(), 1);
        assert_eq!(surface.rows[0].name, "rent");
    }

    #[test]
    fn test_invalid_expense_keeps_state() {
        let mut s = started("100");
        s.submit_expense("coffee", "5").unwrap();
        let before = s.ledger().cloned();
        let renders = s.surface().list_renders;

        let err = s.submit_expense("", "10").unwrap_err();
        assert!(matches!(err, TrackerError::InvalidExpense(_)));
        assert_eq!(s.ledger().cloned(), before);
        assert_eq!(s.surface().list_renders, renders);

        let n = s.surface().last_notification().unwrap();
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.message, "Both fields are required");
    }

    #[test]
    fn test_exhaustion_blocks_until_removal() {
        let mut s = started("10");
        let lunch = s.submit_expense("lunch", "10").unwrap();

        assert_eq!(s.state(), SessionState::Exhausted);
        assert!(!s.surface().submission_enabled);
        assert_eq!(
            s.surface().last_notification().unwrap().message,
            MSG_EXHAUSTED
        );

        let err = s.submit_expense("snack", "1").unwrap_err();
        assert!(matches!(err, TrackerError::SubmissionBlocked));
        assert_eq!(s.ledger().unwrap().expenses().len(), 1);

        s.remove_expense(lunch).unwrap();
        assert_eq!(s.state(), SessionState::AwaitingExpenses);
        assert!(s.surface().submission_enabled);
        s.submit_expense("snack", "1").unwrap();
    }

    #[test]
    fn test_overspending_goes_negative() {
        let mut s = started("10");
        s.submit_expense("laptop", "900").unwrap();
        assert_eq!(s.state(), SessionState::Exhausted);
        assert_eq!(
            s.surface().summary.as_ref().unwrap().remaining,
            "-$890.00"
        );
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut s = started("100");
        s.submit_expense("coffee", "5").unwrap();
        let before = s.ledger().cloned();

        assert!(s.remove_expense(ExpenseId::new()).is_none());
        assert_eq!(s.ledger().cloned(), before);
        assert_eq!(s.surface().rows.len(), 1);
    }

    #[test]
    fn test_band_change_warns_once() {
        let mut s = started("100");
        s.submit_expense("groceries", "55").unwrap();
        let n = s.surface().last_notification().unwrap();
        assert_eq!(n.kind, NotificationKind::Warning);
        assert_eq!(n.message, "Running low (45.0% left)");

        // Still in the same band
        s.submit_expense("bus", "5").unwrap();
        assert_eq!(
            s.surface().last_notification().unwrap().message,
            MSG_EXPENSE_ADDED
        );
    }

    #[test]
    fn test_unknown_removal_shows_nothing() {
        let mut s = started("100");
        let before = s.surface().notifications.len();
        s.remove_expense(ExpenseId::new());
        assert_eq!(s.surface().notifications.len(), before);
    }

    #[test]
    fn test_remove_without_budget_is_noop() {
        let mut s = session();
        assert!(s.remove_expense(ExpenseId::new()).is_none());
        assert_eq!(s.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_explicit_reset() {
        let mut s = started("100");
        s.submit_expense("coffee", "5").unwrap();
        s.reset();

        assert_eq!(s.state(), SessionState::Uninitialized);
        assert!(s.surface().summary.is_none());
        assert!(s.surface().notifications.is_empty());
    }
}
