//! Budget ledger
//!
//! Holds the session's total budget and its expenses. `remaining` is never
//! edited directly: it is recomputed as `total - Σ amount` after every change
//! to the expense list. Nothing here renders anything.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseId, Money};

const MSG_BOTH_FIELDS: &str = "Both fields are required";
const MSG_BAD_AMOUNT: &str = "Amount must be a number greater than 0";
const MSG_BAD_BUDGET: &str = "Budget must be a number greater than 0";
const MSG_TOO_LARGE: &str = "Amount is too large";

/// How healthy the remaining budget is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// More than the warning threshold remains
    Normal,
    /// At or below the warning threshold
    Warning,
    /// At or below the critical threshold
    Critical,
}

impl BudgetStatus {
    /// Classify a remaining percentage.
    ///
    /// Each boundary belongs to the stricter band: exactly 25% is critical and
    /// exactly 50% is a warning with the default thresholds.
    pub fn classify(remaining_percent: f64, thresholds: &Thresholds) -> Self {
        if remaining_percent <= thresholds.critical {
            Self::Critical
        } else if remaining_percent <= thresholds.warning {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "OK",
            Self::Warning => "Running low",
            Self::Critical => "Critical",
        }
    }
}

/// Percentage thresholds for the status bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub warning: f64,
    pub critical: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: 50.0,
            critical: 25.0,
        }
    }
}

/// The session budget and its expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    total: Money,
    remaining: Money,
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create a ledger for a positive total
    pub fn create(total: Money) -> TrackerResult<Self> {
        if !total.is_positive() {
            return Err(TrackerError::InvalidBudget(MSG_BAD_BUDGET.into()));
        }

        Ok(Self {
            total,
            remaining: total,
            expenses: Vec::new(),
        })
    }

    /// Create a ledger from the raw text of the budget prompt
    pub fn from_input(input: &str) -> TrackerResult<Self> {
        let total =
            Money::parse(input).map_err(|_| TrackerError::InvalidBudget(MSG_BAD_BUDGET.into()))?;
        Self::create(total)
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn remaining(&self) -> Money {
        self.remaining
    }

    /// Sum of all expense amounts
    pub fn spent(&self) -> Money {
        self.expenses.iter().map(|e| &e.amount).sum()
    }

    /// Expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Add a validated expense and return its id
    pub fn add_expense(&mut self, name: &str, amount: Money) -> TrackerResult<ExpenseId> {
        let expense = Expense::new(name.trim(), amount);
        expense
            .validate()
            .map_err(|e| TrackerError::InvalidExpense(e.to_string()))?;

        // Keep total - spent representable
        self.spent()
            .checked_add(amount)
            .and_then(|spent| self.total.checked_sub(spent))
            .ok_or_else(|| TrackerError::InvalidExpense(MSG_TOO_LARGE.into()))?;

        let id = expense.id;
        debug!(%id, name = %expense.name, amount = %expense.amount, "expense appended");
        self.expenses.push(expense);
        self.recalculate();
        Ok(id)
    }

    /// Add an expense from the raw text of the entry form
    pub fn add_expense_input(&mut self, name: &str, amount: &str) -> TrackerResult<ExpenseId> {
        if name.trim().is_empty() || amount.trim().is_empty() {
            return Err(TrackerError::InvalidExpense(MSG_BOTH_FIELDS.into()));
        }

        let amount =
            Money::parse(amount).map_err(|_| TrackerError::InvalidExpense(MSG_BAD_AMOUNT.into()))?;
        self.add_expense(name, amount)
    }

    /// Remove an expense by id. Unknown ids are ignored.
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let position = self.expenses.iter().position(|e| e.id == id)?;
        let removed = self.expenses.remove(position);
        self.recalculate();
        Some(removed)
    }

    /// Remaining budget as a percentage of the total
    pub fn remaining_fraction(&self) -> f64 {
        self.remaining.percent_of(self.total)
    }

    pub fn status(&self, thresholds: &Thresholds) -> BudgetStatus {
        BudgetStatus::classify(self.remaining_fraction(), thresholds)
    }

    /// Whether nothing is left to spend
    pub fn is_exhausted(&self) -> bool {
        !self.remaining.is_positive()
    }

    fn recalculate(&mut self) {
        self.remaining = self.total - self.spent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(d: i64) -> Money {
        Money::from_dollars_cents(d, 0)
    }

    #[test]
    fn test_create_sets_remaining_to_total() {
        for total in [1, 100, 2_500, 1_000_000] {
            let ledger = Ledger::create(Money::from_cents(total)).unwrap();
            assert_eq!(ledger.remaining(), ledger.total());
            assert!(ledger.expenses().is_empty());
        }
    }

    #[test]
    fn test_create_rejects_non_positive() {
        assert!(matches!(
            Ledger::create(Money::zero()),
            Err(TrackerError::InvalidBudget(_))
        ));
        assert!(matches!(
            Ledger::from_input("-5"),
            Err(TrackerError::InvalidBudget(_))
        ));
        assert!(matches!(
            Ledger::from_input(""),
            Err(TrackerError::InvalidBudget(_))
        ));
        assert!(matches!(
            Ledger::from_input("lots"),
            Err(TrackerError::InvalidBudget(_))
        ));
        assert_eq!(Ledger::from_input("250.75").unwrap().total().cents(), 25_075);
    }

    #[test]
    fn test_remaining_tracks_every_add() {
        let mut ledger = Ledger::create(dollars(1_000)).unwrap();
        let amounts = [1, 999, 12_345, 50, 7];
        let mut spent = 0;

        for (i, cents) in amounts.iter().enumerate() {
            ledger
                .add_expense(&format!("item {}", i), Money::from_cents(*cents))
                .unwrap();
            spent += cents;
            assert_eq!(ledger.remaining().cents(), 100_000 - spent);
            assert_eq!(ledger.remaining(), ledger.total() - ledger.spent());
        }
        assert_eq!(ledger.expenses().len(), amounts.len());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut ledger = Ledger::create(dollars(100)).unwrap();
        ledger.add_expense("a", dollars(1)).unwrap();
        ledger.add_expense("b", dollars(2)).unwrap();
        ledger.add_expense("c", dollars(3)).unwrap();

        let names: Vec<_> = ledger.expenses().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_invalid_expense_leaves_state_unchanged() {
        let mut ledger = Ledger::create(dollars(100)).unwrap();
        ledger.add_expense("coffee", dollars(5)).unwrap();
        let before = ledger.clone();

        let err = ledger.add_expense_input("", "10").unwrap_err();
        assert!(matches!(err, TrackerError::InvalidExpense(ref m) if m == MSG_BOTH_FIELDS));

        let err = ledger.add_expense_input("tea", "").unwrap_err();
        assert!(matches!(err, TrackerError::InvalidExpense(ref m) if m == MSG_BOTH_FIELDS));

        let err = ledger.add_expense_input("tea", "abc").unwrap_err();
        assert!(matches!(err, TrackerError::InvalidExpense(ref m) if m == MSG_BAD_AMOUNT));

        let err = ledger.add_expense_input("tea", "0").unwrap_err();
        assert!(matches!(err, TrackerError::InvalidExpense(ref m) if m == MSG_BAD_AMOUNT));

        assert!(ledger.add_expense("tea", Money::from_cents(-1)).is_err());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut ledger = Ledger::create(dollars(100)).unwrap();
        ledger.add_expense("coffee", dollars(5)).unwrap();
        let before = ledger.clone();

        assert!(ledger.remove_expense(ExpenseId::new()).is_none());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_remove_recomputes_remaining() {
        let mut ledger = Ledger::create(dollars(100)).unwrap();
        let coffee = ledger.add_expense("coffee", dollars(5)).unwrap();
        ledger.add_expense("rent", dollars(70)).unwrap();

        let removed = ledger.remove_expense(coffee).unwrap();
        assert_eq!(removed.name, "coffee");
        assert_eq!(ledger.remaining(), dollars(30));
        assert!(ledger.get(coffee).is_none());
    }

    #[test]
    fn test_classify_boundaries() {
        let t = Thresholds::default();
        assert_eq!(BudgetStatus::classify(25.0, &t), BudgetStatus::Critical);
        assert_eq!(BudgetStatus::classify(25.0001, &t), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::classify(50.0, &t), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::classify(50.0001, &t), BudgetStatus::Normal);
        assert_eq!(BudgetStatus::classify(-10.0, &t), BudgetStatus::Critical);
        assert_eq!(BudgetStatus::classify(100.0, &t), BudgetStatus::Normal);
    }

    #[test]
    fn test_coffee_and_rent_fractions() {
        let t = Thresholds::default();
        let mut ledger = Ledger::create(dollars(100)).unwrap();

        let coffee = ledger.add_expense("coffee", dollars(5)).unwrap();
        assert_eq!(ledger.remaining(), dollars(95));
        assert_eq!(ledger.remaining_fraction(), 95.0);
        assert_eq!(ledger.status(&t), BudgetStatus::Normal);

        ledger.add_expense("rent", dollars(70)).unwrap();
        assert_eq!(ledger.remaining(), dollars(25));
        assert_eq!(ledger.status(&t), BudgetStatus::Critical);

        ledger.remove_expense(coffee);
        assert_eq!(ledger.remaining(), dollars(30));
        assert_eq!(ledger.status(&t), BudgetStatus::Warning);
    }

    #[test]
    fn test_overflowing_expense_is_rejected() {
        let mut ledger = Ledger::from_input("92233720368547758").unwrap();
        ledger.add_expense_input("a", "50000000000000000").unwrap();
        assert!(!ledger.is_exhausted());
        let before = ledger.clone();

        let err = ledger
            .add_expense_input("b", "50000000000000000")
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidExpense(ref msg) if msg == MSG_TOO_LARGE));
        assert_eq!(ledger, before);
        assert_eq!(ledger.remaining(), ledger.total() - ledger.spent());
    }

    #[test]
    fn test_exhaustion() {
        let mut ledger = Ledger::create(dollars(10)).unwrap();
        assert!(!ledger.is_exhausted());

        let big = ledger.add_expense("big", dollars(12)).unwrap();
        assert!(ledger.is_exhausted());
        assert_eq!(ledger.remaining().cents(), -200);

        ledger.remove_expense(big);
        assert!(!ledger.is_exhausted());
    }
}
