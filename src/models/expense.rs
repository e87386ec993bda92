//! Expense model
//!
//! A named, strictly positive amount recorded against the session budget.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ExpenseId, Money};

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Money,
    /// When the expense was entered
    pub created_at: DateTime<Local>,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            created_at: Local::now(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NonPositiveAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Amount must be a number greater than 0"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
