//! Core data models for the budget tracker
//!
//! Money amounts, expense identifiers and the expense record itself.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
