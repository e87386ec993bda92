//! Custom error types for the budget tracker
//!
//! Validation failures (`InvalidBudget`, `InvalidExpense`) are surfaced to the
//! user as notifications and never abort the program. The remaining variants
//! cover the ambient concerns: configuration, I/O and terminal handling.

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The initial budget was empty, non-numeric or not positive
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),

    /// An expense had an empty name or a non-positive/non-numeric amount
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),

    /// Expense entry is disabled because the budget is exhausted
    #[error("The budget is exhausted; remove an expense before adding another")]
    SubmissionBlocked,

    /// An expense event arrived before the budget was set
    #[error("No budget has been set for this session")]
    NoBudget,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl TrackerError {
    /// Check if this is one of the user-input validation errors
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidBudget(_) | Self::InvalidExpense(_))
    }

    /// The message shown to the user in a notification.
    ///
    /// Validation errors show their bare message; everything else uses the
    /// full `Display` text.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidBudget(msg) | Self::InvalidExpense(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
