//! Modal dialogs for the TUI

pub mod budget_prompt;
pub mod confirm;
pub mod help;
