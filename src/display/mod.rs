//! Plain terminal output
//!
//! Text formatting of presenter view data and the [`TextSurface`] that prints
//! it, for the non-interactive shell front end.

pub mod expense;
pub mod text_surface;

pub use expense::{format_expense_list, format_notification, format_status, format_summary};
pub use text_surface::TextSurface;
