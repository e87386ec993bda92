//! budget-tracker - Terminal budget tracker
//!
//! Set a budget, record expenses against it and watch what is left. The
//! budget only lives for the length of a session.
//!
//! # Architecture
//!
//! - `ledger`: budget state and arithmetic, no I/O
//! - `presenter`: turns ledger state into view data for a `RenderSurface`
//! - `session`: the event flow tying a ledger to a presenter
//! - `tui`: ratatui front end
//! - `cli`: line-mode shell
//! - `display`: plain text formatting and the text surface
//! - `config`: paths and user settings
//! - `logging`: tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::Settings;
//! use budget_tracker::display::TextSurface;
//! use budget_tracker::presenter::Presenter;
//! use budget_tracker::session::Session;
//!
//! let settings = Settings::default();
//! let mut session = Session::new(Presenter::new(TextSurface::new(std::io::stdout()), &settings));
//! session.start("100")?;
//! session.submit_expense("coffee", "5")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod presenter;
pub mod session;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
