//! Terminal User Interface module
//!
//! Interactive front end built on ratatui. The `Screen` surface collects
//! what the presenter renders and the views draw it every frame.

pub mod app;
pub mod event;
pub mod handler;
pub mod screen;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use screen::Screen;
pub use terminal::run_tui;
