//! Non-interactive front ends
//!
//! The line-mode shell that drives a budgeting session from stdin.

pub mod shell;

pub use shell::{resolve_target, run_shell, ShellCommand};
