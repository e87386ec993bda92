//! Tracing setup
//!
//! The filter comes from `BUDGET_LOG` when set. Otherwise the TUI log file uses
//! `settings.log_filter` and stderr logging stays at `warn` so it does not
//! drown the shell output.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Settings, TrackerPaths};
use crate::error::{TrackerError, TrackerResult};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "BUDGET_LOG";

static TRACING_INIT: Once = Once::new();

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to the log file (the terminal belongs to the TUI)
    File,
    Stderr,
}

/// Install the global subscriber. Later calls do nothing.
pub fn init(paths: &TrackerPaths, settings: &Settings, target: LogTarget) -> TrackerResult<()> {
    let filter = match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => match target {
            LogTarget::File => EnvFilter::try_new(&settings.log_filter).map_err(|e| {
                TrackerError::Config(format!("Invalid log filter '{}': {}", settings.log_filter, e))
            })?,
            LogTarget::Stderr => EnvFilter::new("warn"),
        },
    };

    match target {
        LogTarget::File => {
            paths.ensure_directories()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())
                .map_err(|e| TrackerError::Io(format!("Failed to open log file: {}", e)))?;

            TRACING_INIT.call_once(|| {
                let _ = fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init();
            });
        }
        LogTarget::Stderr => {
            TRACING_INIT.call_once(|| {
                let _ = fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .try_init();
            });
        }
    }

    tracing::debug!(?target, "tracing initialized");
    Ok(())
}
