use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::run_shell;
use budget_tracker::config::{Settings, TrackerPaths};
use budget_tracker::ledger::Ledger;
use budget_tracker::logging::{self, LogTarget};
use budget_tracker::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Terminal budget tracker",
    long_about = "Set a budget, record expenses against it and see how much is left. \
                  The budget lives only for the current session."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// Start with this budget instead of asking for one
        #[arg(short, long, allow_hyphen_values = true)]
        budget: Option<String>,
    },

    /// Line-mode session on stdin/stdout
    Shell {
        /// Start with this budget instead of asking for one
        #[arg(short, long, allow_hyphen_values = true)]
        budget: Option<String>,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Tui { budget: None }) {
        Commands::Tui { budget } => {
            validate_budget(budget.as_deref())?;
            logging::init(&paths, &settings, LogTarget::File)?;
            run_tui(&settings, budget.as_deref())?;
        }
        Commands::Shell { budget } => {
            validate_budget(budget.as_deref())?;
            logging::init(&paths, &settings, LogTarget::Stderr)?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_shell(stdin.lock(), stdout.lock(), &settings, budget.as_deref())?;
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Already initialized: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Notification duration: {} ms", settings.notification_duration_ms);
            println!("  Warning threshold:     {}%", settings.warning_threshold);
            println!("  Critical threshold:    {}%", settings.critical_threshold);
            println!("  Tick rate:             {} ms", settings.tick_rate_ms);
            println!("  Log filter:            {}", settings.log_filter);
        }
    }

    Ok(())
}

/// Reject a bad `--budget` before any session starts
fn validate_budget(budget: Option<&str>) -> Result<()> {
    if let Some(input) = budget {
        Ledger::from_input(input)?;
    }
    Ok(())
}
