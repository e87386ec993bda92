//! Line-mode shell
//!
//! A scriptable front end: reads one command per line and prints every
//! presenter update as text. The session starts by asking for the budget and
//! asks again, from scratch, whenever the answer is invalid.

use std::io::{BufRead, Write};

use tracing::info;

use crate::config::Settings;
use crate::display::{format_expense_list, TextSurface};
use crate::error::TrackerResult;
use crate::ledger::Ledger;
use crate::models::ExpenseId;
use crate::presenter::Presenter;
use crate::session::Session;

const BUDGET_PROMPT: &str = "What is your budget? ";

const HELP: &str = "\
Commands:
  add <name> <amount>      Add an expense (the last word is the amount)
  remove <number|id>       Remove an expense by list number or id
  list                     Show the expense list
  status                   Show budget, remaining and status
  reset                    Start over with a new budget
  help                     Show this help
  quit                     Leave
";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add { name: String, amount: String },
    Remove(String),
    List,
    Status,
    Reset,
    Help,
    Quit,
    Empty,
}

impl ShellCommand {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Self::Empty);
        };

        match command.to_lowercase().as_str() {
            "add" | "a" => {
                let mut rest: Vec<&str> = words.collect();
                let amount = rest.pop().unwrap_or_default().to_string();
                Ok(Self::Add {
                    name: rest.join(" "),
                    amount,
                })
            }
            "remove" | "rm" | "delete" | "d" => match words.next() {
                Some(target) => Ok(Self::Remove(target.to_string())),
                None => Err("Usage: remove <number|id>".to_string()),
            },
            "list" | "ls" => Ok(Self::List),
            "status" | "s" => Ok(Self::Status),
            "reset" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!("Unknown command '{}'", other)),
        }
    }
}

/// Find the expense a `remove` argument refers to
///
/// Accepts a 1-based list position, a short id (`exp-1a2b3c4d`) or a full id.
/// A well-formed full id is returned even if no expense has it.
pub fn resolve_target(ledger: &Ledger, target: &str) -> Option<ExpenseId> {
    if let Ok(position) = target.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|i| ledger.expenses().get(i))
            .map(|e| e.id);
    }

    if let Ok(id) = target.parse::<ExpenseId>() {
        return Some(id);
    }

    ledger
        .expenses()
        .iter()
        .find(|e| e.id.matches(target))
        .map(|e| e.id)
}

/// Run a shell session until `quit` or end of input
pub fn run_shell<R, W>(
    input: R,
    output: W,
    settings: &Settings,
    budget: Option<&str>,
) -> TrackerResult<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(Presenter::new(TextSurface::new(output), settings));
    let mut lines = input.lines();

    let started = match budget {
        Some(budget) => {
            session.start(budget)?;
            true
        }
        None => prompt_budget(&mut session, &mut lines)?,
    };
    if !started {
        return Ok(());
    }
    writeln!(session.surface_mut().out(), "Type 'help' for commands.")?;

    loop {
        write!(session.surface_mut().out(), "> ")?;
        session.surface_mut().out().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(
                    session.surface_mut().out(),
                    "{}. Type 'help' for commands.",
                    message
                )?;
                continue;
            }
        };

        match command {
            ShellCommand::Add { name, amount } => {
                // Failures are already shown as notifications
                let _ = session.submit_expense(&name, &amount);
            }
            ShellCommand::Remove(target) => {
                let id = session
                    .ledger()
                    .and_then(|ledger| resolve_target(ledger, &target));
                match id {
                    Some(id) => {
                        session.remove_expense(id);
                    }
                    None => writeln!(
                        session.surface_mut().out(),
                        "Nothing to remove for '{}'",
                        target
                    )?,
                }
            }
            ShellCommand::List => {
                let listing = format_expense_list(session.surface().rows());
                write!(session.surface_mut().out(), "{}", listing)?;
            }
            ShellCommand::Status => session.refresh(),
            ShellCommand::Reset => {
                session.reset();
                if !prompt_budget(&mut session, &mut lines)? {
                    break;
                }
            }
            ShellCommand::Help => write!(session.surface_mut().out(), "{}", HELP)?,
            ShellCommand::Quit => break,
            ShellCommand::Empty => {}
        }

        if let Some(err) = session.surface_mut().take_error() {
            return Err(err.into());
        }
    }

    info!("shell session finished");
    Ok(())
}

/// Ask for the budget until a valid answer arrives.
///
/// Returns `false` when input ends first.
fn prompt_budget<W, I>(session: &mut Session<TextSurface<W>>, lines: &mut I) -> TrackerResult<bool>
where
    W: Write,
    I: Iterator<Item = std::io::Result<String>>,
{
    loop {
        write!(session.surface_mut().out(), "{}", BUDGET_PROMPT)?;
        session.surface_mut().out().flush()?;

        let Some(line) = lines.next() else {
            return Ok(false);
        };
        let line = line?;

        match session.start(&line) {
            Ok(()) => return Ok(true),
            Err(err) if err.is_validation() => {
                writeln!(session.surface_mut().out(), "Starting over.")?;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::models::Money;

    fn run(script: &str) -> String {
        let mut out = Vec::new();
        run_shell(script.as_bytes(), &mut out, &Settings::default(), None).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            ShellCommand::parse("add coffee beans 4.50"),
            Ok(ShellCommand::Add {
                name: "coffee beans".into(),
                amount: "4.50".into()
            })
        );
        assert_eq!(
            ShellCommand::parse("add"),
            Ok(ShellCommand::Add {
                name: String::new(),
                amount: String::new()
            })
        );
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(ShellCommand::parse("  "), Ok(ShellCommand::Empty));
        assert_eq!(ShellCommand::parse("LIST"), Ok(ShellCommand::List));
        assert_eq!(
            ShellCommand::parse("rm 2"),
            Ok(ShellCommand::Remove("2".into()))
        );
        assert!(ShellCommand::parse("remove").is_err());
        assert!(ShellCommand::parse("fly").is_err());
    }

    #[test]
    fn test_resolve_target() {
        let mut ledger = Ledger::create(Money::from_cents(10_000)).unwrap();
        let coffee = ledger.add_expense("coffee", Money::from_cents(500)).unwrap();
        let rent = ledger.add_expense("rent", Money::from_cents(7_000)).unwrap();

        assert_eq!(resolve_target(&ledger, "1"), Some(coffee));
        assert_eq!(resolve_target(&ledger, "2"), Some(rent));
        assert_eq!(resolve_target(&ledger, "0"), None);
        assert_eq!(resolve_target(&ledger, "3"), None);
        assert_eq!(resolve_target(&ledger, &rent.short()), Some(rent));
        assert_eq!(resolve_target(&ledger, &rent.to_string()), Some(rent));
        assert_eq!(resolve_target(&ledger, "nope"), None);
    }

    #[test]
    fn test_scenario() {
        let out = run("100\nadd coffee 5\nadd rent 70\nremove 1\nquit\n");
        assert!(out.contains("Remaining: $95.00"));
        assert!(out.contains("Status: [!!!] Critical (25.0% left)"));
        assert!(out.contains("Remaining: $30.00"));
        assert!(out.contains("Status: [!!] Running low (30.0% left)"));
    }

    #[test]
    fn test_invalid_budget_reprompts() {
        let out = run("-5\nabc\n20\nquit\n");
        assert_eq!(out.matches(BUDGET_PROMPT).count(), 3);
        assert_eq!(out.matches("Starting over.").count(), 2);
        assert!(out.contains("Budget: $20.00"));
    }

    #[test]
    fn test_end_of_input_before_budget() {
        let out = run("");
        assert_eq!(out, BUDGET_PROMPT);
    }

    #[test]
    fn test_exhausted_blocks_add() {
        let out = run("10\nadd lunch 10\nadd snack 1\n");
        assert!(out.contains("[x] Budget exhausted"));
        assert!(out.contains("new expenses are blocked"));
        assert!(out.contains("[x] The budget is exhausted"));
        assert_eq!(out.matches("snack").count(), 0);
    }

    #[test]
    fn test_preset_budget_is_validated() {
        let mut out = Vec::new();
        let err = run_shell(&b""[..], &mut out, &Settings::default(), Some("-5")).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidBudget(_)));
    }
}
