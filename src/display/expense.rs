//! Expense and budget display formatting
//!
//! Formats presenter view data for plain terminal output.

use crate::ledger::BudgetStatus;
use crate::presenter::{ExpenseRow, Notification, StatusView, SummaryView};

/// Format the budget figures on one line
pub fn format_summary(summary: &SummaryView) -> String {
    format!(
        "Budget: {}  Spent: {}  Remaining: {}",
        summary.total, summary.spent, summary.remaining
    )
}

/// Format the expense list as a table
pub fn format_expense_list(rows: &[ExpenseRow]) -> String {
    if rows.is_empty() {
        return "No expenses yet.\n".to_string();
    }

    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(4)
        .clamp(4, 30);
    let amount_width = rows
        .iter()
        .map(|r| r.amount.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<name_width$}  {:>amount_width$}  {:8}  {}\n",
        "#",
        "Expense",
        "Amount",
        "Added",
        "ID",
        name_width = name_width,
        amount_width = amount_width
    ));
    output.push_str(&format!(
        "{:->3}  {:-<name_width$}  {:->amount_width$}  {:-<8}  {:-<12}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        amount_width = amount_width
    ));

    for row in rows {
        output.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>amount_width$}  {:8}  {}\n",
            row.position,
            truncate(&row.name, name_width),
            row.amount,
            row.added,
            row.id.short(),
            name_width = name_width,
            amount_width = amount_width
        ));
    }

    output
}

/// Format the status band line
pub fn format_status(status: &StatusView) -> String {
    let marker = match status.status {
        BudgetStatus::Normal => "[ok]",
        BudgetStatus::Warning => "[!!]",
        BudgetStatus::Critical => "[!!!]",
    };
    let mut line = format!(
        "Status: {} {} ({:.1}% left)",
        marker,
        status.status.label(),
        status.remaining_percent
    );
    if status.exhausted {
        line.push_str(" - new expenses are blocked");
    }
    line
}

/// Format a notification as a single line
pub fn format_notification(notification: &Notification) -> String {
    format!(
        "[{}] {}",
        notification.kind.icon(),
        notification.message
    )
}

/// Truncate a string to a max display width, adding an ellipsis
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
