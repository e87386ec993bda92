//! Plain text rendering surface
//!
//! Writes every update as lines of text. Used by the line-mode shell.

use std::io::{self, Write};

use tracing::warn;

use super::expense::{format_expense_list, format_notification, format_status, format_summary};
use crate::presenter::{ExpenseRow, Notification, RenderSurface, StatusView, SummaryView};

/// Surface printing to any writer
#[derive(Debug)]
pub struct TextSurface<W: Write> {
    out: W,
    submission_enabled: bool,
    rows: Vec<ExpenseRow>,
    error: Option<io::Error>,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            submission_enabled: true,
            rows: Vec::new(),
            error: None,
        }
    }

    /// Direct access to the writer for prompts and help text
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn submission_enabled(&self) -> bool {
        self.submission_enabled
    }

    /// The list as last rendered
    pub fn rows(&self) -> &[ExpenseRow] {
        &self.rows
    }

    /// The first write error since the last call, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn write_text(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "failed to write to output");
            self.error = Some(e);
        }
    }
}

impl<W: Write> RenderSurface for TextSurface<W> {
    fn show_summary(&mut self, summary: SummaryView) {
        self.write_text(&format!("{}\n", format_summary(&summary)));
    }

    fn show_expenses(&mut self, rows: Vec<ExpenseRow>) {
        self.write_text(&format_expense_list(&rows));
        self.rows = rows;
    }

    fn show_status(&mut self, status: StatusView) {
        self.write_text(&format!("{}\n", format_status(&status)));
    }

    fn show_notification(&mut self, notification: Notification) {
        self.write_text(&format!("{}\n", format_notification(&notification)));
    }

    fn set_submission_enabled(&mut self, enabled: bool) {
        self.submission_enabled = enabled;
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.submission_enabled = true;
    }
}
