//! Application state for the TUI
//!
//! The App struct holds the budgeting session plus everything the views need
//! that is purely about the terminal: focus, form fields, dialogs, selection.

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::ExpenseId;
use crate::presenter::Presenter;
use crate::session::{Session, SessionState};

use super::screen::Screen;
use super::widgets::TextInput;

/// Which part of the screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Amount,
    List,
}

impl Focus {
    /// Next stop for Tab
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::List,
            Self::List => Self::Name,
        }
    }

    /// Previous stop for Shift+Tab
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::List,
            Self::Amount => Self::Name,
            Self::List => Self::Amount,
        }
    }

    pub fn is_form(self) -> bool {
        matches!(self, Self::Name | Self::Amount)
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Blocking budget question at session start
    BudgetPrompt,
    ConfirmRemove(ExpenseId),
    ConfirmReset,
    Help,
}

/// Main application state
pub struct App {
    /// The budgeting session
    pub session: Session<Screen>,

    /// Whether the app should quit
    pub should_quit: bool,

    pub focus: Focus,

    pub active_dialog: ActiveDialog,

    /// Expense name field
    pub name_input: TextInput,

    /// Expense amount field
    pub amount_input: TextInput,

    /// Budget prompt field
    pub budget_input: TextInput,

    /// Selected row in the expense list
    pub selected_index: usize,
}

impl App {
    /// Create an App that opens on the budget prompt
    pub fn new(settings: &Settings) -> Self {
        let presenter = Presenter::new(Screen::new(), settings);
        let mut app = Self {
            session: Session::new(presenter),
            should_quit: false,
            focus: Focus::default(),
            active_dialog: ActiveDialog::None,
            name_input: TextInput::new().label("Name").placeholder("e.g. Groceries"),
            amount_input: TextInput::new()
                .label("Amount")
                .placeholder("e.g. 42.50")
                .numeric(),
            budget_input: TextInput::new().placeholder("e.g. 1500").numeric(),
            selected_index: 0,
        };
        app.open_dialog(ActiveDialog::BudgetPrompt);
        app.sync_focus();
        app
    }

    /// Create an App with the budget already answered
    pub fn with_budget(settings: &Settings, budget: &str) -> TrackerResult<Self> {
        let mut app = Self::new(settings);
        app.session.start(budget)?;
        app.close_dialog();
        Ok(app)
    }

    pub fn screen(&self) -> &Screen {
        self.session.surface()
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::BudgetPrompt {
            self.budget_input.clear();
            self.budget_input.focused = true;
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Answer the budget prompt. A bad answer restarts the session and keeps
    /// the prompt open.
    pub fn submit_budget(&mut self) {
        let answer = self.budget_input.value().to_string();
        match self.session.start(&answer) {
            Ok(()) => {
                self.close_dialog();
                self.selected_index = 0;
                self.set_focus(Focus::Name);
                self.sync_submission();
            }
            Err(_) => {
                self.open_dialog(ActiveDialog::BudgetPrompt);
            }
        }
    }

    /// Submit the expense form. The form is cleared only on success.
    pub fn submit_expense(&mut self) {
        let name = self.name_input.value().to_string();
        let amount = self.amount_input.value().to_string();

        if self.session.submit_expense(&name, &amount).is_ok() {
            self.name_input.clear();
            self.amount_input.clear();
            self.set_focus(Focus::Name);
            self.selected_index = self.screen().rows.len().saturating_sub(1);
        }
        self.sync_submission();
    }

    /// Ask for confirmation before removing the selected expense
    pub fn request_remove_selected(&mut self) {
        if let Some(row) = self.screen().rows.get(self.selected_index) {
            let id = row.id;
            self.open_dialog(ActiveDialog::ConfirmRemove(id));
        }
    }

    pub fn confirm_remove(&mut self, id: ExpenseId) {
        self.session.remove_expense(id);
        self.close_dialog();
        self.clamp_selection();
        self.sync_submission();
    }

    /// Throw the session away and ask for a new budget
    pub fn restart(&mut self) {
        self.session.reset();
        self.name_input.clear();
        self.amount_input.clear();
        self.selected_index = 0;
        self.open_dialog(ActiveDialog::BudgetPrompt);
        self.set_focus(Focus::Name);
        self.sync_submission();
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.sync_focus();
    }

    pub fn next_focus(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn prev_focus(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// The form field that has focus, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Name => Some(&mut self.name_input),
            Focus::Amount => Some(&mut self.amount_input),
            Focus::List => None,
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = self.screen().rows.len();
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.session.surface_mut().tick();
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    fn clamp_selection(&mut self) {
        let len = self.screen().rows.len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    fn sync_focus(&mut self) {
        self.name_input.focused = self.focus == Focus::Name;
        self.amount_input.focused = self.focus == Focus::Amount;
    }

    /// Mirror the surface's submission flag onto the form fields
    fn sync_submission(&mut self) {
        let enabled = self.screen().submission_enabled;
        self.name_input.enabled = enabled;
        self.amount_input.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.insert(c);
        }
    }

    #[test]
    fn test_starts_on_budget_prompt() {
        let settings = Settings::default();
        let app = App::new(&settings);
        assert_eq!(app.active_dialog, ActiveDialog::BudgetPrompt);
        assert_eq!(app.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_bad_budget_keeps_prompt_open() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        type_into(&mut app.budget_input, "0");
        app.submit_budget();

        assert_eq!(app.active_dialog, ActiveDialog::BudgetPrompt);
        assert!(app.budget_input.value().is_empty());
        assert!(app.screen().notification.current().is_some());

        type_into(&mut app.budget_input, "100");
        app.submit_budget();
        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(app.state(), SessionState::AwaitingExpenses);
    }

    #[test]
    fn test_form_cleared_only_on_success() {
        let settings = Settings::default();
        let mut app = App::with_budget(&settings, "100").unwrap();

        type_into(&mut app.name_input, "coffee");
        app.submit_expense();
        assert_eq!(app.name_input.value(), "coffee");
        assert!(app.screen().rows.is_empty());

        type_into(&mut app.amount_input, "5");
        app.submit_expense();
        assert!(app.name_input.value().is_empty());
        assert!(app.amount_input.value().is_empty());
        assert_eq!(app.screen().rows.len(), 1);
    }

    #[test]
    fn test_exhaustion_disables_form() {
        let settings = Settings::default();
        let mut app = App::with_budget(&settings, "10").unwrap();
        type_into(&mut app.name_input, "lunch");
        type_into(&mut app.amount_input, "10");
        app.submit_expense();

        assert_eq!(app.state(), SessionState::Exhausted);
        assert!(!app.name_input.enabled);
        app.name_input.insert('x');
        assert!(app.name_input.value().is_empty());

        app.set_focus(Focus::List);
        app.request_remove_selected();
        let ActiveDialog::ConfirmRemove(id) = app.active_dialog.clone() else {
            panic!("expected removal confirmation");
        };
        app.confirm_remove(id);
        assert_eq!(app.state(), SessionState::AwaitingExpenses);
        assert!(app.name_input.enabled);
    }

    #[test]
    fn test_restart_returns_to_prompt() {
        let settings = Settings::default();
        let mut app = App::with_budget(&settings, "100").unwrap();
        app.restart();
        assert_eq!(app.active_dialog, ActiveDialog::BudgetPrompt);
        assert_eq!(app.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_restart_after_exhaustion_unlocks_form() {
        let settings = Settings::default();
        let mut app = App::with_budget(&settings, "10").unwrap();
        type_into(&mut app.name_input, "lunch");
        type_into(&mut app.amount_input, "10");
        app.submit_expense();
        assert!(!app.name_input.enabled);

        app.restart();
        app.budget_input.clear();
        type_into(&mut app.budget_input, "100");
        app.submit_budget();

        assert_eq!(app.state(), SessionState::AwaitingExpenses);
        assert!(app.screen().submission_enabled);
        assert!(app.name_input.enabled);
        assert!(app.amount_input.enabled);

        type_into(&mut app.name_input, "x");
        assert_eq!(app.name_input.value(), "x");
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Name.next(), Focus::Amount);
        assert_eq!(Focus::List.next(), Focus::Name);
        assert_eq!(Focus::Name.prev(), Focus::List);
        assert!(Focus::Amount.is_form());
        assert!(!Focus::List.is_form());
    }
}
