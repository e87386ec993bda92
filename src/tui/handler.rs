//! Event handler for the TUI
//!
//! Routes keyboard events to the active dialog, the entry form or the expense
//! list.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, Focus};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match app.active_dialog.clone() {
        ActiveDialog::BudgetPrompt => dialogs::budget_prompt::handle_key(app, key),
        ActiveDialog::ConfirmRemove(id) => match dialogs::confirm::answer(&key) {
            Some(true) => app.confirm_remove(id),
            Some(false) => app.close_dialog(),
            None => {}
        },
        ActiveDialog::ConfirmReset => match dialogs::confirm::answer(&key) {
            Some(true) => app.restart(),
            Some(false) => app.close_dialog(),
            None => {}
        },
        ActiveDialog::Help => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_dialog()
            }
            _ => {}
        },
        ActiveDialog::None => {
            if app.focus.is_form() {
                handle_form_key(app, key);
            } else {
                handle_list_key(app, key);
            }
        }
    }

    Ok(())
}

/// Handle keys while a form field has focus
fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => app.next_focus(),
        KeyCode::BackTab => app.prev_focus(),
        KeyCode::Enter => app.submit_expense(),
        KeyCode::Esc => app.set_focus(Focus::List),
        KeyCode::F(1) => app.open_dialog(ActiveDialog::Help),
        KeyCode::Backspace => with_input(app, |input| input.backspace()),
        KeyCode::Delete => with_input(app, |input| input.delete()),
        KeyCode::Left => with_input(app, |input| input.move_left()),
        KeyCode::Right => with_input(app, |input| input.move_right()),
        KeyCode::Home => with_input(app, |input| input.move_start()),
        KeyCode::End => with_input(app, |input| input.move_end()),
        KeyCode::Char(c) => with_input(app, |input| input.insert(c)),
        _ => {}
    }
}

/// Handle keys while the expense list has focus
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') | KeyCode::F(1) => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab => app.next_focus(),
        KeyCode::BackTab => app.prev_focus(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('a') | KeyCode::Char('i') => app.set_focus(Focus::Name),
        KeyCode::Char('d') | KeyCode::Delete => app.request_remove_selected(),
        KeyCode::Char('r') => app.open_dialog(ActiveDialog::ConfirmReset),
        _ => {}
    }
}

fn with_input(app: &mut App, edit: impl FnOnce(&mut super::widgets::TextInput)) {
    if let Some(input) = app.focused_input() {
        edit(input);
    }
}
