//! Keyboard input handling for the TUI.
//!
//! This module translates key events into application state changes.
//! `Enter` on a row is the list's selection callback.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, AppState, PAGE_SCROLL_SIZE};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return false;
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => app.state = AppState::ConfirmingQuit,
        KeyCode::Char('?') => app.state = AppState::ShowingHelp,
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(1),
        KeyCode::PageDown => app.move_cursor_down(PAGE_SCROLL_SIZE),
        KeyCode::PageUp => app.move_cursor_up(PAGE_SCROLL_SIZE),
        KeyCode::Home => app.cursor_to_first(),
        KeyCode::End => app.cursor_to_last(),
        KeyCode::Enter => app.select_cursor(),
        KeyCode::Esc => app.clear_selection(),
        _ => {}
    }

    false
}
