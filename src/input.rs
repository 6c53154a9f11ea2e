//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  Adding a new keybinding is
//! a single match arm in [`handle_key_event`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// What the main loop should do after a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// State was updated in place (or the key was ignored); keep going.
    None,
    /// The user asked for a fresh fetch; the loop must spawn one.
    Refresh,
}

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.  Pagination keys are
/// filtered inside [`App`]: they do nothing outside the `Ready` state.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Right | KeyCode::Char('n') | KeyCode::PageDown => app.next_page(),
        KeyCode::Left | KeyCode::Char('p') | KeyCode::PageUp => app.prev_page(),
        KeyCode::Char('r') => return Action::Refresh,
        _ => {}
    }
    Action::None
}
