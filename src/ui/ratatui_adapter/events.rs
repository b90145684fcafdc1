//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to state changes. Handlers are plain
//! functions over [`AppState`] so they can be driven from tests without a
//! terminal.

use super::state::{AppState, Mode};
use crate::map::PanDirection;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Side effects the detail screen asks the event loop to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    /// Open the item's location in the system web browser
    OpenWebMap,
    /// Copy the item's coordinates to the clipboard
    CopyCoordinates,
}

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// State may have changed, redraw
    Continue,
    /// Search text changed
    QueryChanged,
    /// A detail view was opened
    DetailOpened,
    /// The detail view was closed
    DetailClosed,
    /// Detail screen requested an external action
    Action(DetailAction),
    /// Leave the browser
    Quit,
    /// No action taken
    Ignored,
}

/// Pan direction for an arrow key, if it is one
const fn arrow_direction(code: KeyCode) -> Option<PanDirection> {
    match code {
        KeyCode::Up => Some(PanDirection::North),
        KeyCode::Down => Some(PanDirection::South),
        KeyCode::Left => Some(PanDirection::West),
        KeyCode::Right => Some(PanDirection::East),
        _ => None,
    }
}

/// Handle events on the browse screen
fn handle_browse_mode(state: &mut AppState<'_>, key: KeyEvent) -> EventResult {
    // Alt+arrows and Alt +/- drive the browse map
    if key.modifiers.contains(KeyModifiers::ALT) {
        if let Some(direction) = arrow_direction(key.code) {
            state.active_camera_mut().pan(direction);
            return EventResult::Continue;
        }
        return match key.code {
            KeyCode::Char('+' | '=') => {
                state.active_camera_mut().zoom_in();
                EventResult::Continue
            }
            KeyCode::Char('-') => {
                state.active_camera_mut().zoom_out();
                EventResult::Continue
            }
            _ => EventResult::Ignored,
        };
    }

    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            EventResult::Quit
        }
        (KeyCode::Enter, _) => {
            if state.open_detail() {
                EventResult::DetailOpened
            } else {
                EventResult::Ignored
            }
        }

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Help overlay
        (KeyCode::F(1), _) => {
            state.open_help();
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => query_edit(state.query_backspace()),
        (KeyCode::Delete, _) => query_edit(state.query_delete()),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => query_edit(state.query_clear()),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => query_edit(state.query_delete_word()),
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

const fn query_edit(changed: bool) -> EventResult {
    if changed {
        EventResult::QueryChanged
    } else {
        EventResult::Ignored
    }
}

/// Handle events on the detail screen
fn handle_detail_mode(state: &mut AppState<'_>, key: KeyEvent) -> EventResult {
    if let Some(direction) = arrow_direction(key.code) {
        state.active_camera_mut().pan(direction);
        return EventResult::Continue;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            EventResult::Quit
        }
        (KeyCode::Esc | KeyCode::Backspace, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
            state.close_detail();
            EventResult::DetailClosed
        }
        (KeyCode::Char('+' | '='), _) => {
            state.active_camera_mut().zoom_in();
            EventResult::Continue
        }
        (KeyCode::Char('-'), _) => {
            state.active_camera_mut().zoom_out();
            EventResult::Continue
        }
        (KeyCode::Char('c'), KeyModifiers::NONE) => {
            if let Some(detail) = state.detail.as_mut() {
                detail.recenter();
            }
            EventResult::Continue
        }
        (KeyCode::Char('o'), KeyModifiers::NONE) => EventResult::Action(DetailAction::OpenWebMap),
        (KeyCode::Char('y'), KeyModifiers::NONE) => {
            EventResult::Action(DetailAction::CopyCoordinates)
        }
        (KeyCode::F(1), _) | (KeyCode::Char('?'), _) => {
            state.open_help();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState<'_>) -> EventResult {
    // Any key closes help
    state.close_help();
    EventResult::Continue
}

/// Handle a key press in the current mode
pub fn handle_key(state: &mut AppState<'_>, key: KeyEvent) -> EventResult {
    match state.mode {
        Mode::Browse => handle_browse_mode(state, key),
        Mode::Detail => handle_detail_mode(state, key),
        Mode::Help => handle_help_mode(state),
    }
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState<'_>, mouse: MouseEvent) -> EventResult {
    if state.mode != Mode::Browse {
        return EventResult::Ignored;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Dispatch one terminal event
pub fn handle_event(state: &mut AppState<'_>, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState<'_>, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    Ok(handle_event(state, event::read()?))
}
