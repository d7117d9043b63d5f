//! Event handling for the explorer TUI
//!
//! Maps crossterm events to explorer [`Command`]s. What a key means depends
//! on whether the search input has focus.

use crate::explorer::Command;
use crate::search::Key;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Keys while the search input has focus
fn handle_focused(key: KeyEvent) -> Option<Command> {
    let command = match key.code {
        KeyCode::Esc => Command::Blur,
        KeyCode::Enter => Command::Key(Key::Enter),
        KeyCode::Backspace => Command::Key(Key::Backspace),
        KeyCode::Delete => Command::Key(Key::Delete),
        KeyCode::Left => Command::Key(Key::Left),
        KeyCode::Right => Command::Key(Key::Right),
        KeyCode::Home => Command::Key(Key::Home),
        KeyCode::End => Command::Key(Key::End),
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            Command::Key(Key::Char(c))
        }
        _ => return None,
    };
    Some(command)
}

/// Keys while the results have focus
fn handle_blurred(key: KeyEvent) -> Option<Command> {
    let command = match key.code {
        KeyCode::Char('/') | KeyCode::Tab => Command::Focus,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('b') => Command::Back,
        KeyCode::Char('f') => Command::Forward,
        KeyCode::Up | KeyCode::Char('k') => Command::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => Command::ScrollDown,
        _ => return None,
    };
    Some(command)
}

/// Translate a terminal event
///
/// Returns `None` for events the explorer does not react to.
#[must_use]
pub fn map_event(event: &Event, focused: bool) -> Option<Command> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            match (key.code, key.modifiers) {
                (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Command::Quit),
                (KeyCode::Left, KeyModifiers::ALT) => Some(Command::Back),
                (KeyCode::Right, KeyModifiers::ALT) => Some(Command::Forward),
                _ if focused => handle_focused(*key),
                _ => handle_blurred(*key),
            }
        }
        Event::Resize(_, _) => Some(Command::Resize),
        _ => None,
    }
}

/// Wait up to `timeout` for an event and translate it
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_command(timeout: Duration, focused: bool) -> std::io::Result<Option<Command>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(map_event(&event::read()?, focused))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_focus_keys() {
        assert_eq!(
            map_event(&key(KeyCode::Char('/'), KeyModifiers::NONE), false),
            Some(Command::Focus)
        );
        assert_eq!(
            map_event(&key(KeyCode::Tab, KeyModifiers::NONE), false),
            Some(Command::Focus)
        );
        assert_eq!(
            map_event(&key(KeyCode::Esc, KeyModifiers::NONE), true),
            Some(Command::Blur)
        );
    }

    #[test]
    fn test_query_input() {
        assert_eq!(
            map_event(&key(KeyCode::Char('q'), KeyModifiers::NONE), true),
            Some(Command::Key(Key::Char('q')))
        );
        assert_eq!(
            map_event(&key(KeyCode::Char('A'), KeyModifiers::SHIFT), true),
            Some(Command::Key(Key::Char('A')))
        );
        assert_eq!(
            map_event(&key(KeyCode::Enter, KeyModifiers::NONE), true),
            Some(Command::Key(Key::Enter))
        );
        assert_eq!(map_event(&key(KeyCode::Char('x'), KeyModifiers::ALT), true), None);
    }

    #[test]
    fn test_quit() {
        assert_eq!(
            map_event(&key(KeyCode::Char('q'), KeyModifiers::NONE), false),
            Some(Command::Quit)
        );
        assert_eq!(
            map_event(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), true),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_history_navigation() {
        assert_eq!(
            map_event(&key(KeyCode::Left, KeyModifiers::ALT), true),
            Some(Command::Back)
        );
        assert_eq!(
            map_event(&key(KeyCode::Right, KeyModifiers::ALT), false),
            Some(Command::Forward)
        );
        assert_eq!(
            map_event(&key(KeyCode::Char('b'), KeyModifiers::NONE), false),
            Some(Command::Back)
        );
        // Plain Left edits the query
        assert_eq!(
            map_event(&key(KeyCode::Left, KeyModifiers::NONE), true),
            Some(Command::Key(Key::Left))
        );
    }

    #[test]
    fn test_resize() {
        assert_eq!(map_event(&Event::Resize(80, 24), false), Some(Command::Resize));
    }
}
