// src/input/global_handlers.rs
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::editor::Command;

/// Key bindings that act on the session rather than the viewport
pub struct GlobalKeyHandler;

impl GlobalKeyHandler {
    /// Returns the session command bound to `key`, if any
    pub fn handle(key: &KeyEvent) -> Option<Command> {
        if Self::is_exit_key(key) {
            return Some(Command::Quit);
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => Some(Command::Redraw),
            _ => None,
        }
    }

    /// <Esc>, <Ctrl-c>, and 'q' in either case
    fn is_exit_key(key: &KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => true,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => true,
            (KeyCode::Char(c), modifiers) => {
                !modifiers.contains(KeyModifiers::CONTROL) && c.eq_ignore_ascii_case(&'q')
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_q_is_not_exit() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(GlobalKeyHandler::handle(&key), None);
    }

    #[test]
    fn test_plain_l_is_not_redraw() {
        let key = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(GlobalKeyHandler::handle(&key), None);
    }
}
