// src/input/mod.rs
mod global_handlers;
mod normal;

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::editor::Command;

pub use global_handlers::GlobalKeyHandler;

/// Classify a key press into a viewer command.
///
/// Session-wide chords (quit, redraw) are tried first, then the plain
/// navigation and mark bindings. Key releases are ignored.
pub fn translate_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    GlobalKeyHandler::handle(&key).or_else(|| normal::translate_normal(&key))
}
