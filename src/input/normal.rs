// src/input/normal.rs
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::editor::{Command, Motion};

pub fn translate_normal(key: &KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return translate_control(key.code);
    }

    let motion = match key.code {
        // Vertical scrolling
        KeyCode::Char('j') | KeyCode::Down => Motion::LineDown,
        KeyCode::Char('k') | KeyCode::Up => Motion::LineUp,
        KeyCode::Char(' ') | KeyCode::PageDown => Motion::PageDown,
        KeyCode::Char('b') | KeyCode::PageUp => Motion::PageUp,
        KeyCode::Char('J') => Motion::HalfPageDown,
        KeyCode::Char('K') => Motion::HalfPageUp,
        KeyCode::Char('g') | KeyCode::Home => Motion::Top,
        KeyCode::Char('G') | KeyCode::End => Motion::Bottom,

        // Horizontal panning
        KeyCode::Char('h') | KeyCode::Left => Motion::PanRight,
        KeyCode::Char('l') | KeyCode::Right => Motion::PanLeft,
        KeyCode::Char('H') => Motion::HalfPanRight,
        KeyCode::Char('L') => Motion::HalfPanLeft,
        KeyCode::Char('0') => Motion::ResetColumn,

        // Marks
        KeyCode::Char('m') => return Some(Command::SetMark),
        KeyCode::Char('n') => return Some(Command::NextMark),
        KeyCode::Char('p') => return Some(Command::PrevMark),

        _ => return None,
    };

    Some(Command::Move(motion))
}

fn translate_control(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('d') => Some(Command::Move(Motion::HalfPageDown)),
        KeyCode::Char('u') => Some(Command::Move(Motion::HalfPageUp)),
        _ => None,
    }
}
