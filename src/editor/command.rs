// src/editor/command.rs
use super::viewport::Motion;

/// Semantic commands produced from key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,         // 'q' / 'Q' / <Esc> / <Ctrl-c>
    Redraw,       // <Ctrl-l>
    Move(Motion),
    SetMark,      // 'm'
    NextMark,     // 'n'
    PrevMark,     // 'p'
}

/// What the event loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Redraw,
    Quit,
}

impl Command {
    pub fn display_name(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::Redraw => "redraw",
            Command::Move(motion) => match motion {
                Motion::LineDown => "line-down",
                Motion::LineUp => "line-up",
                Motion::PageDown => "page-down",
                Motion::PageUp => "page-up",
                Motion::HalfPageDown => "half-page-down",
                Motion::HalfPageUp => "half-page-up",
                Motion::Top => "go-to-top",
                Motion::Bottom => "go-to-bottom",
                Motion::PanRight => "pan-right",
                Motion::PanLeft => "pan-left",
                Motion::HalfPanRight => "half-pan-right",
                Motion::HalfPanLeft => "half-pan-left",
                Motion::ResetColumn => "reset-column",
            },
            Command::SetMark => "set-mark",
            Command::NextMark => "next-mark",
            Command::PrevMark => "previous-mark",
        }
    }
}
