// src/ui/mod.rs
mod frame;
mod renderer;
mod terminal;

use std::io;

use crossterm::event::Event;

pub use frame::{compose, Frame};
pub use terminal::{install_panic_hook, CrosstermScreen};

/// The terminal as seen by the event loop.
pub trait Screen {
    /// Current `(width, height)` in cells.
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Block until the next input event.
    fn read_event(&mut self) -> io::Result<Event>;

    /// Paint a full frame; `resync` clears the screen first.
    fn present(&mut self, frame: &Frame, resync: bool) -> io::Result<()>;
}
