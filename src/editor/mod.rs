// src/editor/mod.rs
pub mod buffer;
pub mod command;
pub mod marks;
pub mod viewport;

// Re-export the types we need publicly
pub use buffer::Buffer;
pub use command::{Command, Flow};
pub use marks::MarkRing;
pub use viewport::{Coords, Motion, Viewport};

use std::path::Path;

use crate::error::Result;

/// All state of one viewing session.
#[derive(Debug, Default)]
pub struct Viewer {
    pub buffer: Buffer,
    pub viewport: Viewport,
    pub marks: MarkRing,
}

impl Viewer {
    pub fn new(buffer: Buffer) -> Self {
        Self {
            buffer,
            viewport: Viewport::new(),
            marks: MarkRing::new(),
        }
    }

    pub fn open_file(path: &Path) -> Result<Self> {
        Ok(Self::new(Buffer::load(path)?))
    }

    pub fn offset(&self) -> Coords {
        self.viewport.offset()
    }

    /// Run one command against the session. `size` is the text area as
    /// `(width, height)` at the time of the key press.
    pub fn dispatch(&mut self, command: Command, size: (u16, u16)) -> Flow {
        log::debug!("{} at {:?}", command.display_name(), self.offset());

        match command {
            Command::Quit => return Flow::Quit,
            Command::Redraw => return Flow::Redraw,
            Command::Move(motion) => {
                self.viewport.apply(motion, size, self.buffer.line_count());
            }
            Command::SetMark => {
                self.marks.set_mark(self.viewport.offset());
                log::info!("mark {} set at {:?}", self.marks.len(), self.offset());
            }
            Command::NextMark => {
                self.marks.next();
                self.jump_to_current_mark();
            }
            Command::PrevMark => {
                self.marks.previous();
                self.jump_to_current_mark();
            }
        }

        Flow::Continue
    }

    fn jump_to_current_mark(&mut self) {
        if let Some(mark) = self.marks.recall() {
            log::debug!("jump to {:?} {}", mark.coords(), mark.note());
            self.viewport.set_offset(mark.coords());
        }
    }

    pub fn file_info(&self) -> String {
        match self.buffer.path() {
            Some(path) => path.display().to_string(),
            None => String::from("[No Name]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: (u16, u16) = (80, 20);

    fn viewer_with_lines(n: usize) -> Viewer {
        Viewer::new(Buffer::from_lines((0..n).map(|i| format!("line {}", i))))
    }

    #[test]
    fn test_new_viewer_starts_at_origin() {
        let viewer = viewer_with_lines(10);
        assert_eq!(viewer.offset(), Coords::new(0, 0));
        assert!(viewer.marks.is_empty());
    }

    #[test]
    fn test_quit_and_redraw_flows() {
        let mut viewer = viewer_with_lines(10);
        assert_eq!(viewer.dispatch(Command::Quit, SIZE), Flow::Quit);
        assert_eq!(viewer.dispatch(Command::Redraw, SIZE), Flow::Redraw);
        assert_eq!(
            viewer.dispatch(Command::Move(Motion::LineDown), SIZE),
            Flow::Continue
        );
    }

    #[test]
    fn test_motion_uses_size_of_call() {
        let mut viewer = viewer_with_lines(100);
        viewer.dispatch(Command::Move(Motion::PageDown), SIZE);
        assert_eq!(viewer.offset().y, 19);

        viewer.dispatch(Command::Move(Motion::PageDown), (80, 40));
        assert_eq!(viewer.offset().y, 58);
    }

    #[test]
    fn test_jump_on_empty_ring_is_noop() {
        let mut viewer = viewer_with_lines(100);
        viewer.dispatch(Command::Move(Motion::HalfPageDown), SIZE);
        let before = viewer.offset();

        viewer.dispatch(Command::NextMark, SIZE);
        viewer.dispatch(Command::PrevMark, SIZE);

        assert_eq!(viewer.offset(), before);
        assert_eq!(viewer.marks.current_index(), None);
    }

    #[test]
    fn test_mark_round_trip() {
        let mut viewer = viewer_with_lines(100);
        viewer.dispatch(Command::Move(Motion::HalfPageDown), SIZE);
        viewer.dispatch(Command::Move(Motion::PanLeft), SIZE);
        let saved = viewer.offset();
        viewer.dispatch(Command::SetMark, SIZE);

        viewer.dispatch(Command::Move(Motion::Bottom), SIZE);
        viewer.dispatch(Command::Move(Motion::ResetColumn), SIZE);
        assert_ne!(viewer.offset(), saved);

        viewer.dispatch(Command::NextMark, SIZE);
        assert_eq!(viewer.offset(), saved);
    }

    #[test]
    fn test_cycling_marks_moves_viewport() {
        let mut viewer = viewer_with_lines(100);
        for _ in 0..3 {
            viewer.dispatch(Command::SetMark, SIZE);
            viewer.dispatch(Command::Move(Motion::PageDown), SIZE);
        }

        viewer.dispatch(Command::NextMark, SIZE);
        assert_eq!(viewer.offset(), Coords::new(0, 0));

        viewer.dispatch(Command::PrevMark, SIZE);
        assert_eq!(viewer.offset(), Coords::new(0, 38));
    }

    #[test]
    fn test_set_mark_keeps_offset() {
        let mut viewer = viewer_with_lines(100);
        viewer.dispatch(Command::Move(Motion::LineDown), SIZE);
        viewer.dispatch(Command::SetMark, SIZE);
        assert_eq!(viewer.offset(), Coords::new(0, 1));
    }

    #[test]
    fn test_file_info_without_path() {
        assert_eq!(viewer_with_lines(1).file_info(), "[No Name]");
    }
}
