// src/ui/renderer.rs
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{PrintStyledContent, StyledContent},
    terminal::{Clear, ClearType},
};

use super::frame::Frame;

/// Paint `frame` onto `writer` and flush once.
///
/// With `resync` the screen is cleared first so that anything drawn
/// outside the viewer (or left over from a resize) is wiped.
pub fn draw_frame<W: Write>(writer: &mut W, frame: &Frame, resync: bool) -> io::Result<()> {
    let start = Instant::now();

    if resync {
        queue!(writer, Clear(ClearType::All))?;
    }

    for row in 0..frame.height() {
        queue!(writer, MoveTo(0, row))?;

        // Batch runs of equally styled cells into one print
        let cells = frame.row(row);
        let mut run = String::with_capacity(usize::from(frame.width()));
        let mut run_style = cells.first().map(|cell| cell.style);
        for cell in cells {
            if Some(cell.style) != run_style {
                if let Some(style) = run_style {
                    queue!(writer, PrintStyledContent(StyledContent::new(style, run.as_str())))?;
                }
                run.clear();
                run_style = Some(cell.style);
            }
            run.push(cell.ch);
        }
        if let Some(style) = run_style {
            queue!(writer, PrintStyledContent(StyledContent::new(style, run.as_str())))?;
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    if elapsed > Duration::from_millis(16) {
        log::warn!("Slow render: {:?}", elapsed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{Buffer, Coords};
    use crate::ui::frame::compose;
    use crossterm::style::ContentStyle;

    fn frame(lines: &[&str], size: (u16, u16)) -> Frame {
        let buffer = Buffer::from_lines(lines.iter().copied());
        compose(&buffer, Coords::default(), size, ContentStyle::default())
    }

    #[test]
    fn test_draw_writes_every_row() {
        let mut out = Vec::new();
        draw_frame(&mut out, &frame(&["alpha", "beta"], (6, 3)), false).unwrap();
        let written = String::from_utf8(out).unwrap();

        assert!(written.contains("alpha "));
        assert!(written.contains("beta  "));
        // Cursor moves to the start of all three rows
        assert!(written.contains("\x1b[1;1H"));
        assert!(written.contains("\x1b[3;1H"));
    }

    #[test]
    fn test_resync_clears_screen() {
        let mut plain = Vec::new();
        let mut synced = Vec::new();
        draw_frame(&mut plain, &frame(&["x"], (1, 1)), false).unwrap();
        draw_frame(&mut synced, &frame(&["x"], (1, 1)), true).unwrap();

        assert!(!String::from_utf8(plain).unwrap().contains("\x1b[2J"));
        assert!(String::from_utf8(synced).unwrap().contains("\x1b[2J"));
    }

    #[test]
    fn test_draw_is_repeatable() {
        let frame = frame(&["same"], (4, 1));
        let mut first = Vec::new();
        let mut second = Vec::new();
        draw_frame(&mut first, &frame, false).unwrap();
        draw_frame(&mut second, &frame, false).unwrap();
        assert_eq!(first, second);
    }
}
