// src/editor/viewport.rs
/// Top-left anchor of the viewport in content coordinates.
///
/// `y` is the first visible line. `x` shifts the text horizontally: it is
/// `0` when the first column is visible and grows more negative as the view
/// pans towards the end of long lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Coords {
    pub x: isize,
    pub y: isize,
}

impl Coords {
    #[cfg(test)]
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }
}

/// Every scroll operation the viewer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    LineDown,     // 'j'
    LineUp,       // 'k'
    PageDown,     // <Space>
    PageUp,       // 'b'
    HalfPageDown, // 'J' / <Ctrl-d>
    HalfPageUp,   // 'K' / <Ctrl-u>
    Top,          // 'g'
    Bottom,       // 'G'
    PanRight,     // 'h'
    PanLeft,      // 'l'
    HalfPanRight, // 'H'
    HalfPanLeft,  // 'L'
    ResetColumn,  // '0'
}

/// Compute the offset reached by applying `motion` to `offset`.
///
/// `size` is the current `(width, height)` of the text area and
/// `line_count` the number of lines in the buffer. Moves are clamped after
/// the fact and only on the side they travel towards: downward moves are
/// capped at `max(0, line_count - height)`, upward moves floored at `0`,
/// and panning is capped at `x <= 0` with no limit the other way.
pub fn navigate(offset: Coords, motion: Motion, size: (u16, u16), line_count: usize) -> Coords {
    let width = cells(size.0);
    let height = cells(size.1);
    let lines = line_count as isize;
    let Coords { mut x, mut y } = offset;

    match motion {
        Motion::LineDown => y = clamp_bottom(y.saturating_add(1), height, lines),
        Motion::LineUp => y = clamp_top(y.saturating_sub(1)),
        Motion::PageDown => y = clamp_bottom(y.saturating_add(page_step(height)), height, lines),
        Motion::PageUp => y = clamp_top(y.saturating_sub(page_step(height))),
        Motion::HalfPageDown => y = clamp_bottom(y.saturating_add(height / 2), height, lines),
        Motion::HalfPageUp => y = clamp_top(y.saturating_sub(height / 2)),
        Motion::Top => y = 0,
        Motion::Bottom => y = bottom_limit(height, lines),
        Motion::PanRight => x = clamp_left_edge(x.saturating_add(1)),
        Motion::PanLeft => x = x.saturating_sub(1),
        Motion::HalfPanRight => x = clamp_left_edge(x.saturating_add(width / 2)),
        Motion::HalfPanLeft => x = x.saturating_sub(width / 2),
        Motion::ResetColumn => x = 0,
    }

    Coords { x, y }
}

/// Terminal cell count as a signed offset.
pub fn cells(n: u16) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

// A full page keeps one line of overlap with the previous screen
fn page_step(height: isize) -> isize {
    (height - 1).max(0)
}

/// Largest first line that still fills the viewport; `0` when the whole
/// buffer fits.
fn bottom_limit(height: isize, lines: isize) -> isize {
    (lines - height).max(0)
}

fn clamp_bottom(y: isize, height: isize, lines: isize) -> isize {
    if y.saturating_add(height) > lines {
        bottom_limit(height, lines)
    } else {
        y
    }
}

fn clamp_top(y: isize) -> isize {
    y.max(0)
}

fn clamp_left_edge(x: isize) -> isize {
    x.min(0)
}

/// Scroll state of the single view onto the buffer.
///
/// The terminal size is not stored here; it is passed to every motion
/// because the terminal can be resized between two key presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: Coords,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> Coords {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Coords) {
        self.offset = offset;
    }

    pub fn apply(&mut self, motion: Motion, size: (u16, u16), line_count: usize) {
        self.offset = navigate(self.offset, motion, size, line_count);
    }
}
