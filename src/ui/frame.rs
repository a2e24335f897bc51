// src/ui/frame.rs
use crossterm::style::ContentStyle;

use crate::editor::viewport::cells;
use crate::editor::{Buffer, Coords};

/// One character cell of the screen grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: ContentStyle,
}

impl Cell {
    pub fn blank(style: ContentStyle) -> Self {
        Self { ch: ' ', style }
    }
}

/// A full `width x height` grid ready to be painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Cell>, // row-major
}

impl Frame {
    pub fn new(width: u16, height: u16, style: ContentStyle) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(style); usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn set(&mut self, col: u16, row: u16, cell: Cell) {
        if col < self.width && row < self.height {
            let index = self.index(col, row);
            self.cells[index] = cell;
        }
    }

    pub fn row(&self, row: u16) -> &[Cell] {
        if row >= self.height {
            return &[];
        }
        let start = self.index(0, row);
        &self.cells[start..start + usize::from(self.width)]
    }

    #[cfg(test)]
    pub fn row_text(&self, row: u16) -> String {
        self.row(row).iter().map(|cell| cell.ch).collect()
    }

    fn index(&self, col: u16, row: u16) -> usize {
        usize::from(row) * usize::from(self.width) + usize::from(col)
    }
}

/// Project `buffer` through the viewport anchored at `offset`.
///
/// Row `r` shows line `offset.y + r` and column `c` shows character
/// `c - offset.x` of that line. Rows outside the buffer (a negative
/// offset, or scrolled past the end) and cells past the end of a line are
/// left blank. Long lines are cut at the right edge, never wrapped.
pub fn compose(buffer: &Buffer, offset: Coords, size: (u16, u16), style: ContentStyle) -> Frame {
    let (width, height) = size;
    let mut frame = Frame::new(width, height, style);

    // Columns left blank before the text starts, and characters hidden
    // off the left edge.
    let (lead, skip) = if offset.x >= 0 {
        (offset.x.unsigned_abs(), 0)
    } else {
        (0, offset.x.unsigned_abs())
    };

    for row in 0..height {
        let index = offset.y.saturating_add(cells(row));
        let Some(line) = usize::try_from(index).ok().and_then(|i| buffer.get_line(i)) else {
            continue;
        };

        let columns = (lead..usize::from(width)).filter_map(|col| u16::try_from(col).ok());
        for (col, ch) in columns.zip(line.chars().skip(skip)) {
            frame.set(
                col,
                row,
                Cell {
                    ch: printable(ch),
                    style,
                },
            );
        }
    }

    frame
}

fn printable(ch: char) -> char {
    match ch {
        '\t' => ' ',
        c if c.is_control() => '?',
        c => c,
    }
}
