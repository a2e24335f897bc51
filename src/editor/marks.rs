// src/editor/marks.rs
use super::viewport::Coords;

/// A saved viewport position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    coords: Coords,
    note: String,
}

impl Mark {
    pub fn new(coords: Coords) -> Self {
        Self {
            coords,
            note: String::new(),
        }
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    // Nothing sets a note yet
    pub fn note(&self) -> &str {
        &self.note
    }
}

/// Append-only list of marks with a cursor that cycles through them.
#[derive(Debug, Default)]
pub struct MarkRing {
    marks: Vec<Mark>,
    current: Option<usize>, // None until the first mark is set
}

impl MarkRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `coords` as a new mark, then advance the cursor.
    ///
    /// The cursor moves one step from where it was, which is not
    /// necessarily the mark just added once the user has cycled back.
    pub fn set_mark(&mut self, coords: Coords) {
        self.marks.push(Mark::new(coords));
        self.next();
    }

    pub fn next(&mut self) {
        if self.marks.is_empty() {
            return;
        }

        self.current = match self.current {
            Some(index) if index + 1 < self.marks.len() => Some(index + 1),
            _ => Some(0),
        };
    }

    pub fn previous(&mut self) {
        if self.marks.is_empty() {
            return;
        }

        self.current = match self.current {
            Some(index) if index > 0 => Some(index - 1),
            _ => Some(self.marks.len() - 1),
        };
    }

    /// Mark under the cursor, if any.
    pub fn recall(&self) -> Option<&Mark> {
        self.current.and_then(|index| self.marks.get(index))
    }

    #[cfg(test)]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_of(n: isize) -> MarkRing {
        let mut ring = MarkRing::new();
        for y in 0..n {
            ring.set_mark(Coords::new(0, y * 10));
        }
        ring
    }

    #[test]
    fn test_empty_ring_is_noop() {
        let mut ring = MarkRing::new();
        ring.next();
        assert_eq!(ring.current_index(), None);
        ring.previous();
        assert_eq!(ring.current_index(), None);
        assert!(ring.recall().is_none());
    }

    #[test]
    fn test_set_mark_selects_first() {
        let mut ring = MarkRing::new();
        ring.set_mark(Coords::new(-4, 12));

        assert_eq!(ring.current_index(), Some(0));
        let mark = ring.recall().unwrap();
        assert_eq!(mark.coords(), Coords::new(-4, 12));
        assert_eq!(mark.note(), "");
    }

    #[test]
    fn test_set_mark_advances_cursor() {
        let ring = ring_of(3);
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.current_index(), Some(2));
    }

    #[test]
    fn test_next_wraps_around() {
        let mut ring = ring_of(3);

        ring.next();
        assert_eq!(ring.current_index(), Some(0));
        assert_eq!(ring.recall().unwrap().coords(), Coords::new(0, 0));

        ring.next();
        ring.next();
        assert_eq!(ring.current_index(), Some(2));
    }

    #[test]
    fn test_previous_from_first_lands_on_last() {
        let mut ring = ring_of(3);
        ring.next();
        assert_eq!(ring.current_index(), Some(0));

        ring.previous();
        assert_eq!(ring.current_index(), Some(2));
        assert_eq!(ring.recall().unwrap().coords(), Coords::new(0, 20));
    }

    #[test]
    fn test_set_mark_after_cycling() {
        let mut ring = ring_of(2);
        ring.next(); // back on the first mark
        ring.set_mark(Coords::new(0, 99));

        assert_eq!(ring.len(), 3);
        assert_eq!(ring.current_index(), Some(1));

        ring.next();
        assert_eq!(ring.recall().unwrap().coords(), Coords::new(0, 99));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut ring = MarkRing::new();
        ring.set_mark(Coords::new(0, 5));
        ring.set_mark(Coords::new(0, 5));
        assert_eq!(ring.len(), 2);
    }
}
