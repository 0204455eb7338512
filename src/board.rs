//! Board occupancy.
//!
//! A thin layer over the static topology: which color, if any, sits on each
//! of the 24 points, plus the one mill primitive every higher-level mill
//! query reduces to.

use crate::player::Color;
use crate::topology::{Point, LINES, LINES_THROUGH, POINTS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Color>; POINTS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Board {
            cells: [None; POINTS],
        }
    }

    pub fn occupant(&self, pt: Point) -> Option<Color> {
        self.cells[pt]
    }

    pub fn is_empty(&self, pt: Point) -> bool {
        self.cells[pt].is_none()
    }

    /// Put a chip on an empty point. Occupying a non-empty point is a logic
    /// error in the caller; validation happens before mutation.
    pub fn occupy(&mut self, pt: Point, color: Color) {
        debug_assert!(self.cells[pt].is_none());
        self.cells[pt] = Some(color);
    }

    pub fn vacate(&mut self, pt: Point) {
        self.cells[pt] = None;
    }

    /// True iff all three points of `line` hold chips of `color`.
    ///
    /// This is the sole mill test; [`Board::mill_through`] and the capture
    /// protection rule are built on it.
    pub fn mill_formed_on(&self, line: usize, color: Color) -> bool {
        LINES[line].iter().all(|&pt| self.cells[pt] == Some(color))
    }

    /// True iff either of the two lines through `pt` is a formed mill of
    /// `color`.
    pub fn mill_through(&self, pt: Point, color: Color) -> bool {
        LINES_THROUGH[pt]
            .iter()
            .any(|&line| self.mill_formed_on(line, color))
    }

    /// Occupancy of every point, indexed like the topology tables.
    pub fn cells(&self) -> [Option<Color>; POINTS] {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::parse_coord;

    fn pt(label: &str) -> Point {
        parse_coord(label).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!((0..POINTS).all(|p| board.is_empty(p)));
    }

    #[test]
    fn test_occupy_vacate_roundtrip() {
        let mut board = Board::new();
        board.occupy(pt("D2"), Color::Black);
        assert!(!board.is_empty(pt("D2")));
        assert_eq!(board.occupant(pt("D2")), Some(Color::Black));

        board.vacate(pt("D2"));
        assert!(board.is_empty(pt("D2")));
    }

    #[test]
    fn test_mill_formed_on_line() {
        let mut board = Board::new();
        for label in ["A1", "D1"] {
            board.occupy(pt(label), Color::White);
        }
        // line 0 is A1 D1 G1
        assert!(!board.mill_formed_on(0, Color::White));

        board.occupy(pt("G1"), Color::White);
        assert!(board.mill_formed_on(0, Color::White));
        assert!(!board.mill_formed_on(0, Color::Black));
    }

    #[test]
    fn test_mill_through_checks_both_lines() {
        let mut board = Board::new();
        // vertical mill A1 A4 A7
        for label in ["A1", "A4", "A7"] {
            board.occupy(pt(label), Color::Black);
        }
        assert!(board.mill_through(pt("A4"), Color::Black));
        assert!(board.mill_through(pt("A1"), Color::Black));
        // D1 shares no formed line
        assert!(!board.mill_through(pt("D1"), Color::Black));
    }

    #[test]
    fn test_mixed_colors_break_mill() {
        let mut board = Board::new();
        board.occupy(pt("A1"), Color::Black);
        board.occupy(pt("D1"), Color::White);
        board.occupy(pt("G1"), Color::Black);
        assert!(!board.mill_formed_on(0, Color::Black));
        assert!(!board.mill_formed_on(0, Color::White));
    }
}
