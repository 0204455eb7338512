//! Static board topology for nine men's morris.
//!
//! The board is three concentric squares connected at the midpoints of each
//! side: 24 intersections and 16 mill lines (8 horizontal, 8 vertical, no
//! diagonals). The tables in this module are the single source of truth for
//! move legality and mill detection.
//!
//! Points are plain indices into fixed-size tables. String labels such as
//! `"D1"` exist only at the I/O boundary, converted by [`parse_coord`] and
//! [`str_coord`].
//!
//! Index order follows the board top to bottom, left to right:
//!
//! ```text
//! A1--------D1--------G1
//! |         |         |
//! |  B2-----D2-----F2 |
//! |  |      |      |  |
//! |  |  C3--D3--F3 |  |
//! |  |  |       |  |  |
//! A4-B4-C4     E4-F4-G4
//! |  |  |       |  |  |
//! |  |  C5--D5--E5 |  |
//! |  |      |      |  |
//! |  B6-----D6-----F6 |
//! |         |         |
//! A7--------D7--------G7
//! ```

/// A point on the board, an index into the 24-entry tables below.
pub type Point = usize;

/// Number of intersections on the board.
pub const POINTS: usize = 24;

/// Number of mill lines.
pub const NUM_LINES: usize = 16;

/// Chips each player holds at the start of the game.
pub const CHIPS_PER_PLAYER: usize = 9;

/// On-board chip count at which a player may fly (move without adjacency).
pub const FLYING_COUNT: usize = 3;

/// Point labels in index order.
pub const LABELS: [&str; POINTS] = [
    "A1", "D1", "G1", // outer top
    "B2", "D2", "F2", // middle top
    "C3", "D3", "F3", // inner top
    "A4", "B4", "C4", // left arm
    "E4", "F4", "G4", // right arm
    "C5", "D5", "E5", // inner bottom
    "B6", "D6", "F6", // middle bottom
    "A7", "D7", "G7", // outer bottom
];

/// Points reachable from each point by one non-flying move.
pub const NEIGHBOURS: [&[Point]; POINTS] = [
    &[1, 9],          // A1: D1, A4
    &[0, 2, 4],       // D1: A1, G1, D2
    &[1, 14],         // G1: D1, G4
    &[4, 10],         // B2: D2, B4
    &[1, 3, 5, 7],    // D2: D1, B2, F2, D3
    &[4, 13],         // F2: D2, F4
    &[7, 11],         // C3: D3, C4
    &[4, 6, 8],       // D3: D2, C3, F3
    &[7, 12],         // F3: D3, E4
    &[0, 10, 21],     // A4: A1, B4, A7
    &[3, 9, 11, 18],  // B4: B2, A4, C4, B6
    &[6, 10, 15],     // C4: C3, B4, C5
    &[8, 13, 17],     // E4: F3, F4, E5
    &[5, 12, 14, 20], // F4: F2, E4, G4, F6
    &[2, 13, 23],     // G4: G1, F4, G7
    &[11, 16],        // C5: C4, D5
    &[15, 17, 19],    // D5: C5, E5, D6
    &[12, 16],        // E5: E4, D5
    &[10, 19],        // B6: B4, D6
    &[16, 18, 20, 22],// D6: D5, B6, F6, D7
    &[13, 19],        // F6: F4, D6
    &[9, 22],         // A7: A4, D7
    &[19, 21, 23],    // D7: D6, A7, G7
    &[14, 22],        // G7: G4, D7
];

/// The 16 mill lines, horizontal first, then vertical.
pub const LINES: [[Point; 3]; NUM_LINES] = [
    [0, 1, 2],   // A1 D1 G1
    [3, 4, 5],   // B2 D2 F2
    [6, 7, 8],   // C3 D3 F3
    [9, 10, 11], // A4 B4 C4
    [12, 13, 14],// E4 F4 G4
    [15, 16, 17],// C5 D5 E5
    [18, 19, 20],// B6 D6 F6
    [21, 22, 23],// A7 D7 G7
    [0, 9, 21],  // A1 A4 A7
    [3, 10, 18], // B2 B4 B6
    [6, 11, 15], // C3 C4 C5
    [1, 4, 7],   // D1 D2 D3
    [16, 19, 22],// D5 D6 D7
    [8, 12, 17], // F3 E4 E5
    [5, 13, 20], // F2 F4 F6
    [2, 14, 23], // G1 G4 G7
];

/// Indices into [`LINES`] of the two lines through each point.
pub const LINES_THROUGH: [[usize; 2]; POINTS] = [
    [0, 8],  // A1
    [0, 11], // D1
    [0, 15], // G1
    [1, 9],  // B2
    [1, 11], // D2
    [1, 14], // F2
    [2, 10], // C3
    [2, 11], // D3
    [2, 13], // F3
    [3, 8],  // A4
    [3, 9],  // B4
    [3, 10], // C4
    [4, 13], // E4
    [4, 14], // F4
    [4, 15], // G4
    [5, 10], // C5
    [5, 12], // D5
    [5, 13], // E5
    [6, 9],  // B6
    [6, 12], // D6
    [6, 14], // F6
    [7, 8],  // A7
    [7, 12], // D7
    [7, 15], // G7
];

/// Parse a board label (e.g. "D1", case-insensitive) into a [`Point`].
///
/// Returns `None` for anything that does not name one of the 24
/// intersections.
pub fn parse_coord(s: &str) -> Option<Point> {
    let s = s.trim();
    LABELS.iter().position(|label| label.eq_ignore_ascii_case(s))
}

/// The label of a point, e.g. `str_coord(1) == "D1"`.
pub fn str_coord(pt: Point) -> &'static str {
    LABELS[pt]
}
