//! The rules engine and turn state machine.
//!
//! A [`Game`] is a self-contained value holding the board, both player
//! ledgers, the current phase and the pending-capture flag. The three
//! player commands (`place_chip`, `move_chip`, `capture_chip`) validate
//! fully before mutating anything, so a rejected command leaves the state
//! exactly as it was.
//!
//! Turn structure within either phase:
//!
//! ```text
//! awaiting command --(no mill)--------------> other player's turn
//! awaiting command --(mill formed)--> awaiting capture --> other player's turn
//! ```
//!
//! The turn passes exactly once per completed command cycle: after a
//! non-mill place/move, or after the capture that resolves a mill. The
//! Placement -> Movement transition fires at the end of the cycle in which
//! both players run out of chips to place.

use std::fmt;

use crate::board::Board;
use crate::error::RuleError;
use crate::player::{Color, Player};
use crate::topology::{parse_coord, str_coord, Point, FLYING_COUNT, NEIGHBOURS, POINTS};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Placement,
    Movement,
}

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Color),
    Draw,
}

/// What a successful command did, beyond its direct board mutation.
///
/// The front end builds all of its user-facing messages from this; the
/// engine itself never prints.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Effects {
    /// The command completed a mill; a capture is now required and the turn
    /// has not passed.
    pub mill_formed: bool,
    /// This cycle moved the game from Placement to Movement.
    pub phase_changed: bool,
    /// The game ended as a result of this command.
    pub game_over: Option<Outcome>,
}

/// Read-only view of the game for display. A pure copy of state; rendering
/// it has no side effects on the engine.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub cells: [Option<Color>; POINTS],
    pub phase: Phase,
    pub active: Color,
    pub pending_capture: bool,
    /// Chips still to place, Black then White.
    pub in_hand: [usize; 2],
    /// Chips on the board, Black then White.
    pub on_board: [usize; 2],
    pub outcome: Option<Outcome>,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = |pt: Point| match self.cells[pt] {
            Some(color) => color.glyph(),
            None => '.',
        };
        writeln!(f, "{}---------{}---------{}", g(0), g(1), g(2))?;
        writeln!(f, "|         |         |")?;
        writeln!(f, "|  {}------{}------{}  |", g(3), g(4), g(5))?;
        writeln!(f, "|  |      |      |  |")?;
        writeln!(f, "|  |   {}--{}--{}   |  |", g(6), g(7), g(8))?;
        writeln!(f, "|  |   |     |   |  |")?;
        writeln!(
            f,
            "{}--{}---{}     {}---{}--{}",
            g(9),
            g(10),
            g(11),
            g(12),
            g(13),
            g(14)
        )?;
        writeln!(f, "|  |   |     |   |  |")?;
        writeln!(f, "|  |   {}--{}--{}   |  |", g(15), g(16), g(17))?;
        writeln!(f, "|  |      |      |  |")?;
        writeln!(f, "|  {}------{}------{}  |", g(18), g(19), g(20))?;
        writeln!(f, "|         |         |")?;
        write!(f, "{}---------{}---------{}", g(21), g(22), g(23))
    }
}

/// One running game. Black moves first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    /// Index of the active player in `players`.
    active: usize,
    phase: Phase,
    pending_capture: bool,
    outcome: Option<Outcome>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game: empty board, nine chips in each hand, Black to place.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            players: [Player::new(Color::Black), Player::new(Color::White)],
            active: 0,
            phase: Phase::Placement,
            pending_capture: false,
            outcome: None,
        }
    }

    /// Build a game from an arbitrary mid-game position. Useful for setting
    /// up test positions.
    ///
    /// In the Placement phase each player's hand holds whatever of their
    /// nine chips are not yet on the board; in the Movement phase hands are
    /// empty and missing chips count as captured. Labels must be valid and
    /// mutually distinct, at most nine per side.
    pub fn from_position(
        phase: Phase,
        active: Color,
        black: &[&str],
        white: &[&str],
    ) -> Result<Game, RuleError> {
        let mut board = Board::new();
        let mut placed: [Vec<Point>; 2] = [Vec::new(), Vec::new()];
        for (side, labels) in [black, white].into_iter().enumerate() {
            if labels.len() > crate::topology::CHIPS_PER_PLAYER {
                return Err(RuleError::NoChipsLeft);
            }
            for label in labels {
                let pt = parse_coord(label)
                    .ok_or_else(|| RuleError::InvalidPosition(label.to_string()))?;
                if !board.is_empty(pt) {
                    return Err(RuleError::PositionOccupied(str_coord(pt)));
                }
                board.occupy(pt, if side == 0 { Color::Black } else { Color::White });
                placed[side].push(pt);
            }
        }

        let in_hand = |on_board: usize| match phase {
            Phase::Placement => crate::topology::CHIPS_PER_PLAYER - on_board,
            Phase::Movement => 0,
        };
        let [black_chips, white_chips] = placed;
        let black_hand = in_hand(black_chips.len());
        let white_hand = in_hand(white_chips.len());
        Ok(Game {
            board,
            players: [
                Player::with_chips(Color::Black, black_chips, black_hand),
                Player::with_chips(Color::White, white_chips, white_hand),
            ],
            active: match active {
                Color::Black => 0,
                Color::White => 1,
            },
            phase,
            pending_capture: false,
            outcome: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_color(&self) -> Color {
        self.players[self.active].color()
    }

    /// True while a formed mill is waiting for its capture.
    pub fn pending_capture(&self) -> bool {
        self.pending_capture
    }

    /// `Some` once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The ledger of either player.
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Black => &self.players[0],
            Color::White => &self.players[1],
        }
    }

    /// Read-only view for display.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.board.cells(),
            phase: self.phase,
            active: self.active_color(),
            pending_capture: self.pending_capture,
            in_hand: [self.players[0].in_hand(), self.players[1].in_hand()],
            on_board: [self.players[0].on_board(), self.players[1].on_board()],
            outcome: self.outcome,
        }
    }

    /// Place a chip from the active player's hand.
    ///
    /// Valid only during Placement with no capture pending. A placement
    /// that completes a mill keeps the turn and demands [`Game::capture_chip`]
    /// next.
    pub fn place_chip(&mut self, pos: &str) -> Result<Effects, RuleError> {
        self.ensure_command_allowed(Phase::Placement)?;
        let pt = parse_coord(pos).ok_or_else(|| RuleError::InvalidPosition(pos.to_string()))?;
        if !self.board.is_empty(pt) {
            return Err(RuleError::PositionOccupied(str_coord(pt)));
        }

        let color = self.active_color();
        self.players[self.active].place_chip(pt)?;
        self.board.occupy(pt, color);

        let mill = self.board.mill_through(pt, color);
        Ok(self.finish_command(mill))
    }

    /// Move one of the active player's chips.
    ///
    /// Valid only during Movement with no capture pending. Adjacency is
    /// required unless the mover is down to exactly three chips, in which
    /// case they fly: any empty point is reachable. The flying right is
    /// derived from the ledger here, never supplied by the caller.
    pub fn move_chip(&mut self, from: &str, to: &str) -> Result<Effects, RuleError> {
        self.ensure_command_allowed(Phase::Movement)?;
        let from_pt =
            parse_coord(from).ok_or_else(|| RuleError::InvalidPosition(from.to_string()))?;
        let to_pt = parse_coord(to).ok_or_else(|| RuleError::InvalidPosition(to.to_string()))?;

        let color = self.active_color();
        match self.board.occupant(from_pt) {
            None => return Err(RuleError::NoChipAtSource(str_coord(from_pt))),
            Some(owner) if owner != color => {
                return Err(RuleError::NotOwnChip(str_coord(from_pt)))
            }
            Some(_) => {}
        }
        if !self.board.is_empty(to_pt) {
            return Err(RuleError::DestinationOccupied(str_coord(to_pt)));
        }
        let flying = self.players[self.active].on_board() == FLYING_COUNT;
        if !flying && !NEIGHBOURS[from_pt].contains(&to_pt) {
            return Err(RuleError::NotAdjacent(str_coord(from_pt), str_coord(to_pt)));
        }

        self.players[self.active].relocate_chip(from_pt, to_pt)?;
        self.board.vacate(from_pt);
        self.board.occupy(to_pt, color);

        let mill = self.board.mill_through(to_pt, color);
        Ok(self.finish_command(mill))
    }

    /// Capture an opponent chip after forming a mill.
    ///
    /// Valid only while a capture is pending. A chip inside a formed mill
    /// is protected as long as the defender still has at least one free
    /// chip; once every defending chip sits in a mill, any of them may be
    /// taken.
    pub fn capture_chip(&mut self, pos: &str) -> Result<Effects, RuleError> {
        if self.outcome.is_some() {
            return Err(RuleError::GameOver);
        }
        if !self.pending_capture {
            return Err(RuleError::WrongPhase);
        }
        let pt = parse_coord(pos).ok_or_else(|| RuleError::InvalidPosition(pos.to_string()))?;

        let defender_color = self.active_color().other();
        match self.board.occupant(pt) {
            None => return Err(RuleError::NoChipAtPosition(str_coord(pt))),
            Some(owner) if owner != defender_color => {
                return Err(RuleError::CannotCaptureOwnChip)
            }
            Some(_) => {}
        }
        if self.defender_has_free_chip() && self.board.mill_through(pt, defender_color) {
            return Err(RuleError::ProtectedByMill(str_coord(pt)));
        }

        self.players[1 - self.active].remove_chip(pt)?;
        self.board.vacate(pt);
        self.pending_capture = false;

        Ok(self.finish_command(false))
    }

    /// Rejections shared by place and move.
    fn ensure_command_allowed(&self, expected: Phase) -> Result<(), RuleError> {
        if self.outcome.is_some() {
            return Err(RuleError::GameOver);
        }
        if self.pending_capture {
            return Err(RuleError::CaptureRequired);
        }
        if self.phase != expected {
            return Err(RuleError::WrongPhase);
        }
        Ok(())
    }

    /// Close out a command: hold the turn for a capture if a mill formed,
    /// otherwise advance phase and turn and re-check terminal conditions.
    fn finish_command(&mut self, mill: bool) -> Effects {
        let mut effects = Effects {
            mill_formed: mill,
            ..Effects::default()
        };
        if mill {
            self.pending_capture = true;
            return effects;
        }

        if self.phase == Phase::Placement
            && self.players.iter().all(|p| p.in_hand() == 0)
        {
            self.phase = Phase::Movement;
            effects.phase_changed = true;
        }
        self.active = 1 - self.active;
        effects.game_over = self.evaluate_outcome();
        effects
    }

    /// Terminal-state detection, run after every completed command cycle.
    /// Meaningful only in the Movement phase; during Placement a low
    /// on-board count is normal since chips are still in hand.
    fn evaluate_outcome(&mut self) -> Option<Outcome> {
        if self.phase != Phase::Movement {
            return None;
        }

        for side in 0..2 {
            if self.players[side].on_board() < FLYING_COUNT {
                self.outcome = Some(Outcome::Win(self.players[1 - side].color()));
                return self.outcome;
            }
        }

        let active_stuck = !self.player_has_moves(self.active);
        let other_stuck = !self.player_has_moves(1 - self.active);
        if active_stuck && other_stuck {
            self.outcome = Some(Outcome::Draw);
        } else if active_stuck {
            // the player to move cannot act and loses
            self.outcome = Some(Outcome::Win(self.players[1 - self.active].color()));
        }
        self.outcome
    }

    /// Whether any defending chip lies outside every formed mill.
    fn defender_has_free_chip(&self) -> bool {
        let defender = &self.players[1 - self.active];
        defender
            .chips()
            .iter()
            .any(|&pt| !self.board.mill_through(pt, defender.color()))
    }

    fn player_has_moves(&self, side: usize) -> bool {
        let player = &self.players[side];
        color_has_moves(&self.board, player.chips(), player.on_board())
    }
}

/// Non-flying players need an empty neighbour next to some chip; a player
/// at exactly three chips flies, so any empty point anywhere will do.
fn color_has_moves(board: &Board, chips: &[Point], on_board: usize) -> bool {
    if on_board == FLYING_COUNT {
        return (0..POINTS).any(|pt| board.is_empty(pt));
    }
    chips
        .iter()
        .any(|&pt| NEIGHBOURS[pt].iter().any(|&n| board.is_empty(n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.phase(), Phase::Placement);
        assert_eq!(game.active_color(), Color::Black);
        assert!(!game.pending_capture());
        assert_eq!(game.outcome(), None);
        assert_eq!(game.player(Color::Black).in_hand(), 9);
        assert_eq!(game.player(Color::White).in_hand(), 9);
    }

    #[test]
    fn test_place_rejects_bad_input() {
        let mut game = Game::new();
        assert_eq!(
            game.place_chip("Z9"),
            Err(RuleError::InvalidPosition("Z9".to_string()))
        );

        game.place_chip("A1").unwrap();
        assert_eq!(game.place_chip("A1"), Err(RuleError::PositionOccupied("A1")));
        // rejected commands must not have advanced the turn
        assert_eq!(game.active_color(), Color::White);
    }

    #[test]
    fn test_move_rejected_during_placement() {
        let mut game = Game::new();
        game.place_chip("A1").unwrap();
        assert_eq!(game.move_chip("A1", "A4"), Err(RuleError::WrongPhase));
    }

    #[test]
    fn test_capture_without_pending_mill() {
        let mut game = Game::new();
        game.place_chip("A1").unwrap();
        assert_eq!(game.capture_chip("A1"), Err(RuleError::WrongPhase));
    }

    #[test]
    fn test_placement_turn_alternates() {
        let mut game = Game::new();
        game.place_chip("A1").unwrap();
        assert_eq!(game.active_color(), Color::White);
        game.place_chip("B2").unwrap();
        assert_eq!(game.active_color(), Color::Black);
    }

    #[test]
    fn test_from_position_validates_labels() {
        assert_eq!(
            Game::from_position(Phase::Movement, Color::Black, &["Q1"], &[]),
            Err(RuleError::InvalidPosition("Q1".to_string()))
        );
        assert_eq!(
            Game::from_position(Phase::Movement, Color::Black, &["A1"], &["A1"]),
            Err(RuleError::PositionOccupied("A1"))
        );
    }

    #[test]
    fn test_from_position_rejects_more_than_nine_chips() {
        let ten = [
            "A1", "D1", "G1", "B2", "D2", "F2", "C3", "D3", "F3", "A4",
        ];
        assert_eq!(
            Game::from_position(Phase::Movement, Color::Black, &ten, &[]),
            Err(RuleError::NoChipsLeft)
        );
        assert_eq!(
            Game::from_position(Phase::Placement, Color::White, &[], &ten),
            Err(RuleError::NoChipsLeft)
        );
    }

    #[test]
    fn test_from_position_accounting() {
        let game = Game::from_position(
            Phase::Movement,
            Color::White,
            &["A1", "D1", "G1", "B2"],
            &["A4", "D2", "G4"],
        )
        .unwrap();
        let black = game.player(Color::Black);
        assert_eq!(black.on_board(), 4);
        assert_eq!(black.in_hand(), 0);
        assert_eq!(black.captured(), 5);
        let white = game.player(Color::White);
        assert_eq!(white.on_board(), 3);
        assert_eq!(white.captured(), 6);
        assert_eq!(game.active_color(), Color::White);
    }

    #[test]
    fn test_no_moves_predicate_with_flying() {
        let mut board = Board::new();
        // box a four-chip player in completely
        for (label, color) in [
            ("A1", Color::Black),
            ("D1", Color::Black),
            ("G1", Color::Black),
            ("B2", Color::Black),
            ("A4", Color::White),
            ("D2", Color::White),
            ("G4", Color::White),
            ("B4", Color::White),
        ] {
            board.occupy(parse_coord(label).unwrap(), color);
        }
        let black: Vec<Point> = ["A1", "D1", "G1", "B2"]
            .iter()
            .map(|l| parse_coord(l).unwrap())
            .collect();
        assert!(!color_has_moves(&board, &black, 4));
        // the same chips at the flying threshold always have a move while
        // any point on the board is empty
        assert!(color_has_moves(&board, &black[..3], 3));
    }

    #[test]
    fn test_no_moves_for_either_player_on_saturated_board() {
        // Realistic play can never fully saturate the board, but the draw
        // predicate itself must answer correctly when no point is empty.
        let mut board = Board::new();
        for pt in 0..POINTS {
            let color = if pt % 2 == 0 { Color::Black } else { Color::White };
            board.occupy(pt, color);
        }
        let evens: Vec<Point> = (0..POINTS).step_by(2).collect();
        let odds: Vec<Point> = (0..POINTS).skip(1).step_by(2).collect();
        assert!(!color_has_moves(&board, &evens, evens.len()));
        assert!(!color_has_moves(&board, &odds, odds.len()));
    }

    /// A board with every point filled cannot arise from legal play (each
    /// side fields at most nine chips), so the draw outcome is pinned down
    /// by assembling the state directly.
    #[test]
    fn test_draw_when_neither_player_can_move() {
        let mut board = Board::new();
        for pt in 0..POINTS {
            let color = if pt % 2 == 0 { Color::Black } else { Color::White };
            board.occupy(pt, color);
        }
        let evens: Vec<Point> = (0..POINTS).step_by(2).take(9).collect();
        let odds: Vec<Point> = (0..POINTS).skip(1).step_by(2).take(9).collect();
        let mut game = Game {
            board,
            players: [
                Player::with_chips(Color::Black, evens, 0),
                Player::with_chips(Color::White, odds, 0),
            ],
            active: 0,
            phase: Phase::Movement,
            pending_capture: false,
            outcome: None,
        };

        assert_eq!(game.evaluate_outcome(), Some(Outcome::Draw));
        assert_eq!(game.outcome(), Some(Outcome::Draw));
        // the finished game refuses further commands
        assert_eq!(game.move_chip("A1", "D1"), Err(RuleError::GameOver));
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut game = Game::new();
        game.place_chip("D2").unwrap();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.cells[parse_coord("D2").unwrap()], Some(Color::Black));
        assert_eq!(snapshot.active, Color::White);
        assert_eq!(snapshot.in_hand, [8, 9]);
        assert_eq!(snapshot.on_board, [1, 0]);
        assert_eq!(snapshot.phase, Phase::Placement);
    }

    #[test]
    fn test_snapshot_render_shape() {
        let rendered = Game::new().snapshot().to_string();
        assert_eq!(rendered.lines().count(), 13);
        // 24 empty points rendered as dots
        assert_eq!(rendered.matches('.').count(), 24);
    }
}
