//! Player colors and the per-player chip ledger.
//!
//! The ledger tracks three counters per player that must always sum to the
//! nine chips a player starts with: chips on the board, chips still in hand,
//! and chips lost to capture. Captured chips are gone for good.

use crate::error::RuleError;
use crate::topology::{str_coord, Point, CHIPS_PER_PLAYER};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Get the other color.
    pub fn other(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Board glyph for display.
    pub fn glyph(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }

    /// Player name for display.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

/// One player's chip ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    color: Color,
    chips: Vec<Point>,
    in_hand: usize,
    captured: usize,
}

impl Player {
    /// A fresh player with all nine chips in hand.
    pub fn new(color: Color) -> Self {
        Player {
            color,
            chips: Vec::with_capacity(CHIPS_PER_PLAYER),
            in_hand: CHIPS_PER_PLAYER,
            captured: 0,
        }
    }

    /// Build a ledger for a mid-game setup. Useful for setting up test
    /// positions. Chips neither on the board nor in hand count as captured,
    /// so `chips.len() + in_hand` must not exceed nine.
    pub fn with_chips(color: Color, chips: Vec<Point>, in_hand: usize) -> Self {
        debug_assert!(chips.len() + in_hand <= CHIPS_PER_PLAYER);
        let captured = CHIPS_PER_PLAYER - chips.len() - in_hand;
        Player {
            color,
            chips,
            in_hand,
            captured,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Positions of this player's chips, in no particular order.
    pub fn chips(&self) -> &[Point] {
        &self.chips
    }

    pub fn on_board(&self) -> usize {
        self.chips.len()
    }

    pub fn in_hand(&self) -> usize {
        self.in_hand
    }

    pub fn captured(&self) -> usize {
        self.captured
    }

    /// Take a chip from the hand and put it on the board at `pt`.
    pub fn place_chip(&mut self, pt: Point) -> Result<(), RuleError> {
        if self.in_hand == 0 {
            return Err(RuleError::NoChipsLeft);
        }
        self.in_hand -= 1;
        self.chips.push(pt);
        Ok(())
    }

    /// Remove the chip at `pt` permanently (a capture).
    pub fn remove_chip(&mut self, pt: Point) -> Result<(), RuleError> {
        let index = self
            .chips
            .iter()
            .position(|&chip| chip == pt)
            .ok_or(RuleError::NoChipAtPosition(str_coord(pt)))?;
        self.chips.swap_remove(index);
        self.captured += 1;
        Ok(())
    }

    /// Update the recorded position of the chip at `from`. Counters are
    /// untouched; a move neither creates nor destroys chips.
    pub fn relocate_chip(&mut self, from: Point, to: Point) -> Result<(), RuleError> {
        let index = self
            .chips
            .iter()
            .position(|&chip| chip == from)
            .ok_or(RuleError::NoChipAtSource(str_coord(from)))?;
        self.chips[index] = to;
        Ok(())
    }
}
