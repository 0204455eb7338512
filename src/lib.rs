//! Mills: a nine men's morris rules engine.
//!
//! The engine is a plain value: create a [`game::Game`], feed it player
//! commands, and read the returned [`game::Effects`] to learn whether a
//! mill formed, the phase advanced, or the game ended. Rule violations come
//! back as typed [`error::RuleError`] values and leave the state untouched.
//! All user-facing text lives in the [`repl`] front end.
//!
//! ## Modules
//!
//! - [`topology`] - The static 24-point board graph and its 16 mill lines
//! - [`board`] - Point occupancy and the mill primitive
//! - [`player`] - Colors and the per-player chip ledger
//! - [`game`] - The rules engine and turn state machine
//! - [`error`] - The rule-violation taxonomy
//! - [`repl`] - Terminal command loop built on the engine's public surface
//!
//! ## Example
//!
//! ```
//! use mills::game::Game;
//!
//! let mut game = Game::new();
//!
//! let effects = game.place_chip("A1").unwrap();
//! assert!(!effects.mill_formed);
//!
//! // White's turn now; A1 is taken
//! assert!(game.place_chip("A1").is_err());
//! game.place_chip("B2").unwrap();
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod player;
pub mod repl;
pub mod topology;
