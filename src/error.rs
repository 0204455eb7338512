//! Rule-violation errors returned by the engine.
//!
//! Every variant is a recoverable, player-facing condition: the engine
//! rejects the command, leaves its state untouched, and the caller re-prompts.
//! None of these are process-fatal.

/// A rejected command.
///
/// Variants that reference a board point carry its label so the front end can
/// report the violation without extra lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("'{0}' is not a point on the board")]
    InvalidPosition(String),

    #[error("point {0} is already occupied")]
    PositionOccupied(&'static str),

    #[error("destination {0} is not empty")]
    DestinationOccupied(&'static str),

    #[error("no chip to move at {0}")]
    NoChipAtSource(&'static str),

    #[error("no chip at {0}")]
    NoChipAtPosition(&'static str),

    #[error("the chip at {0} belongs to your opponent")]
    NotOwnChip(&'static str),

    #[error("{1} is not a neighbour of {0}")]
    NotAdjacent(&'static str, &'static str),

    #[error("no chips left to place")]
    NoChipsLeft,

    #[error("you cannot capture your own chip")]
    CannotCaptureOwnChip,

    #[error("the chip at {0} is protected by a mill")]
    ProtectedByMill(&'static str),

    #[error("a mill was formed; capture an opponent chip first")]
    CaptureRequired,

    #[error("that command is not valid in the current phase")]
    WrongPhase,

    #[error("the game is over")]
    GameOver,
}
