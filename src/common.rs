//! Common types for the engine: coordinates, shot results and errors.

use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::game::{Phase, Player};
use crate::ship::ShipType;

/// A (row, col) coordinate on a board, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of a shot that was accepted by a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Shot landed in empty water.
    Miss,
    /// Shot hit the given ship without sinking it.
    Hit(ShipType),
    /// Shot hit the given ship and it is now sunk.
    Sink(ShipType),
}

impl GuessResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessResult::Miss)
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, GuessResult::Sink(_))
    }

    /// Type of the ship that was struck, if any.
    pub fn ship_type(&self) -> Option<ShipType> {
        match *self {
            GuessResult::Miss => None,
            GuessResult::Hit(ship) | GuessResult::Sink(ship) => Some(ship),
        }
    }
}

/// Errors returned by ship, cell, board and game operations.
///
/// Every variant is recoverable. The operation that produced it has not mutated any
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("operation requires the {expected} phase but the game is in {actual}")]
    InvalidPhase { expected: Phase, actual: Phase },
    #[error("it is not {player}'s turn")]
    NotYourTurn { player: Player },
    #[error("{player} has already placed a {ship_type}")]
    DuplicateShipType { player: Player, ship_type: ShipType },
    #[error("{ship_type} is not part of {player}'s roster")]
    NotInRoster { player: Player, ship_type: ShipType },
    #[error("position {position} is outside the board")]
    OutOfBounds { position: Position },
    #[error("position {position} is already occupied by another ship")]
    Overlap { position: Position },
    #[error("cell {position} already holds a ship")]
    AlreadyOccupied { position: Position },
    #[error("cell {position} has already been shot")]
    AlreadyShot { position: Position },
    #[error("board dimensions must be between 1 and {max}, got {rows}x{cols}", max = crate::config::MAX_BOARD_DIMENSION)]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("unable to find a free placement for {ship_type}")]
    UnableToPlaceShip { ship_type: ShipType },
    #[error("engine invariant violated: {0}")]
    InvariantViolation(&'static str),
}

impl GameError {
    /// Classification used by request layers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidPhase { .. } => ErrorKind::InvalidPhase,
            GameError::NotYourTurn { .. } => ErrorKind::NotYourTurn,
            GameError::DuplicateShipType { .. } => ErrorKind::DuplicateShipType,
            GameError::NotInRoster { .. } => ErrorKind::NotInRoster,
            GameError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            GameError::Overlap { .. } | GameError::AlreadyOccupied { .. } => ErrorKind::Overlap,
            GameError::AlreadyShot { .. } => ErrorKind::AlreadyShot,
            GameError::InvalidDimensions { .. } => ErrorKind::InvalidConfig,
            GameError::UnableToPlaceShip { .. } => ErrorKind::UnableToPlaceShip,
            GameError::InvariantViolation(_) => ErrorKind::InvariantViolation,
        }
    }

    /// Offending coordinate, where one applies.
    pub fn position(&self) -> Option<Position> {
        match *self {
            GameError::OutOfBounds { position }
            | GameError::Overlap { position }
            | GameError::AlreadyOccupied { position }
            | GameError::AlreadyShot { position } => Some(position),
            _ => None,
        }
    }

    /// Offending ship type, where one applies.
    pub fn ship_type(&self) -> Option<ShipType> {
        match *self {
            GameError::DuplicateShipType { ship_type, .. }
            | GameError::NotInRoster { ship_type, .. }
            | GameError::UnableToPlaceShip { ship_type } => Some(ship_type),
            _ => None,
        }
    }
}

/// Failure classes reported across the command boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    InvalidPhase,
    NotYourTurn,
    DuplicateShipType,
    NotInRoster,
    OutOfBounds,
    Overlap,
    AlreadyShot,
    InvalidConfig,
    UnableToPlaceShip,
    InvariantViolation,
    /// The request could not be interpreted (unknown player, ship type or orientation).
    BadRequest,
}

/// Error returned when parsing a player, ship type or orientation from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised {expected}: `{input}`")]
pub struct ParseError {
    expected: &'static str,
    input: String,
}

impl ParseError {
    pub(crate) fn new(expected: &'static str, input: &str) -> Self {
        Self {
            expected,
            input: input.into(),
        }
    }

    /// What kind of value was being parsed.
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Lowercase alphanumeric form of an identifier, so `Player_A`, `player-a` and `PLAYERA`
/// compare equal.
pub(crate) fn normalize_ident(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
