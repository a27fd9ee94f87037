//! Request and response shapes exchanged with the layer that drives the engine.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{
    common::{ErrorKind, GameError, ParseError, Position},
    game::{Player, ShotReport},
    ship::{Orientation, PlacedShip, ShipType},
};

/// Place one ship. Identifiers are parsed case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceShipRequest {
    pub player: String,
    pub ship_type: String,
    pub row: usize,
    pub col: usize,
    /// Defaults to horizontal when absent.
    #[cfg_attr(feature = "std", serde(default))]
    pub orientation: Option<String>,
}

/// Parsed form of a [`PlaceShipRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceShip {
    pub player: Player,
    pub ship_type: ShipType,
    pub origin: Position,
    pub orientation: Orientation,
}

impl PlaceShipRequest {
    pub fn parse(&self) -> Result<PlaceShip, ParseError> {
        let orientation = match self.orientation.as_deref() {
            Some(raw) => raw.parse()?,
            None => Orientation::default(),
        };
        Ok(PlaceShip {
            player: self.player.parse()?,
            ship_type: self.ship_type.parse()?,
            origin: Position::new(self.row, self.col),
            orientation,
        })
    }
}

/// Fire one shot at the opponent's board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FireShotRequest {
    pub player: String,
    pub row: usize,
    pub col: usize,
}

impl FireShotRequest {
    pub fn parse(&self) -> Result<(Player, Position), ParseError> {
        Ok((self.player.parse()?, Position::new(self.row, self.col)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceShipResponse {
    pub success: bool,
    pub ship_type: ShipType,
    pub ship_size: usize,
    pub occupied_cells: Vec<Position>,
}

impl From<&PlacedShip> for PlaceShipResponse {
    fn from(placed: &PlacedShip) -> Self {
        Self {
            success: true,
            ship_type: placed.ship().ship_type(),
            ship_size: placed.ship().size(),
            occupied_cells: placed.cells().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FireShotResponse {
    pub hit: bool,
    pub sunk: bool,
    /// Ship that was struck, if any.
    pub ship_type: Option<ShipType>,
    pub game_over: bool,
    pub winner: Option<Player>,
}

impl From<ShotReport> for FireShotResponse {
    fn from(report: ShotReport) -> Self {
        Self {
            hit: report.result.is_hit(),
            sunk: report.result.is_sunk(),
            ship_type: report.result.ship_type(),
            game_over: report.game_over(),
            winner: report.winner,
        }
    }
}

/// A rejected request: what failed and where.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Failure {
    pub kind: ErrorKind,
    pub position: Option<Position>,
    pub ship_type: Option<ShipType>,
    pub message: String,
}

impl Failure {
    /// A request that could not be understood at all.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::BadRequest,
            position: None,
            ship_type: None,
            message: message.into(),
        }
    }
}

impl From<&GameError> for Failure {
    fn from(err: &GameError) -> Self {
        Self {
            kind: err.kind(),
            position: err.position(),
            ship_type: err.ship_type(),
            message: err.to_string(),
        }
    }
}

impl From<&ParseError> for Failure {
    fn from(err: &ParseError) -> Self {
        Self::bad_request(err.to_string())
    }
}
