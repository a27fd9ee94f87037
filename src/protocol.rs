use log::warn;

use crate::domain::*;
use crate::game::{Game, GameStatus};

/// Commands accepted by a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "command", rename_all = "snake_case"))]
pub enum Request {
    PlaceShip(PlaceShipRequest),
    FireShot(FireShotRequest),
    Status,
}

/// Result of a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum Response {
    Placed(PlaceShipResponse),
    Shot(FireShotResponse),
    Status(GameStatus),
    Failed(Failure),
}

impl Response {
    pub fn is_failure(&self) -> bool {
        matches!(self, Response::Failed(_))
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Response::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Apply `request` to `game`. Failures are reported in the response and leave the
/// game untouched.
pub fn handle(game: &mut Game, request: Request) -> Response {
    match request {
        Request::PlaceShip(req) => {
            let cmd = match req.parse() {
                Ok(cmd) => cmd,
                Err(err) => return reject(Failure::from(&err)),
            };
            match game.place_ship(cmd.player, cmd.ship_type, cmd.origin, cmd.orientation) {
                Ok(placed) => Response::Placed(PlaceShipResponse::from(&placed)),
                Err(err) => reject(Failure::from(&err)),
            }
        }
        Request::FireShot(req) => {
            let (player, position) = match req.parse() {
                Ok(parsed) => parsed,
                Err(err) => return reject(Failure::from(&err)),
            };
            match game.fire_shot(player, position) {
                Ok(report) => Response::Shot(FireShotResponse::from(report)),
                Err(err) => reject(Failure::from(&err)),
            }
        }
        Request::Status => Response::Status(game.status()),
    }
}

fn reject(failure: Failure) -> Response {
    warn!("request rejected ({:?}): {}", failure.kind, failure.message);
    Response::Failed(failure)
}
