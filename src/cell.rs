//! A single board position.

use crate::{
    common::{GameError, GuessResult, Position},
    ship::{PlacedShip, ShipId},
};

/// One grid cell: optionally occupied by a ship, shot at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    position: Position,
    ship: Option<ShipId>,
    shot: bool,
}

impl Cell {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            ship: None,
            shot: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Registry index of the occupying ship, if any.
    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub fn is_occupied(&self) -> bool {
        self.ship.is_some()
    }

    pub fn is_shot(&self) -> bool {
        self.shot
    }

    /// Attach a ship to this cell. Occupancy is permanent.
    pub fn attach_ship(&mut self, ship: ShipId) -> Result<(), GameError> {
        if self.ship.is_some() {
            return Err(GameError::AlreadyOccupied {
                position: self.position,
            });
        }
        self.ship = Some(ship);
        Ok(())
    }

    /// Fire on this cell, forwarding the hit to the occupying ship in `registry`.
    ///
    /// On error the cell and the registry are unchanged.
    pub fn mark_shot(&mut self, registry: &mut [PlacedShip]) -> Result<GuessResult, GameError> {
        if self.shot {
            return Err(GameError::AlreadyShot {
                position: self.position,
            });
        }
        let result = match self.ship {
            None => GuessResult::Miss,
            Some(id) => {
                let placed = registry
                    .get_mut(id.index())
                    .ok_or(GameError::InvariantViolation("cell references an unregistered ship"))?;
                placed.ship.register_hit()?;
                if placed.ship.is_sunk() {
                    GuessResult::Sink(placed.ship.ship_type())
                } else {
                    GuessResult::Hit(placed.ship.ship_type())
                }
            }
        };
        self.shot = true;
        Ok(result)
    }
}
