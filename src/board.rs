//! Game board: a grid of cells plus the registry of ships placed on it.

use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::Rng;

use crate::cell::Cell;
use crate::common::{GameError, GuessResult, Position};
use crate::config::MAX_BOARD_DIMENSION;
use crate::ship::{Orientation, PlacedShip, Ship, ShipId, ShipType};

/// Number of random origins tried before giving up on a placement.
const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;

/// What an opponent knows about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetCell {
    Unknown,
    Miss,
    Hit,
}

/// One player's side of the ocean.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "BoardRepr"))]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major, `rows * cols` long.
    cells: Vec<Cell>,
    ships: Vec<PlacedShip>,
}

impl Board {
    /// Create an empty board. Both dimensions must lie in `1..=MAX_BOARD_DIMENSION`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        check_dimensions(rows, cols)?;
        let cells = (0..rows * cols)
            .map(|i| Cell::new(Position::new(i / cols, i % cols)))
            .collect();
        Ok(Board {
            rows,
            cols,
            cells,
            ships: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row * self.cols + position.col)
    }

    /// Cell at `position`, or `None` if out of bounds.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).map(|i| &self.cells[i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Registered ships in placement order.
    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&PlacedShip> {
        self.ships.get(id.index())
    }

    /// Ship occupying `position`, if any.
    pub fn ship_at(&self, position: Position) -> Option<&PlacedShip> {
        self.cell(position)
            .and_then(Cell::ship)
            .and_then(|id| self.ship(id))
    }

    /// Compute and validate the cells a ship would occupy, without placing it.
    ///
    /// Bounds are checked for every cell before any cell is checked for overlap.
    pub fn check_placement(
        &self,
        ship_type: ShipType,
        origin: Position,
        orientation: Orientation,
    ) -> Result<Vec<Position>, GameError> {
        let footprint = (0..ship_type.size())
            .map(|i| match orientation.step(origin, i) {
                Some(p) if self.contains(p) => Ok(p),
                Some(p) => Err(GameError::OutOfBounds { position: p }),
                None => Err(GameError::OutOfBounds { position: origin }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(&position) = footprint
            .iter()
            .find(|&&p| self.cell(p).is_some_and(Cell::is_occupied))
        {
            return Err(GameError::Overlap { position });
        }
        Ok(footprint)
    }

    /// Place a ship of `ship_type` starting at `origin`.
    pub fn place_ship(
        &mut self,
        ship_type: ShipType,
        origin: Position,
        orientation: Orientation,
    ) -> Result<ShipId, GameError> {
        let footprint = self.check_placement(ship_type, origin, orientation)?;
        let id = ShipId(self.ships.len());
        for position in &footprint {
            let index = self
                .index(*position)
                .ok_or(GameError::InvariantViolation("validated cell left the board"))?;
            self.cells[index].attach_ship(id).map_err(|_| {
                GameError::InvariantViolation("validated cell was already occupied")
            })?;
        }
        self.ships
            .push(PlacedShip::new(Ship::new(ship_type), origin, orientation));
        debug!(
            "placed {} at {} {:?} covering {} cells",
            ship_type,
            origin,
            orientation,
            footprint.len()
        );
        Ok(id)
    }

    /// Random in-bounds, non-overlapping origin and orientation for `ship_type`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(Position, Orientation), GameError> {
        let len = ship_type.size();
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let preferred = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let orientation = match preferred {
                Orientation::Horizontal if len > self.cols => Orientation::Vertical,
                Orientation::Vertical if len > self.rows => Orientation::Horizontal,
                other => other,
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (Some(self.rows - 1), self.cols.checked_sub(len)),
                Orientation::Vertical => (self.rows.checked_sub(len), Some(self.cols - 1)),
            };
            let (Some(max_r), Some(max_c)) = (max_r, max_c) else {
                break;
            };
            let origin = Position::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            if self.check_placement(ship_type, origin, orientation).is_ok() {
                return Ok((origin, orientation));
            }
        }
        Err(GameError::UnableToPlaceShip { ship_type })
    }

    /// Fire at `position`.
    pub fn fire_at(&mut self, position: Position) -> Result<GuessResult, GameError> {
        let index = self
            .index(position)
            .ok_or(GameError::OutOfBounds { position })?;
        self.cells[index].mark_shot(&mut self.ships)
    }

    /// True when at least one ship is registered and every ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(|s| s.ship().is_sunk())
    }

    /// Number of registered ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.ship().is_sunk()).count()
    }

    /// Positions not yet fired upon, row-major.
    pub fn unshot_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .filter(|c| !c.is_shot())
            .map(Cell::position)
    }

    /// The board as the opponent sees it: one row per grid row.
    pub fn target_view(&self) -> Vec<Vec<TargetCell>> {
        self.cells
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(|cell| match (cell.is_shot(), cell.is_occupied()) {
                        (false, _) => TargetCell::Unknown,
                        (true, false) => TargetCell::Miss,
                        (true, true) => TargetCell::Hit,
                    })
                    .collect()
            })
            .collect()
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), GameError> {
    let valid = 1..=MAX_BOARD_DIMENSION;
    if !valid.contains(&rows) || !valid.contains(&cols) {
        return Err(GameError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

/// Serialized shape of a [`Board`], checked before it becomes one.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct BoardRepr {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    ships: Vec<PlacedShip>,
}

#[cfg(feature = "std")]
impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let BoardRepr {
            rows,
            cols,
            cells,
            ships,
        } = repr;
        check_dimensions(rows, cols)?;
        if cells.len() != rows * cols {
            return Err(GameError::InvariantViolation("cell count does not match dimensions"));
        }
        for (i, cell) in cells.iter().enumerate() {
            if cell.position() != Position::new(i / cols, i % cols) {
                return Err(GameError::InvariantViolation("cell stored out of row-major order"));
            }
            if cell.ship().is_some_and(|id| id.index() >= ships.len()) {
                return Err(GameError::InvariantViolation("cell references an unregistered ship"));
            }
        }
        let board = Board {
            rows,
            cols,
            cells,
            ships,
        };
        for (index, placed) in board.ships.iter().enumerate() {
            if placed.cells().count() != placed.ship().size() {
                return Err(GameError::InvariantViolation("ship extends past the board"));
            }
            let mut hits = 0;
            for position in placed.cells() {
                let cell = board
                    .cell(position)
                    .ok_or(GameError::InvariantViolation("ship extends past the board"))?;
                if cell.ship().map(ShipId::index) != Some(index) {
                    return Err(GameError::InvariantViolation("ship footprint does not match its cells"));
                }
                hits += usize::from(cell.is_shot());
            }
            let occupied = board
                .cells
                .iter()
                .filter(|c| c.ship().map(ShipId::index) == Some(index))
                .count();
            if occupied != placed.ship().size() || hits != placed.ship().hit_count() {
                return Err(GameError::InvariantViolation("ship hits do not match its cells"));
            }
        }
        Ok(board)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ rows: {}, cols: {}, shots: {}, ships: {:?} }}",
            self.rows,
            self.cols,
            self.cells.iter().filter(|c| c.is_shot()).count(),
            self.ships
        )
    }
}
