//! Ship types, orientations and per-ship hit tracking.

use core::{fmt, str::FromStr};

use crate::common::{normalize_ident, GameError, ParseError, Position};

/// Orientation of a ship on the board.
///
/// Horizontal ships extend towards increasing columns, vertical ships towards
/// increasing rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell `offset` steps away from `origin` along this orientation, or `None` if
    /// the coordinate would overflow.
    pub fn step(self, origin: Position, offset: usize) -> Option<Position> {
        match self {
            Orientation::Horizontal => origin
                .col
                .checked_add(offset)
                .map(|col| Position::new(origin.row, col)),
            Orientation::Vertical => origin
                .row
                .checked_add(offset)
                .map(|row| Position::new(row, origin.col)),
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_ident(s).as_str() {
            "h" | "horizontal" => Ok(Orientation::Horizontal),
            "v" | "vertical" => Ok(Orientation::Vertical),
            _ => Err(ParseError::new("orientation", s)),
        }
    }
}

/// The closed set of ship classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipType {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipType {
    /// Every ship type, largest first.
    pub const ALL: [ShipType; 5] = [
        ShipType::Carrier,
        ShipType::Battleship,
        ShipType::Cruiser,
        ShipType::Submarine,
        ShipType::Destroyer,
    ];

    /// Number of cells a ship of this type occupies.
    pub const fn size(self) -> usize {
        match self {
            ShipType::Carrier => 5,
            ShipType::Battleship => 4,
            ShipType::Cruiser => 3,
            ShipType::Submarine => 3,
            ShipType::Destroyer => 2,
        }
    }

    /// Ship's name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipType::Carrier => "Carrier",
            ShipType::Battleship => "Battleship",
            ShipType::Cruiser => "Cruiser",
            ShipType::Submarine => "Submarine",
            ShipType::Destroyer => "Destroyer",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShipType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_ident(s);
        ShipType::ALL
            .iter()
            .copied()
            .find(|ship| ship.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| ParseError::new("ship type", s))
    }
}

/// Index of a ship in its board's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A ship and the number of times it has been hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    ship_type: ShipType,
    hit_count: usize,
}

impl Ship {
    pub fn new(ship_type: ShipType) -> Self {
        Self {
            ship_type,
            hit_count: 0,
        }
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn size(&self) -> usize {
        self.ship_type.size()
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// Record one more hit. A sunk ship cannot be hit again.
    pub fn register_hit(&mut self) -> Result<(), GameError> {
        if self.is_sunk() {
            return Err(GameError::InvariantViolation("hit registered on a sunk ship"));
        }
        self.hit_count += 1;
        Ok(())
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_count == self.size()
    }
}

/// A registered ship together with where it was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedShip {
    pub(crate) ship: Ship,
    origin: Position,
    orientation: Orientation,
}

impl PlacedShip {
    pub(crate) fn new(ship: Ship, origin: Position, orientation: Orientation) -> Self {
        Self {
            ship,
            origin,
            orientation,
        }
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells occupied by this ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.ship.size()).filter_map(move |i| self.orientation.step(self.origin, i))
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells().any(|p| p == position)
    }
}
