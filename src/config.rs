use alloc::vec;
use alloc::vec::Vec;

use thiserror::Error;

use crate::game::Player;
use crate::ship::ShipType;

pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Largest accepted row or column count.
pub const MAX_BOARD_DIMENSION: usize = 100;

/// The classic fleet, largest first.
pub const STANDARD_ROSTER: [ShipType; 5] = ShipType::ALL;

/// Total number of ship segments in the standard fleet.
pub const STANDARD_FLEET_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Rules for a single match: board dimensions, the roster each player must place,
/// and who fires first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub roster: Vec<ShipType>,
    pub first_player: Player,
}

impl GameConfig {
    /// Square board with the standard roster.
    pub fn square(size: usize) -> Self {
        Self {
            rows: size,
            cols: size,
            ..Self::default()
        }
    }

    /// Replace the roster.
    pub fn with_roster(mut self, roster: impl IntoIterator<Item = ShipType>) -> Self {
        self.roster = roster.into_iter().collect();
        self
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Check that a game built from this config can be completed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows > MAX_BOARD_DIMENSION || self.cols > MAX_BOARD_DIMENSION {
            return Err(ConfigError::BoardTooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.roster.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        for (i, ship) in self.roster.iter().enumerate() {
            if self.roster[..i].contains(ship) {
                return Err(ConfigError::DuplicateRosterEntry(*ship));
            }
            if ship.size() > self.rows && ship.size() > self.cols {
                return Err(ConfigError::ShipTooLarge {
                    ship_type: *ship,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }
        let fleet_cells: usize = self.roster.iter().map(|ship| ship.size()).sum();
        if fleet_cells > self.rows * self.cols || !self.fleet_fits() {
            return Err(ConfigError::FleetTooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Whether the whole roster can be laid out on one board at the same time.
    fn fleet_fits(&self) -> bool {
        let mut sizes: Vec<usize> = self.roster.iter().map(|ship| ship.size()).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        let mut grid = vec![false; self.rows * self.cols];
        pack(self.rows, self.cols, &sizes, &mut grid)
    }
}

/// Depth-first search for a non-overlapping layout of `sizes` on `grid`.
fn pack(rows: usize, cols: usize, sizes: &[usize], grid: &mut [bool]) -> bool {
    let Some((&len, rest)) = sizes.split_first() else {
        return true;
    };
    let free = grid.iter().filter(|&&taken| !taken).count();
    if free < sizes.iter().sum::<usize>() {
        return false;
    }
    for row in 0..rows {
        for col in 0..cols {
            for (dr, dc) in [(0, 1), (1, 0)] {
                if row + dr * (len - 1) >= rows || col + dc * (len - 1) >= cols {
                    continue;
                }
                let footprint: Vec<usize> = (0..len)
                    .map(|i| (row + dr * i) * cols + col + dc * i)
                    .collect();
                if footprint.iter().any(|&i| grid[i]) {
                    continue;
                }
                footprint.iter().for_each(|&i| grid[i] = true);
                let placed = pack(rows, cols, rest, grid);
                footprint.iter().for_each(|&i| grid[i] = false);
                if placed {
                    return true;
                }
            }
        }
    }
    false
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_BOARD_SIZE,
            cols: DEFAULT_BOARD_SIZE,
            roster: STANDARD_ROSTER.to_vec(),
            first_player: Player::A,
        }
    }
}

/// Reasons a [`GameConfig`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("board dimensions may not exceed {max}, got {rows}x{cols}", max = MAX_BOARD_DIMENSION)]
    BoardTooLarge { rows: usize, cols: usize },
    #[error("the ship roster is empty")]
    EmptyRoster,
    #[error("{0} appears more than once in the roster")]
    DuplicateRosterEntry(ShipType),
    #[error("{ship_type} does not fit on a {rows}x{cols} board")]
    ShipTooLarge {
        ship_type: ShipType,
        rows: usize,
        cols: usize,
    },
    #[error("the roster cannot be laid out together on a {rows}x{cols} board")]
    FleetTooLarge { rows: usize, cols: usize },
}
