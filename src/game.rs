//! Match orchestration: two boards, the placement roster and the phase/turn state
//! machine.

use alloc::vec::Vec;
use core::{fmt, str::FromStr};

use log::{debug, info};
use rand::Rng;

use crate::{
    board::Board,
    common::{normalize_ident, GameError, GuessResult, ParseError, Position},
    config::{ConfigError, GameConfig},
    ship::{Orientation, PlacedShip, ShipType},
};

/// One of the two players in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    #[cfg_attr(feature = "std", serde(rename = "PlayerA"))]
    A,
    #[cfg_attr(feature = "std", serde(rename = "PlayerB"))]
    B,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => f.write_str("PlayerA"),
            Player::B => f.write_str("PlayerB"),
        }
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_ident(s).as_str() {
            "a" | "playera" | "p1" | "player1" => Ok(Player::A),
            "b" | "playerb" | "p2" | "player2" => Ok(Player::B),
            _ => Err(ParseError::new("player", s)),
        }
    }
}

/// Match-level stage gating which operations are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placement,
    Firing,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Placement => f.write_str("Placement"),
            Phase::Firing => f.write_str("Firing"),
            Phase::Finished => f.write_str("Finished"),
        }
    }
}

/// Phase together with the data only meaningful in that phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
enum State {
    Placement,
    Firing { turn: Player },
    Finished { winner: Player },
}

impl State {
    fn phase(self) -> Phase {
        match self {
            State::Placement => Phase::Placement,
            State::Firing { .. } => Phase::Firing,
            State::Finished { .. } => Phase::Finished,
        }
    }
}

/// Snapshot returned by [`Game::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStatus {
    pub phase: Phase,
    /// Who fires next. `None` during placement; frozen on the winner once finished.
    pub current_turn: Option<Player>,
    pub winner: Option<Player>,
}

/// Outcome of a successful [`Game::fire_shot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub result: GuessResult,
    /// Set when this shot sank the opponent's last ship.
    pub winner: Option<Player>,
}

impl ShotReport {
    pub fn game_over(&self) -> bool {
        self.winner.is_some()
    }
}

/// A shot accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub shooter: Player,
    pub position: Position,
    pub result: GuessResult,
}

/// A player's board and the roster entries they have placed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
struct Side {
    board: Board,
    placed: Vec<ShipType>,
}

/// A single match between [`Player::A`] and [`Player::B`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "GameRepr"))]
pub struct Game {
    config: GameConfig,
    sides: [Side; 2],
    state: State,
    shots: Vec<ShotRecord>,
}

impl Game {
    /// Create a game in the placement phase with two empty boards.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let side = || -> Result<Side, ConfigError> {
            let board = Board::new(config.rows, config.cols).map_err(|_| {
                ConfigError::InvalidDimensions {
                    rows: config.rows,
                    cols: config.cols,
                }
            })?;
            Ok(Side {
                board,
                placed: Vec::with_capacity(config.roster.len()),
            })
        };
        let sides = [side()?, side()?];
        Ok(Self {
            config,
            sides,
            state: State::Placement,
            shots: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Current phase, turn and winner.
    pub fn status(&self) -> GameStatus {
        let (current_turn, winner) = match self.state {
            State::Placement => (None, None),
            State::Firing { turn } => (Some(turn), None),
            State::Finished { winner } => (Some(winner), Some(winner)),
        };
        GameStatus {
            phase: self.state.phase(),
            current_turn,
            winner,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        self.status().winner
    }

    /// Read-only access to a player's own board.
    pub fn board(&self, player: Player) -> &Board {
        &self.sides[player.index()].board
    }

    /// Roster entries `player` still has to place, in roster order.
    pub fn pending_ships(&self, player: Player) -> impl Iterator<Item = ShipType> + '_ {
        let placed = &self.sides[player.index()].placed;
        self.config
            .roster
            .iter()
            .copied()
            .filter(move |ship| !placed.contains(ship))
    }

    pub fn is_player_ready(&self, player: Player) -> bool {
        self.sides[player.index()].placed.len() == self.config.roster.len()
    }

    /// Successful shots in the order they were fired.
    pub fn shots(&self) -> &[ShotRecord] {
        &self.shots
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        let actual = self.state.phase();
        if actual != expected {
            return Err(GameError::InvalidPhase { expected, actual });
        }
        Ok(())
    }

    /// Place one roster ship on `player`'s board.
    ///
    /// Once both fleets are complete the game moves to the firing phase with the
    /// configured first player to move.
    pub fn place_ship(
        &mut self,
        player: Player,
        ship_type: ShipType,
        origin: Position,
        orientation: Orientation,
    ) -> Result<PlacedShip, GameError> {
        self.expect_phase(Phase::Placement)?;
        let side = &mut self.sides[player.index()];
        if side.placed.contains(&ship_type) {
            return Err(GameError::DuplicateShipType { player, ship_type });
        }
        if !self.config.roster.contains(&ship_type) {
            return Err(GameError::NotInRoster { player, ship_type });
        }
        let id = side.board.place_ship(ship_type, origin, orientation)?;
        side.placed.push(ship_type);
        let placed = *side
            .board
            .ship(id)
            .ok_or(GameError::InvariantViolation("placed ship missing from registry"))?;
        debug!("{} placed {} at {}", player, ship_type, origin);

        if self.is_player_ready(Player::A) && self.is_player_ready(Player::B) {
            let first = self.config.first_player;
            self.state = State::Firing { turn: first };
            info!("both fleets placed, {} fires first", first);
        }
        Ok(placed)
    }

    /// Place every pending roster ship for `player` at random positions.
    ///
    /// The layout is worked out on a scratch board first; if any ship cannot be
    /// placed the game is left as it was.
    pub fn place_fleet_randomly<R: Rng>(
        &mut self,
        player: Player,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.expect_phase(Phase::Placement)?;
        let mut scratch = self.board(player).clone();
        let mut layout = Vec::new();
        for ship_type in self.pending_ships(player) {
            let (origin, orientation) = scratch.random_placement(rng, ship_type)?;
            scratch.place_ship(ship_type, origin, orientation)?;
            layout.push((ship_type, origin, orientation));
        }
        for (ship_type, origin, orientation) in layout {
            self.place_ship(player, ship_type, origin, orientation)?;
        }
        Ok(())
    }

    /// Fire at `position` on the opponent's board.
    ///
    /// A shot that sinks the opponent's last ship finishes the game with `player` as
    /// the winner. Any other accepted shot passes the turn.
    pub fn fire_shot(&mut self, player: Player, position: Position) -> Result<ShotReport, GameError> {
        let turn = match self.state {
            State::Firing { turn } => turn,
            other => {
                return Err(GameError::InvalidPhase {
                    expected: Phase::Firing,
                    actual: other.phase(),
                })
            }
        };
        if player != turn {
            return Err(GameError::NotYourTurn { player });
        }

        let target = &mut self.sides[player.opponent().index()].board;
        let result = target.fire_at(position)?;
        let defeated = target.all_ships_sunk();
        self.shots.push(ShotRecord {
            shooter: player,
            position,
            result,
        });
        debug!("{} fired at {}: {:?}", player, position, result);

        let winner = if defeated {
            self.state = State::Finished { winner: player };
            info!("{} wins after {} shots", player, self.shots.len());
            Some(player)
        } else {
            self.state = State::Firing {
                turn: player.opponent(),
            };
            None
        };
        Ok(ShotReport { result, winner })
    }
}

/// Serialized shape of a [`Game`], checked before it becomes one.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct GameRepr {
    config: GameConfig,
    sides: [Side; 2],
    state: State,
    shots: Vec<ShotRecord>,
}

#[cfg(feature = "std")]
impl TryFrom<GameRepr> for Game {
    type Error = GameError;

    fn try_from(repr: GameRepr) -> Result<Self, Self::Error> {
        let game = Game {
            config: repr.config,
            sides: repr.sides,
            state: repr.state,
            shots: repr.shots,
        };
        game.config
            .validate()
            .map_err(|_| GameError::InvariantViolation("saved config is invalid"))?;
        for side in &game.sides {
            if side.board.rows() != game.config.rows || side.board.cols() != game.config.cols {
                return Err(GameError::InvariantViolation("board does not match the config"));
            }
            let registered = side.board.ships().iter().map(|s| s.ship().ship_type());
            if !registered.eq(side.placed.iter().copied()) {
                return Err(GameError::InvariantViolation("placed roster does not match the board"));
            }
            for (i, ship) in side.placed.iter().enumerate() {
                if !game.config.roster.contains(ship) || side.placed[..i].contains(ship) {
                    return Err(GameError::InvariantViolation("placed ship is not a roster entry"));
                }
            }
        }

        let ready = game.is_player_ready(Player::A) && game.is_player_ready(Player::B);
        let consistent = match game.state {
            State::Placement => !ready && game.shots.is_empty(),
            State::Firing { .. } => {
                ready && !game.board(Player::A).all_ships_sunk() && !game.board(Player::B).all_ships_sunk()
            }
            State::Finished { winner } => ready && game.board(winner.opponent()).all_ships_sunk(),
        };
        if !consistent {
            return Err(GameError::InvariantViolation("phase does not match the boards"));
        }
        for player in [Player::A, Player::B] {
            let fired = game.shots.iter().filter(|s| s.shooter == player).count();
            let landed = game.board(player.opponent()).cells().filter(|c| c.is_shot()).count();
            if fired != landed {
                return Err(GameError::InvariantViolation("shot log does not match the boards"));
            }
        }
        Ok(game)
    }
}
