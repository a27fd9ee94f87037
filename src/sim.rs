//! Random self-play, used by the `sim` command and for exercising whole matches.

use alloc::vec::Vec;

use rand::Rng;

use crate::{
    common::GameError,
    game::{Game, Phase, Player},
};

/// Result of a completed simulated match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationSummary {
    pub winner: Player,
    /// Shots fired by both players.
    pub shots: usize,
    /// Shots fired by the winner.
    pub turns: usize,
}

/// Fill any pending rosters at random, then alternate random untried shots until
/// one fleet is sunk. `game` is untouched if either fleet cannot be placed.
pub fn simulate<R: Rng>(game: &mut Game, rng: &mut R) -> Result<SimulationSummary, GameError> {
    if game.phase() == Phase::Placement {
        let mut staged = game.clone();
        staged.place_fleet_randomly(Player::A, rng)?;
        staged.place_fleet_randomly(Player::B, rng)?;
        *game = staged;
    }
    loop {
        let status = game.status();
        if let Some(winner) = status.winner {
            let shots = game.shots();
            return Ok(SimulationSummary {
                winner,
                shots: shots.len(),
                turns: shots.iter().filter(|s| s.shooter == winner).count(),
            });
        }
        let shooter = status
            .current_turn
            .ok_or(GameError::InvariantViolation("firing phase without a current turn"))?;
        let open: Vec<_> = game.board(shooter.opponent()).unshot_positions().collect();
        if open.is_empty() {
            return Err(GameError::InvariantViolation("no cells left to fire at"));
        }
        let target = open[rng.random_range(0..open.len())];
        game.fire_shot(shooter, target)?;
    }
}
