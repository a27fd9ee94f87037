use battleship_engine::{simulate, Game, GameConfig, Phase, Player, ShipType};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Turns alternate after every accepted shot until the last ship goes down.
    #[test]
    fn turns_alternate_until_finish(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new(GameConfig::default()).unwrap();
        let summary = simulate(&mut game, &mut rng).unwrap();

        let shots = game.shots();
        prop_assert_eq!(shots.len(), summary.shots);
        let mut expected = Player::A;
        for record in shots {
            prop_assert_eq!(record.shooter, expected);
            expected = expected.opponent();
        }
        let last = shots.last().unwrap();
        prop_assert_eq!(last.shooter, summary.winner);
        prop_assert!(last.result.is_sunk());

        let status = game.status();
        prop_assert_eq!(status.phase, Phase::Finished);
        prop_assert_eq!(status.winner, Some(summary.winner));
        prop_assert_eq!(status.current_turn, Some(summary.winner));
        prop_assert!(game.board(summary.winner.opponent()).all_ships_sunk());
        prop_assert!(!game.board(summary.winner).all_ships_sunk());
    }

    /// The number of sinks reported equals the number of ships in the loser's fleet.
    #[test]
    fn sinks_match_fleet(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let config = GameConfig::square(6).with_roster([ShipType::Cruiser, ShipType::Destroyer]);
        let mut game = Game::new(config).unwrap();
        let summary = simulate(&mut game, &mut rng).unwrap();
        let sinks = game
            .shots()
            .iter()
            .filter(|s| s.shooter == summary.winner && s.result.is_sunk())
            .count();
        prop_assert_eq!(sinks, 2);
        let hits = game
            .shots()
            .iter()
            .filter(|s| s.shooter == summary.winner && s.result.is_hit())
            .count();
        prop_assert_eq!(hits, ShipType::Cruiser.size() + ShipType::Destroyer.size());
    }
}
