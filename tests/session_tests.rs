use battleship_engine::domain::{FireShotRequest, PlaceShipRequest};
use battleship_engine::{
    ErrorKind, Game, GameActor, GameApi, GameConfig, Phase, Player, Response, SharedGame,
    ShipType,
};

fn destroyer_game() -> Game {
    Game::new(GameConfig::square(5).with_roster([ShipType::Destroyer])).unwrap()
}

fn place(player: &str, row: usize) -> PlaceShipRequest {
    PlaceShipRequest {
        player: player.into(),
        ship_type: "destroyer".into(),
        row,
        col: 0,
        orientation: None,
    }
}

fn fire(player: &str, row: usize, col: usize) -> FireShotRequest {
    FireShotRequest {
        player: player.into(),
        row,
        col,
    }
}

async fn ready<A: GameApi>(api: &A) {
    assert!(!api.place_ship(place("A", 0)).await.unwrap().is_failure());
    assert!(!api.place_ship(place("B", 0)).await.unwrap().is_failure());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shots_on_shared_game_are_serialized() {
    let shared = SharedGame::new(destroyer_game());
    ready(&shared).await;

    // Eight identical shots from the player on turn: exactly one may land.
    let mut tasks = Vec::new();
    for _ in 0..8 {
        let api = shared.clone();
        tasks.push(tokio::spawn(async move { api.fire_shot(fire("A", 4, 4)).await }));
    }
    let mut accepted = 0;
    for task in tasks {
        match task.await.unwrap().unwrap() {
            Response::Shot(_) => accepted += 1,
            Response::Failed(failure) => assert_eq!(failure.kind, ErrorKind::NotYourTurn),
            other => panic!("unexpected response {:?}", other),
        }
    }
    assert_eq!(accepted, 1);
    assert_eq!(shared.game_status().await.current_turn, Some(Player::B));
    assert_eq!(shared.with_game(|g| g.shots().len()).await, 1);
}

#[tokio::test]
async fn test_actor_plays_full_match_and_returns_game() {
    let (handle, task) = GameActor::spawn(destroyer_game());
    ready(&handle).await;

    let other = handle.clone();
    assert!(!handle.fire_shot(fire("A", 0, 0)).await.unwrap().is_failure());
    assert!(!other.fire_shot(fire("B", 3, 3)).await.unwrap().is_failure());
    match handle.fire_shot(fire("A", 0, 1)).await.unwrap() {
        Response::Shot(shot) => {
            assert!(shot.sunk);
            assert!(shot.game_over);
            assert_eq!(shot.winner, Some(Player::A));
        }
        other => panic!("unexpected response {:?}", other),
    }
    match other.status().await.unwrap() {
        Response::Status(status) => assert_eq!(status.phase, Phase::Finished),
        other => panic!("unexpected response {:?}", other),
    }

    drop(handle);
    drop(other);
    let game = task.await.unwrap();
    assert_eq!(game.winner(), Some(Player::A));
    assert_eq!(game.shots().len(), 3);
}

#[tokio::test]
async fn test_independent_games_do_not_interact() {
    let (first, _) = GameActor::spawn(destroyer_game());
    let second = SharedGame::new(destroyer_game());
    ready(&first).await;

    assert_eq!(second.game_status().await.phase, Phase::Placement);
    let failure = second.fire_shot(fire("A", 0, 0)).await.unwrap();
    assert_eq!(failure.failure().unwrap().kind, ErrorKind::InvalidPhase);
    assert!(!first.fire_shot(fire("A", 0, 0)).await.unwrap().is_failure());
}
