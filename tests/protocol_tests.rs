use battleship_engine::domain::{FireShotRequest, PlaceShipRequest};
use battleship_engine::{
    handle, ErrorKind, Game, GameConfig, Phase, Player, Position, Request, Response, ShipType,
};

fn destroyer_game() -> Game {
    Game::new(GameConfig::square(5).with_roster([ShipType::Destroyer])).unwrap()
}

fn place(player: &str, ship: &str, row: usize, col: usize, orientation: Option<&str>) -> Request {
    Request::PlaceShip(PlaceShipRequest {
        player: player.into(),
        ship_type: ship.into(),
        row,
        col,
        orientation: orientation.map(Into::into),
    })
}

fn fire(player: &str, row: usize, col: usize) -> Request {
    Request::FireShot(FireShotRequest {
        player: player.into(),
        row,
        col,
    })
}

#[test]
fn test_place_defaults_to_horizontal() {
    let mut game = destroyer_game();
    match handle(&mut game, place("playerA", "destroyer", 0, 0, None)) {
        Response::Placed(resp) => {
            assert!(resp.success);
            assert_eq!(resp.ship_type, ShipType::Destroyer);
            assert_eq!(resp.ship_size, 2);
            assert_eq!(resp.occupied_cells, vec![Position::new(0, 0), Position::new(0, 1)]);
        }
        other => panic!("unexpected response {:?}", other),
    }
}

#[test]
fn test_unknown_identifiers_are_bad_requests() {
    let mut game = destroyer_game();
    let before = game.clone();
    for request in [
        place("carol", "destroyer", 0, 0, None),
        place("A", "frigate", 0, 0, None),
        place("A", "destroyer", 0, 0, Some("diagonal")),
        fire("nobody", 0, 0),
    ] {
        let failure = handle(&mut game, request).failure().cloned().unwrap();
        assert_eq!(failure.kind, ErrorKind::BadRequest);
    }
    assert_eq!(game, before);
}

#[test]
fn test_failures_carry_kind_and_coordinate() {
    let mut game = destroyer_game();
    let failure = handle(&mut game, fire("A", 0, 0)).failure().cloned().unwrap();
    assert_eq!(failure.kind, ErrorKind::InvalidPhase);

    handle(&mut game, place("A", "Destroyer", 0, 0, Some("vertical")));
    let failure = handle(&mut game, place("A", "Destroyer", 3, 3, None))
        .failure()
        .cloned()
        .unwrap();
    assert_eq!(failure.kind, ErrorKind::DuplicateShipType);
    assert_eq!(failure.ship_type, Some(ShipType::Destroyer));

    let failure = handle(&mut game, place("B", "Destroyer", 4, 4, None))
        .failure()
        .cloned()
        .unwrap();
    assert_eq!(failure.kind, ErrorKind::OutOfBounds);
    assert_eq!(failure.position, Some(Position::new(4, 5)));
    assert!(!failure.message.is_empty());
}

#[test]
fn test_full_match_through_commands() {
    let mut game = destroyer_game();
    assert!(!handle(&mut game, place("A", "destroyer", 0, 0, None)).is_failure());
    assert!(!handle(&mut game, place("B", "DESTROYER", 2, 2, Some("v"))).is_failure());

    match handle(&mut game, Request::Status) {
        Response::Status(status) => {
            assert_eq!(status.phase, Phase::Firing);
            assert_eq!(status.current_turn, Some(Player::A));
        }
        other => panic!("unexpected response {:?}", other),
    }

    let Response::Shot(first) = handle(&mut game, fire("A", 2, 2)) else {
        panic!("expected shot response");
    };
    assert!(first.hit);
    assert!(!first.sunk);
    assert!(!first.game_over);

    let failure = handle(&mut game, fire("A", 3, 2)).failure().cloned().unwrap();
    assert_eq!(failure.kind, ErrorKind::NotYourTurn);

    let Response::Shot(miss) = handle(&mut game, fire("B", 4, 4)) else {
        panic!("expected shot response");
    };
    assert!(!miss.hit);

    let Response::Shot(last) = handle(&mut game, fire("A", 3, 2)) else {
        panic!("expected shot response");
    };
    assert!(last.hit);
    assert!(last.sunk);
    assert!(last.game_over);
    assert_eq!(last.winner, Some(Player::A));
    assert_eq!(last.ship_type, Some(ShipType::Destroyer));
}

#[test]
fn test_requests_deserialize_from_json() {
    let raw = r#"[
        {"command": "place_ship", "player": "A", "ship_type": "destroyer", "row": 0, "col": 0},
        {"command": "place_ship", "player": "B", "ship_type": "Destroyer", "row": 1, "col": 1, "orientation": "Vertical"},
        {"command": "fire_shot", "player": "A", "row": 1, "col": 1},
        {"command": "status"}
    ]"#;
    let requests: Vec<Request> = serde_json::from_str(raw).unwrap();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0], place("A", "destroyer", 0, 0, None));

    let mut game = destroyer_game();
    let responses: Vec<Response> = requests
        .into_iter()
        .map(|r| handle(&mut game, r))
        .collect();
    assert!(responses.iter().all(|r| !r.is_failure()));

    let json = serde_json::to_value(&responses[2]).unwrap();
    assert_eq!(json["outcome"], "shot");
    assert_eq!(json["hit"], true);
    assert_eq!(json["game_over"], false);
}
