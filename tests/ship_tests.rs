use battleship_engine::{GameError, Orientation, Position, Ship, ShipType};

#[test]
fn test_sizes_come_from_type() {
    let sizes: Vec<_> = ShipType::ALL.iter().map(|s| Ship::new(*s).size()).collect();
    assert_eq!(sizes, vec![5, 4, 3, 3, 2]);
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), GameError> {
    let mut ship = Ship::new(ShipType::Destroyer);
    assert_eq!(ship.hit_count(), 0);
    assert!(!ship.is_sunk());
    ship.register_hit()?;
    assert!(!ship.is_sunk());
    ship.register_hit()?;
    assert!(ship.is_sunk());
    Ok(())
}

#[test]
fn test_hit_on_sunk_ship_is_invariant_violation() {
    let mut ship = Ship::new(ShipType::Destroyer);
    ship.register_hit().unwrap();
    ship.register_hit().unwrap();
    let err = ship.register_hit().unwrap_err();
    assert!(matches!(err, GameError::InvariantViolation(_)));
    assert_eq!(ship.hit_count(), 2);
}

#[test]
fn test_ship_type_parse_is_case_insensitive() {
    assert_eq!("carrier".parse::<ShipType>().unwrap(), ShipType::Carrier);
    assert_eq!("SUBMARINE".parse::<ShipType>().unwrap(), ShipType::Submarine);
    assert_eq!(" Destroyer ".parse::<ShipType>().unwrap(), ShipType::Destroyer);
    let err = "frigate".parse::<ShipType>().unwrap_err();
    assert_eq!(err.expected(), "ship type");
    assert_eq!(err.input(), "frigate");
}

#[test]
fn test_orientation_parse_and_default() {
    assert_eq!(Orientation::default(), Orientation::Horizontal);
    assert_eq!("v".parse::<Orientation>().unwrap(), Orientation::Vertical);
    assert_eq!("Horizontal".parse::<Orientation>().unwrap(), Orientation::Horizontal);
    assert!("diagonal".parse::<Orientation>().is_err());
}

#[test]
fn test_orientation_step() {
    let origin = Position::new(2, 3);
    assert_eq!(Orientation::Horizontal.step(origin, 2), Some(Position::new(2, 5)));
    assert_eq!(Orientation::Vertical.step(origin, 2), Some(Position::new(4, 3)));
    assert_eq!(Orientation::Vertical.step(Position::new(usize::MAX, 0), 1), None);
}
