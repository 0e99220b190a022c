use life_engine::Universe;

#[test]
fn universe_smoke_step() {
    let mut universe = Universe::new(64, 48).unwrap();
    universe.randomize(2024, 0.35);
    let before = universe.population();
    assert!(before > 0);

    universe.step_n(10);
    assert_eq!(universe.generation(), 10);
    assert_eq!((universe.rows(), universe.cols()), (64, 48));
    assert_eq!(universe.cells().len(), 64 * 48);
    assert_eq!(universe.cells_len(), 64 * 48);
}

#[test]
fn universe_from_pattern_and_toggle() {
    let mut universe = Universe::from_pattern("beacon").unwrap();
    assert_eq!((universe.rows(), universe.cols()), (6, 6));
    assert_eq!(universe.population(), 6);

    // Beacon blinks: 6 -> 8 -> 6
    universe.step();
    assert_eq!(universe.population(), 8);
    universe.step();
    assert_eq!(universe.population(), 6);

    assert!(universe.toggle_cell(0, 5));
    assert!(universe.is_alive(0, 5));
    assert!(!universe.toggle_cell(6, 0));

    universe.clear();
    assert_eq!(universe.population(), 0);
    assert_eq!(universe.generation(), 0);
}
