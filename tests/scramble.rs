use log::info;
use rand::{SeedableRng, rngs::StdRng};

use rubiks_cube_scrambler::{
	CubeState, Move, ScrambleService, SolveError, CubeError,
	ensure_ready, generate_scramble, parse_moves, random_cube_state, solve, spawn_warm_up,
};

fn no_adjacent_same_face(moves: &[Move]) -> bool {
	moves.windows(2).all(|pair| pair[0].face() != pair[1].face())
}

#[test_log::test]
fn hundred_scrambles() {
	spawn_warm_up().join().unwrap();
	for _ in 0..100 {
		let scramble = generate_scramble();
		let moves = parse_moves(&scramble).unwrap();
		assert!(moves.len() >= 2, "{scramble}");
		assert!(no_adjacent_same_face(&moves), "{scramble}");
		assert_eq!(scramble, scramble.trim());
	}
}

#[test_log::test]
fn sexy_move_state() {
	let setup = parse_moves("R U R' U'").unwrap();
	let cube = CubeState::from_moves(&setup);
	let solution = solve(&cube).unwrap();
	info!("R U R' U' solved by {solution:?}");
	assert!(solution.len() <= 20);
	assert!(CubeState::from_moves(&[setup, solution].concat()).is_solved());
}

#[test_log::test]
fn solved_state_needs_no_moves() {
	assert_eq!(Ok(vec![]), solve(&CubeState::SOLVED));
}

#[test_log::test]
fn random_states_are_valid_and_solved() {
	let mut rng = StdRng::seed_from_u64(20);
	let tables = ensure_ready();
	for _ in 0..50 {
		let cube = random_cube_state(&mut rng);
		assert!(cube.is_valid());
		let solution = solve(&cube).unwrap();
		assert!(solution.len() <= 22, "{solution:?}");
		assert!(no_adjacent_same_face(&solution));
		assert!(cube.apply_moves(&solution).is_solved());
	}
	assert!(std::ptr::eq(tables, ensure_ready()));
}

#[test_log::test]
fn scramble_reaches_inverse_of_drawn_state() {
	let service = ScrambleService::default();
	let moves = service.generate_scramble_moves_with(&mut StdRng::seed_from_u64(77));
	let drawn = random_cube_state(&mut StdRng::seed_from_u64(77));
	assert_eq!(drawn.invert(), CubeState::from_moves(&moves));
}

#[test_log::test]
fn invalid_state_is_rejected() {
	let twisted = CubeState::new(
		[0, 1, 2, 3, 4, 5, 6, 7],
		[1, 0, 0, 0, 0, 0, 0, 0],
		[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
		[0; 12],
	);
	assert_eq!(Err(SolveError::InvalidState(CubeError::CornerOrientation)), solve(&twisted));
}

#[test_log::test]
fn facelet_state_round_trip_through_solver() {
	let cube: CubeState = "DUUBULDBFRBFRRULLLBRDFFFBLURDBFDFDRFRULBLUFDURRBLBDUDL".parse().unwrap();
	let solution = solve(&cube).unwrap();
	assert!(cube.apply_moves(&solution).is_solved());
}
