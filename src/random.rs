//! Uniform sampling over the cube group.

use rand::{Rng, seq::SliceRandom};

use crate::coord::{N_CORNER, N_FLIP, N_TWIST};
use crate::cube::CubeState;
use crate::moves::{ALL_MOVES, Move};



/// Draws a state uniformly from all 43,252,003,274,489,856,000 reachable ones.
///
/// Corner permutation, twist and flip are independent uniform draws. The edge
/// permutation is a uniform shuffle, fixed up by one transposition when its
/// parity disagrees with the corners', which keeps it uniform over the
/// permutations of the right parity.
pub fn random_cube_state<R: Rng + ?Sized>(rng: &mut R) -> CubeState {
	let mut cube = CubeState::SOLVED;
	cube.set_corner(rng.random_range(0..N_CORNER as u16));
	cube.set_twist(rng.random_range(0..N_TWIST as u16));
	cube.set_flip(rng.random_range(0..N_FLIP as u16));
	cube.ep.shuffle(rng);
	if cube.edge_parity() != cube.corner_parity() {
		cube.ep.swap(0, 1);
	}
	debug_assert!(cube.is_valid());
	cube
}

/// `length` random face turns, never two in a row that [`Move::is_redundant_after`] rejects.
/// Not uniform over states, only used when solving a random state fails.
pub fn random_move_scramble<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Vec<Move> {
	let mut moves: Vec<Move> = Vec::with_capacity(length);
	while moves.len() < length {
		let move_ = ALL_MOVES[rng.random_range(0..ALL_MOVES.len())];
		if !move_.is_redundant_after(moves.last().copied()) {
			moves.push(move_);
		}
	}
	moves
}



#[cfg(test)]
mod sampling {
	use super::*;
	use crate::moves::is_canonical;
	use rand::{SeedableRng, rngs::StdRng};

	#[test]
	fn states_are_valid() {
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..1000 {
			assert_eq!(Ok(()), random_cube_state(&mut rng).verify());
		}
	}

	#[test]
	fn seeded_draws_repeat() {
		let a = random_cube_state(&mut StdRng::seed_from_u64(7));
		let b = random_cube_state(&mut StdRng::seed_from_u64(7));
		assert_eq!(a, b);
	}

	#[test]
	fn both_parities_occur() {
		let mut rng = StdRng::seed_from_u64(3);
		let parities: Vec<u8> = (0..200).map(|_| random_cube_state(&mut rng).corner_parity()).collect();
		assert!(parities.contains(&0));
		assert!(parities.contains(&1));
	}

	#[test]
	fn edge_slots_roughly_uniform() {
		let mut rng = StdRng::seed_from_u64(11);
		let mut counts = [0u32; 12];
		let draws = 12_000;
		for _ in 0..draws {
			counts[random_cube_state(&mut rng).ep[0] as usize] += 1;
		}
		for count in counts {
			assert!((800..1200).contains(&count), "{counts:?}");
		}
	}

	#[test]
	fn move_scramble_is_canonical() {
		let mut rng = StdRng::seed_from_u64(5);
		for length in [0, 1, 20, 100] {
			let moves = random_move_scramble(length, &mut rng);
			assert_eq!(length, moves.len());
			assert!(is_canonical(&moves));
		}
	}
}
