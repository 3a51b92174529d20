//! Coordinate transition tables: `table[value][move]` is the coordinate after
//! applying `move` to any state whose coordinate is `value`.

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::coord::{N_CORNER, N_EDGE4, N_EDGE8, N_FLIP, N_SLICE, N_TWIST};
use crate::cube::CubeState;
use crate::moves::{ALL_MOVES, Move, N_MOVES, N_PHASE2_MOVES, PHASE2_MOVES};



pub type MoveTable<const M: usize> = Vec<[u16; M]>;

pub struct MoveTables {
	pub twist: MoveTable<N_MOVES>,
	pub flip: MoveTable<N_MOVES>,
	pub slice: MoveTable<N_MOVES>,
	/// Phase 2 tables are indexed by position in [`PHASE2_MOVES`], not by [`Move::index`].
	pub edge4: MoveTable<N_PHASE2_MOVES>,
	pub edge8: MoveTable<N_PHASE2_MOVES>,
	pub corner: MoveTable<N_PHASE2_MOVES>,
}

impl MoveTables {
	pub fn build() -> Self {
		Self {
			twist: build_move_table(N_TWIST, &ALL_MOVES, CubeState::set_twist, CubeState::twist),
			flip: build_move_table(N_FLIP, &ALL_MOVES, CubeState::set_flip, CubeState::flip),
			slice: build_move_table(N_SLICE, &ALL_MOVES, CubeState::set_slice, CubeState::slice),
			edge4: build_move_table(N_EDGE4, &PHASE2_MOVES, CubeState::set_edge4, CubeState::edge4),
			edge8: build_move_table(N_EDGE8, &PHASE2_MOVES, CubeState::set_edge8, CubeState::edge8),
			corner: build_move_table(N_CORNER, &PHASE2_MOVES, CubeState::set_corner, CubeState::corner),
		}
	}
}

/// Injects every coordinate value into a solved cube, applies each of `moves`
/// and reads the coordinate back.
fn build_move_table<const M: usize>(
	size: usize,
	moves: &[Move; M],
	inject: fn(&mut CubeState, u16),
	extract: fn(&CubeState) -> u16,
) -> MoveTable<M> {
	(0..size as u16)
		.into_par_iter()
		.map(|value| {
			let mut cube = CubeState::SOLVED;
			inject(&mut cube, value);
			std::array::from_fn(|i| extract(&cube.apply(moves[i])))
		})
		.collect()
}
