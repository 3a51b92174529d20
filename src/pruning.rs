//! Exact distance-to-solved tables over pairs of coordinates.
//!
//! Each entry is the length of a shortest move sequence that brings both
//! coordinates to 0, so it never overestimates the moves left for the whole
//! cube and serves as the IDA* heuristic.

use crate::move_tables::{MoveTable, MoveTables};



/// Marks entries the breadth-first fill has not reached yet.
pub const UNVISITED: u8 = u8::MAX;

pub struct PruningTable {
	/// Range of the second coordinate; `(a, b)` is stored at `a * stride + b`.
	stride: usize,
	depths: Vec<u8>,
}

impl PruningTable {
	/// Layered breadth-first fill from `(0, 0)` over the product of two
	/// coordinates moved by the same generator set.
	///
	/// # Panics
	///
	/// If some entry stays unreachable, which means the move tables are broken.
	pub fn build<const M: usize>(first: &MoveTable<M>, second: &MoveTable<M>) -> Self {
		let stride = second.len();
		let total = first.len() * stride;
		let mut depths = vec![UNVISITED; total];
		depths[0] = 0;

		let mut filled: usize = 1;
		let mut depth: u8 = 0;
		while filled < total {
			let mut added = 0;
			for index in 0..total {
				if depths[index] != depth {
					continue;
				}
				let (a, b) = (index / stride, index % stride);
				for m in 0..M {
					let next = first[a][m] as usize * stride + second[b][m] as usize;
					if depths[next] == UNVISITED {
						depths[next] = depth + 1;
						added += 1;
					}
				}
			}
			if added == 0 {
				break;
			}
			filled += added;
			depth += 1;
			assert!(depth < UNVISITED, "pruning depth overflow");
		}
		assert_eq!(total, filled, "pruning table left {} of {total} entries unreachable", total - filled);

		Self { stride, depths }
	}

	pub fn get(&self, a: u16, b: u16) -> u8 {
		self.depths[a as usize * self.stride + b as usize]
	}

	pub fn len(&self) -> usize {
		self.depths.len()
	}

	pub fn max_depth(&self) -> u8 {
		self.depths.iter().copied().max().unwrap_or(0)
	}

	/// `histogram()[d]` is the number of entries at distance `d`.
	pub fn histogram(&self) -> Vec<usize> {
		let mut histogram = vec![0; self.max_depth() as usize + 1];
		for &d in &self.depths {
			histogram[d as usize] += 1;
		}
		histogram
	}
}



pub struct PruningTables {
	pub twist_slice: PruningTable,
	pub flip_slice: PruningTable,
	pub edge4_corner: PruningTable,
	pub edge4_edge8: PruningTable,
}

impl PruningTables {
	pub fn build(moves: &MoveTables) -> Self {
		let ((twist_slice, flip_slice), (edge4_corner, edge4_edge8)) = rayon::join(
			|| rayon::join(
				|| PruningTable::build(&moves.twist, &moves.slice),
				|| PruningTable::build(&moves.flip, &moves.slice),
			),
			|| rayon::join(
				|| PruningTable::build(&moves.edge4, &moves.corner),
				|| PruningTable::build(&moves.edge4, &moves.edge8),
			),
		);
		Self { twist_slice, flip_slice, edge4_corner, edge4_edge8 }
	}

	/// Lower bound on the moves needed to reach `<U, D, R2, L2, F2, B2>`; 0 iff already inside.
	pub fn phase1(&self, twist: u16, flip: u16, slice: u16) -> u8 {
		self.twist_slice.get(twist, slice).max(self.flip_slice.get(flip, slice))
	}

	/// Lower bound on the phase 2 moves needed to solve; 0 iff solved.
	pub fn phase2(&self, edge4: u16, edge8: u16, corner: u16) -> u8 {
		self.edge4_corner.get(edge4, corner).max(self.edge4_edge8.get(edge4, edge8))
	}
}
