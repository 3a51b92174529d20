//! Two-phase IDA*.
//!
//! Phase 1 searches all 18 moves for a prefix that takes the cube into
//! `<U, D, R2, L2, F2, B2>` (twist, flip and slice all 0). Each phase 1
//! solution of exactly the current bound immediately starts a phase 2 search
//! over the 10 subgroup generators that finishes the cube. Both phases prune
//! with the pruning tables and with the canonical move order, and the first
//! complete solution within the configured depths is returned.

use std::time::Instant;

use log::debug;

use crate::config::SearchConfig;
use crate::cube::CubeState;
use crate::error::SolveError;
use crate::moves::{ALL_MOVES, Move, PHASE2_MOVES, canonicalize};
use crate::tables::Tables;



pub struct Searcher<'t> {
	tables: &'t Tables,
	config: SearchConfig,
}

impl<'t> Searcher<'t> {
	pub fn new(tables: &'t Tables, config: SearchConfig) -> Self {
		Self { tables, config }
	}

	pub fn config(&self) -> SearchConfig {
		self.config
	}

	/// Finds moves that take `cube` to solved, i.e. `cube.apply_moves(&solution)`
	/// is the identity. Deterministic for a given state and config.
	pub fn solve(&self, cube: &CubeState) -> Result<Vec<Move>, SolveError> {
		cube.verify()?;

		let time_begin = Instant::now();
		let mut search = Search {
			tables: self.tables,
			config: self.config,
			target: *cube,
			phase1_moves: Vec::with_capacity(self.config.max_phase1_depth as usize),
			phase2_moves: Vec::with_capacity(self.config.max_total_depth as usize),
			nodes: 0,
		};
		let Some((phase1_len, phase2_len)) = search.run() else {
			return Err(SolveError::Exhausted {
				max_phase1_depth: self.config.max_phase1_depth,
				max_total_depth: self.config.max_total_depth,
			});
		};

		let mut solution = search.phase1_moves;
		solution.extend(search.phase2_moves);
		let solution = canonicalize(&solution);
		debug!(
			"solved in {} moves ({phase1_len} + {phase2_len}), {} nodes, {:?}",
			solution.len(), search.nodes, time_begin.elapsed()
		);
		debug_assert!(cube.apply_moves(&solution).is_solved());
		Ok(solution)
	}
}



/// State of one `solve` call; the move buffers are never shared.
struct Search<'t> {
	tables: &'t Tables,
	config: SearchConfig,
	target: CubeState,
	phase1_moves: Vec<Move>,
	phase2_moves: Vec<Move>,
	nodes: u64,
}

impl Search<'_> {
	/// Returns the phase lengths once `phase1_moves` and `phase2_moves` hold a solution.
	fn run(&mut self) -> Option<(usize, usize)> {
		let twist = self.target.twist();
		let flip = self.target.flip();
		let slice = self.target.slice();
		let lower_bound = self.tables.pruning.phase1(twist, flip, slice);

		for bound in lower_bound..=self.config.max_phase1_depth {
			debug!("phase 1 bound {bound}, {} nodes so far", self.nodes);
			if self.phase1(twist, flip, slice, bound) {
				return Some((self.phase1_moves.len(), self.phase2_moves.len()));
			}
		}
		None
	}

	/// `depth_left` is the bound minus the moves already in `phase1_moves`.
	fn phase1(&mut self, twist: u16, flip: u16, slice: u16, depth_left: u8) -> bool {
		self.nodes += 1;
		let estimate = self.tables.pruning.phase1(twist, flip, slice);
		if estimate == 0 && depth_left == 0 {
			return self.start_phase2();
		}
		if estimate > depth_left {
			return false;
		}

		let tables = self.tables;
		let previous = self.phase1_moves.last().copied();
		for move_ in ALL_MOVES {
			if move_.is_redundant_after(previous) {
				continue;
			}
			let m = move_.index();
			self.phase1_moves.push(move_);
			if self.phase1(
				tables.moves.twist[twist as usize][m],
				tables.moves.flip[flip as usize][m],
				tables.moves.slice[slice as usize][m],
				depth_left - 1,
			) {
				return true;
			}
			self.phase1_moves.pop();
		}
		false
	}

	fn start_phase2(&mut self) -> bool {
		// the prefix without this move was already inside the subgroup at a lower bound
		if self.phase1_moves.last().is_some_and(|m| m.is_phase2()) {
			return false;
		}
		let Some(max_depth) = self.config.max_total_depth.checked_sub(self.phase1_moves.len() as u8) else {
			return false;
		};

		let cube = self.target.apply_moves(&self.phase1_moves);
		let edge4 = cube.edge4();
		let edge8 = cube.edge8();
		let corner = cube.corner();
		let lower_bound = self.tables.pruning.phase2(edge4, edge8, corner);

		for bound in lower_bound..=max_depth {
			self.phase2_moves.clear();
			if self.phase2(edge4, edge8, corner, bound) {
				return true;
			}
		}
		false
	}

	fn phase2(&mut self, edge4: u16, edge8: u16, corner: u16, depth_left: u8) -> bool {
		self.nodes += 1;
		let estimate = self.tables.pruning.phase2(edge4, edge8, corner);
		if estimate == 0 {
			return true;
		}
		if estimate > depth_left {
			return false;
		}

		let tables = self.tables;
		let previous = self.phase2_moves.last().copied();
		for (i, &move_) in PHASE2_MOVES.iter().enumerate() {
			if move_.is_redundant_after(previous) {
				continue;
			}
			self.phase2_moves.push(move_);
			if self.phase2(
				tables.moves.edge4[edge4 as usize][i],
				tables.moves.edge8[edge8 as usize][i],
				tables.moves.corner[corner as usize][i],
				depth_left - 1,
			) {
				return true;
			}
			self.phase2_moves.pop();
		}
		false
	}
}
