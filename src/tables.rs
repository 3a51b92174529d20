use std::time::Instant;

use log::info;

use crate::move_tables::MoveTables;
use crate::pruning::PruningTables;



/// Everything the search reads. Built once, never mutated, shared by reference.
pub struct Tables {
	pub moves: MoveTables,
	pub pruning: PruningTables,
}

impl Tables {
	pub fn build() -> Self {
		let time_begin = Instant::now();
		let moves = MoveTables::build();
		info!("move tables built in {:?}", time_begin.elapsed());

		let time_pruning = Instant::now();
		let pruning = PruningTables::build(&moves);
		info!(
			"pruning tables built in {:?}, max depths: twist/slice {}, flip/slice {}, edge4/corner {}, edge4/edge8 {}",
			time_pruning.elapsed(),
			pruning.twist_slice.max_depth(),
			pruning.flip_slice.max_depth(),
			pruning.edge4_corner.max_depth(),
			pruning.edge4_edge8.max_depth(),
		);

		info!("tables ready in {:?}", time_begin.elapsed());
		Self { moves, pruning }
	}
}
