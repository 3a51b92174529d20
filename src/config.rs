/// Depth budgets for [`crate::Searcher`].
///
/// Every cube is within 20 moves of solved, so the defaults only act as a
/// termination guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
	/// Deepest phase 1 bound tried; phase 1 never needs more than 12.
	pub max_phase1_depth: u8,
	/// Bound on phase 1 plus phase 2 moves.
	pub max_total_depth: u8,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self {
			max_phase1_depth: 12,
			max_total_depth: 22,
		}
	}
}



#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrambleConfig {
	pub search: SearchConfig,
	/// Random states that solve in fewer moves are drawn again.
	pub min_length: usize,
	/// Length of the naive random-move scramble used when solving fails.
	pub fallback_length: usize,
}

impl Default for ScrambleConfig {
	fn default() -> Self {
		Self {
			search: SearchConfig::default(),
			min_length: 2,
			fallback_length: 20,
		}
	}
}
