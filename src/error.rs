use thiserror::Error;



/// Ways a [`crate::CubeState`] can fail to be a member of the cube group.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeError {
	#[error("corner permutation is not a bijection")]
	CornerPermutation,
	#[error("corner orientations do not sum to 0 mod 3")]
	CornerOrientation,
	#[error("edge permutation is not a bijection")]
	EdgePermutation,
	#[error("edge orientations do not sum to 0 mod 2")]
	EdgeOrientation,
	#[error("corner and edge permutation parities differ")]
	Parity,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
	#[error("invalid cube state: {0}")]
	InvalidState(#[from] CubeError),
	/// Every valid state is solvable inside the default bounds, so this means
	/// corrupt tables or a state that bypassed validation.
	#[error("no solution within {max_phase1_depth} phase 1 moves and {max_total_depth} total moves")]
	Exhausted {
		max_phase1_depth: u8,
		max_total_depth: u8,
	},
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	#[error("unknown move token `{0}`")]
	Move(String),
	#[error("facelet string must have 54 characters, got {0}")]
	FaceletLength(usize),
	#[error("unknown facelet `{0}`")]
	FaceletColor(char),
	#[error("every color must appear exactly 9 times")]
	FaceletCount,
	#[error("no cubie matches the stickers at {0}")]
	FaceletCubie(&'static str),
	#[error("facelets do not describe a reachable cube: {0}")]
	FaceletState(#[from] CubeError),
}
