//! The cube as an element of the Rubik's Cube group, at the level of cubies.
//!
//! Slots are numbered in the usual Kociemba order:
//! corners `URF UFL ULB UBR DFR DLF DBL DRB`,
//! edges `UR UF UL UB DR DF DL DB FR FL BL BR`.
//! `cp[i]` is the corner sitting in slot `i`, `co[i]` its twist (0..3),
//! likewise `ep`/`eo` for edges with flips (0..2).

use std::sync::LazyLock;

use crate::error::CubeError;
use crate::moves::{Move, N_MOVES};



pub const N_CORNERS: usize = 8;
pub const N_EDGES: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeState {
	pub(crate) cp: [u8; N_CORNERS],
	pub(crate) co: [u8; N_CORNERS],
	pub(crate) ep: [u8; N_EDGES],
	pub(crate) eo: [u8; N_EDGES],
}

impl Default for CubeState {
	fn default() -> Self {
		Self::SOLVED
	}
}

impl CubeState {
	pub const SOLVED: Self = Self {
		cp: [0, 1, 2, 3, 4, 5, 6, 7],
		co: [0; N_CORNERS],
		ep: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
		eo: [0; N_EDGES],
	};

	/// Builds a state from raw cubie arrays without checking it; see [`CubeState::verify`].
	pub fn new(cp: [u8; N_CORNERS], co: [u8; N_CORNERS], ep: [u8; N_EDGES], eo: [u8; N_EDGES]) -> Self {
		Self { cp, co, ep, eo }
	}

	pub fn identity() -> Self {
		Self::SOLVED
	}

	pub fn from_moves(moves: &[Move]) -> Self {
		Self::SOLVED.apply_moves(moves)
	}

	pub fn corner_permutation(&self) -> [u8; N_CORNERS] { self.cp }
	pub fn corner_orientation(&self) -> [u8; N_CORNERS] { self.co }
	pub fn edge_permutation(&self) -> [u8; N_EDGES] { self.ep }
	pub fn edge_orientation(&self) -> [u8; N_EDGES] { self.eo }

	pub fn is_solved(&self) -> bool {
		*self == Self::SOLVED
	}

	/// `self * other`: `other`'s relabeling is applied on top of `self`, so
	/// applying a move to a state is `state.compose(&move_cube)`.
	pub fn compose(&self, other: &Self) -> Self {
		let mut self_ = Self::SOLVED;
		for i in 0..N_CORNERS {
			let from = other.cp[i] as usize;
			self_.cp[i] = self.cp[from];
			self_.co[i] = (self.co[from] + other.co[i]) % 3;
		}
		for i in 0..N_EDGES {
			let from = other.ep[i] as usize;
			self_.ep[i] = self.ep[from];
			self_.eo[i] = (self.eo[from] + other.eo[i]) % 2;
		}
		self_
	}

	pub fn invert(&self) -> Self {
		let mut self_ = Self::SOLVED;
		for i in 0..N_CORNERS {
			self_.cp[self.cp[i] as usize] = i as u8;
		}
		for i in 0..N_CORNERS {
			self_.co[i] = (3 - self.co[self_.cp[i] as usize]) % 3;
		}
		for i in 0..N_EDGES {
			self_.ep[self.ep[i] as usize] = i as u8;
		}
		for i in 0..N_EDGES {
			self_.eo[i] = (2 - self.eo[self_.ep[i] as usize]) % 2;
		}
		self_
	}

	pub fn apply(&self, move_: Move) -> Self {
		self.compose(&MOVE_CUBES[move_.index()])
	}

	pub fn apply_moves(&self, moves: &[Move]) -> Self {
		moves.iter().fold(*self, |cube, &move_| cube.apply(move_))
	}

	/// Number of inversions of the corner permutation, mod 2.
	pub fn corner_parity(&self) -> u8 {
		permutation_parity(&self.cp)
	}

	pub fn edge_parity(&self) -> u8 {
		permutation_parity(&self.ep)
	}

	/// Checks group membership: bijective permutations, orientation sums, and
	/// equal corner and edge parities.
	pub fn verify(&self) -> Result<(), CubeError> {
		if !is_bijection(&self.cp) {
			return Err(CubeError::CornerPermutation);
		}
		if !is_bijection(&self.ep) {
			return Err(CubeError::EdgePermutation);
		}
		if self.co.iter().any(|&o| o > 2) || self.co.iter().map(|&o| o as u32).sum::<u32>() % 3 != 0 {
			return Err(CubeError::CornerOrientation);
		}
		if self.eo.iter().any(|&o| o > 1) || self.eo.iter().map(|&o| o as u32).sum::<u32>() % 2 != 0 {
			return Err(CubeError::EdgeOrientation);
		}
		if self.corner_parity() != self.edge_parity() {
			return Err(CubeError::Parity);
		}
		Ok(())
	}

	pub fn is_valid(&self) -> bool {
		self.verify().is_ok()
	}
}

fn is_bijection<const N: usize>(perm: &[u8; N]) -> bool {
	let mut seen = [false; N];
	for &p in perm {
		let p = p as usize;
		if p >= N || seen[p] {
			return false;
		}
		seen[p] = true;
	}
	true
}

pub(crate) fn permutation_parity(perm: &[u8]) -> u8 {
	let mut inversions = 0;
	for i in 0..perm.len() {
		for j in i+1..perm.len() {
			if perm[i] > perm[j] {
				inversions += 1;
			}
		}
	}
	(inversions % 2) as u8
}



//  URF=0 UFL=1 ULB=2 UBR=3 DFR=4 DLF=5 DBL=6 DRB=7
//  UR=0 UF=1 UL=2 UB=3 DR=4 DF=5 DL=6 DB=7 FR=8 FL=9 BL=10 BR=11
/// Clockwise quarter turns of U R F D L B.
const QUARTER_TURNS: [CubeState; 6] = [
	CubeState { // U
		cp: [3, 0, 1, 2, 4, 5, 6, 7],
		co: [0, 0, 0, 0, 0, 0, 0, 0],
		ep: [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
		eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
	},
	CubeState { // R
		cp: [4, 1, 2, 0, 7, 5, 6, 3],
		co: [2, 0, 0, 1, 1, 0, 0, 2],
		ep: [8, 1, 2, 3, 11, 5, 6, 7, 4, 9, 10, 0],
		eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
	},
	CubeState { // F
		cp: [1, 5, 2, 3, 0, 4, 6, 7],
		co: [1, 2, 0, 0, 2, 1, 0, 0],
		ep: [0, 9, 2, 3, 4, 8, 6, 7, 1, 5, 10, 11],
		eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
	},
	CubeState { // D
		cp: [0, 1, 2, 3, 5, 6, 7, 4],
		co: [0, 0, 0, 0, 0, 0, 0, 0],
		ep: [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11],
		eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
	},
	CubeState { // L
		cp: [0, 2, 6, 3, 4, 1, 5, 7],
		co: [0, 1, 2, 0, 0, 2, 1, 0],
		ep: [0, 1, 10, 3, 4, 5, 9, 7, 8, 2, 6, 11],
		eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
	},
	CubeState { // B
		cp: [0, 1, 3, 7, 4, 5, 2, 6],
		co: [0, 0, 1, 2, 0, 0, 2, 1],
		ep: [0, 1, 2, 11, 4, 5, 6, 10, 8, 9, 3, 7],
		eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
	},
];

/// All 18 face turns as cube states, indexed by [`Move::index`].
pub static MOVE_CUBES: LazyLock<[CubeState; N_MOVES]> = LazyLock::new(|| {
	let mut cubes = [CubeState::SOLVED; N_MOVES];
	for (face, quarter) in QUARTER_TURNS.iter().enumerate() {
		let half = quarter.compose(quarter);
		let inverse = half.compose(quarter);
		cubes[face * 3] = *quarter;
		cubes[face * 3 + 1] = half;
		cubes[face * 3 + 2] = inverse;
	}
	cubes
});
