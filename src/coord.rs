//! Small integer projections of a [`CubeState`].
//!
//! Phase 1 works with `twist`, `flip` and `slice`; all three are 0 exactly when
//! the cube lies in the subgroup `<U, D, R2, L2, F2, B2>`. Phase 2 works with
//! `edge4`, `edge8` and `corner`, which are only meaningful inside that subgroup.
//!
//! Every setter writes a representative state: `set_x(v)` followed by `x()`
//! gives back `v` for every `v` in the coordinate's domain.

use crate::cube::{CubeState, N_CORNERS, N_EDGES};



pub const N_TWIST: usize = 2187;
pub const N_FLIP: usize = 2048;
pub const N_SLICE: usize = 495;
pub const N_EDGE4: usize = 24;
pub const N_EDGE8: usize = 40320;
pub const N_CORNER: usize = 40320;

/// The four middle layer edges FR, FL, BL, BR are numbered from here up.
const FIRST_SLICE_EDGE: u8 = 8;

const FACTORIAL: [u32; 9] = [1, 1, 2, 6, 24, 120, 720, 5040, 40320];

/// Binomial coefficient, 0 when `k > n`.
pub(crate) const fn choose(n: usize, k: usize) -> usize {
	if k > n {
		return 0;
	}
	let k = if k > n - k { n - k } else { k };
	let mut result = 1;
	let mut i = 1;
	while i <= k {
		result = result * (n - i + 1) / i;
		i += 1;
	}
	result
}

/// Lehmer-code rank of a permutation of `0..len` (any `len` distinct values
/// work, only their relative order counts).
pub(crate) fn rank_permutation(perm: &[u8]) -> u16 {
	let n = perm.len();
	let mut rank = 0;
	for i in 0..n {
		let smaller_after = perm[i+1..].iter().filter(|&&p| p < perm[i]).count() as u32;
		rank += smaller_after * FACTORIAL[n - 1 - i];
	}
	rank as u16
}

/// Inverse of [`rank_permutation`], writing a permutation of `0..perm.len()`.
pub(crate) fn unrank_permutation(rank: u16, perm: &mut [u8]) {
	let n = perm.len();
	let mut rank = rank as u32;
	let mut remaining: Vec<u8> = (0..n as u8).collect();
	for i in 0..n {
		let fact = FACTORIAL[n - 1 - i];
		let digit = (rank / fact) as usize;
		rank %= fact;
		perm[i] = remaining.remove(digit);
	}
}



impl CubeState {
	/// Base 3 digits of the first 7 corner twists; the 8th follows from the sum rule.
	pub fn twist(&self) -> u16 {
		self.co[..N_CORNERS-1].iter().fold(0, |acc, &o| 3 * acc + o as u16)
	}

	pub fn set_twist(&mut self, twist: u16) {
		let mut twist = twist;
		let mut sum = 0;
		for i in (0..N_CORNERS-1).rev() {
			self.co[i] = (twist % 3) as u8;
			sum += self.co[i];
			twist /= 3;
		}
		self.co[N_CORNERS-1] = (3 - sum % 3) % 3;
	}

	/// Base 2 digits of the first 11 edge flips.
	pub fn flip(&self) -> u16 {
		self.eo[..N_EDGES-1].iter().fold(0, |acc, &o| 2 * acc + o as u16)
	}

	pub fn set_flip(&mut self, flip: u16) {
		let mut flip = flip;
		let mut sum = 0;
		for i in (0..N_EDGES-1).rev() {
			self.eo[i] = (flip % 2) as u8;
			sum += self.eo[i];
			flip /= 2;
		}
		self.eo[N_EDGES-1] = sum % 2;
	}

	/// Which 4 of the 12 edge slots hold middle layer edges, ranked in the
	/// combinatorial number system. 0 means they are home in slots 8..12.
	pub fn slice(&self) -> u16 {
		let mut slice = 0;
		let mut found = 0;
		for i in (0..N_EDGES).rev() {
			if self.ep[i] >= FIRST_SLICE_EDGE {
				found += 1;
				slice += choose(N_EDGES - 1 - i, found);
			}
		}
		slice as u16
	}

	/// Places FR, FL, BL, BR (in that order) into the slots encoded by
	/// `slice`, and the other edges in order into the rest.
	pub fn set_slice(&mut self, slice: u16) {
		let mut slice = slice as usize;
		let mut left = 4;
		let mut next_slice_edge = FIRST_SLICE_EDGE;
		let mut next_other_edge = 0;
		for i in 0..N_EDGES {
			let c = choose(N_EDGES - 1 - i, left);
			if left > 0 && slice >= c {
				slice -= c;
				left -= 1;
				self.ep[i] = next_slice_edge;
				next_slice_edge += 1;
			}
			else {
				self.ep[i] = next_other_edge;
				next_other_edge += 1;
			}
		}
	}

	/// Relative order of the four middle layer edges, read in slot order.
	pub fn edge4(&self) -> u16 {
		let slice_edges: Vec<u8> = self.ep.iter().copied().filter(|&e| e >= FIRST_SLICE_EDGE).collect();
		rank_permutation(&slice_edges)
	}

	/// Rewrites which middle layer edge sits in each slot currently holding one.
	pub fn set_edge4(&mut self, edge4: u16) {
		let mut perm = [0; 4];
		unrank_permutation(edge4, &mut perm);
		let slots = self.ep.iter_mut().filter(|e| **e >= FIRST_SLICE_EDGE);
		for (slot, p) in slots.zip(perm) {
			*slot = p + FIRST_SLICE_EDGE;
		}
	}

	/// Relative order of the eight U and D layer edges, read in slot order.
	pub fn edge8(&self) -> u16 {
		let ud_edges: Vec<u8> = self.ep.iter().copied().filter(|&e| e < FIRST_SLICE_EDGE).collect();
		rank_permutation(&ud_edges)
	}

	pub fn set_edge8(&mut self, edge8: u16) {
		let mut perm = [0; 8];
		unrank_permutation(edge8, &mut perm);
		let slots = self.ep.iter_mut().filter(|e| **e < FIRST_SLICE_EDGE);
		for (slot, p) in slots.zip(perm) {
			*slot = p;
		}
	}

	pub fn corner(&self) -> u16 {
		rank_permutation(&self.cp)
	}

	pub fn set_corner(&mut self, corner: u16) {
		unrank_permutation(corner, &mut self.cp);
	}
}
