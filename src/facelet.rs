//! Sticker level view of a cube: 54 facelets, faces in the order U R F D L B,
//! each face read row by row as seen from outside with U on top (and B on top
//! for the D face). A sticker is named after the face whose center has its color.

use std::{fmt, str::FromStr};

use crate::cube::{CubeState, N_CORNERS, N_EDGES};
use crate::error::ParseError;
use crate::moves::{ALL_FACES, Face};



pub const N_FACELETS: usize = 54;
const N_FACELETS_PER_FACE: usize = 9;

/// Facelets of each corner slot, starting at the U or D sticker, then clockwise.
const CORNER_FACELETS: [[usize; 3]; N_CORNERS] = [
	[8, 9, 20],   // URF
	[6, 18, 38],  // UFL
	[0, 36, 47],  // ULB
	[2, 45, 11],  // UBR
	[29, 26, 15], // DFR
	[27, 44, 24], // DLF
	[33, 53, 42], // DBL
	[35, 17, 51], // DRB
];

const CORNER_COLORS: [[Face; 3]; N_CORNERS] = {
	use Face::*;
	[[U, R, F], [U, F, L], [U, L, B], [U, B, R], [D, F, R], [D, L, F], [D, B, L], [D, R, B]]
};

const CORNER_NAMES: [&str; N_CORNERS] = ["URF", "UFL", "ULB", "UBR", "DFR", "DLF", "DBL", "DRB"];

/// Facelets of each edge slot, U or D (else F or B) sticker first.
const EDGE_FACELETS: [[usize; 2]; N_EDGES] = [
	[5, 10],  // UR
	[7, 19],  // UF
	[3, 37],  // UL
	[1, 46],  // UB
	[32, 16], // DR
	[28, 25], // DF
	[30, 43], // DL
	[34, 52], // DB
	[23, 12], // FR
	[21, 41], // FL
	[50, 39], // BL
	[48, 14], // BR
];

const EDGE_COLORS: [[Face; 2]; N_EDGES] = {
	use Face::*;
	[[U, R], [U, F], [U, L], [U, B], [D, R], [D, F], [D, L], [D, B], [F, R], [F, L], [B, L], [B, R]]
};

const EDGE_NAMES: [&str; N_EDGES] = ["UR", "UF", "UL", "UB", "DR", "DF", "DL", "DB", "FR", "FL", "BL", "BR"];



pub fn to_facelets(cube: &CubeState) -> [Face; N_FACELETS] {
	let mut facelets: [Face; N_FACELETS] = std::array::from_fn(|i| Face::from_index(i / N_FACELETS_PER_FACE));
	for slot in 0..N_CORNERS {
		let (corner, twist) = (cube.cp[slot] as usize, cube.co[slot] as usize);
		for k in 0..3 {
			facelets[CORNER_FACELETS[slot][(k + twist) % 3]] = CORNER_COLORS[corner][k];
		}
	}
	for slot in 0..N_EDGES {
		let (edge, flip) = (cube.ep[slot] as usize, cube.eo[slot] as usize);
		for k in 0..2 {
			facelets[EDGE_FACELETS[slot][(k + flip) % 2]] = EDGE_COLORS[edge][k];
		}
	}
	facelets
}

/// Reads a 54 letter facelet string back into a cube state.
///
/// Centers must be in their home positions. The decoded state is checked with
/// [`CubeState::verify`], so a string describing a twisted corner or a single
/// edge swap is rejected even though each cubie on its own is recognisable.
pub fn from_facelets(s: &str) -> Result<CubeState, ParseError> {
	let len = s.chars().count();
	if len != N_FACELETS {
		return Err(ParseError::FaceletLength(len));
	}
	let mut facelets = [Face::U; N_FACELETS];
	for (facelet, c) in facelets.iter_mut().zip(s.chars()) {
		*facelet = Face::from_char(c).ok_or(ParseError::FaceletColor(c))?;
	}

	let mut counts = [0; 6];
	for facelet in facelets {
		counts[facelet.index()] += 1;
	}
	if counts.iter().any(|&count| count != N_FACELETS_PER_FACE) {
		return Err(ParseError::FaceletCount);
	}
	for face in ALL_FACES {
		if facelets[face.index() * N_FACELETS_PER_FACE + 4] != face {
			return Err(ParseError::FaceletCubie("centers"));
		}
	}

	let mut cube = CubeState::SOLVED;
	for slot in 0..N_CORNERS {
		let stickers = CORNER_FACELETS[slot].map(|i| facelets[i]);
		let twist = stickers.iter()
			.position(|&f| f == Face::U || f == Face::D)
			.ok_or(ParseError::FaceletCubie(CORNER_NAMES[slot]))?;
		let (clockwise, anticlockwise) = (stickers[(twist + 1) % 3], stickers[(twist + 2) % 3]);
		let corner = CORNER_COLORS.iter()
			.position(|colors| colors[1] == clockwise && colors[2] == anticlockwise)
			.ok_or(ParseError::FaceletCubie(CORNER_NAMES[slot]))?;
		cube.cp[slot] = corner as u8;
		cube.co[slot] = twist as u8;
	}
	for slot in 0..N_EDGES {
		let stickers = EDGE_FACELETS[slot].map(|i| facelets[i]);
		let (edge, flip) = EDGE_COLORS.iter()
			.enumerate()
			.find_map(|(edge, colors)| {
				if *colors == stickers {
					Some((edge, 0))
				}
				else if *colors == [stickers[1], stickers[0]] {
					Some((edge, 1))
				}
				else {
					None
				}
			})
			.ok_or(ParseError::FaceletCubie(EDGE_NAMES[slot]))?;
		cube.ep[slot] = edge as u8;
		cube.eo[slot] = flip;
	}

	cube.verify()?;
	Ok(cube)
}

impl fmt::Display for CubeState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for facelet in to_facelets(self) {
			write!(f, "{}", facelet.to_char())?;
		}
		Ok(())
	}
}

impl FromStr for CubeState {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		from_facelets(s)
	}
}



#[cfg(test)]
mod facelets {
	use super::*;
	use crate::error::CubeError;
	use crate::moves::Move::*;
	use crate::random::random_cube_state;
	use rand::{SeedableRng, rngs::StdRng};

	const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

	/// `SOLVED` with the stickers at `a` and `b` exchanged.
	fn swapped(pairs: &[(usize, usize)]) -> String {
		let mut chars: Vec<char> = SOLVED.chars().collect();
		for &(a, b) in pairs {
			chars.swap(a, b);
		}
		chars.into_iter().collect()
	}

	#[test]
	fn solved() {
		assert_eq!(SOLVED, CubeState::SOLVED.to_string());
		assert_eq!(Ok(CubeState::SOLVED), SOLVED.parse());
	}

	#[test]
	fn after_r() {
		let expected = "UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB";
		let cube = CubeState::from_moves(&[R]);
		assert_eq!(expected, cube.to_string());
		assert_eq!(Ok(cube), from_facelets(expected));
	}

	#[test]
	fn after_u() {
		let cube = CubeState::from_moves(&[U]);
		assert_eq!(
			"UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB",
			cube.to_string()
		);
	}

	#[test]
	fn random_states_read_back() {
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..100 {
			let cube = random_cube_state(&mut rng);
			assert_eq!(Ok(cube), cube.to_string().parse());
		}
	}

	mod errors {
		use super::*;

		#[test]
		fn length() {
			assert_eq!(Err(ParseError::FaceletLength(53)), from_facelets(&SOLVED[1..]));
			assert_eq!(Err(ParseError::FaceletLength(0)), from_facelets(""));
		}

		#[test]
		fn color() {
			let s = SOLVED.replacen('F', "X", 1);
			assert_eq!(Err(ParseError::FaceletColor('X')), from_facelets(&s));
		}

		#[test]
		fn count() {
			let s = SOLVED.replacen('F', "R", 1);
			assert_eq!(Err(ParseError::FaceletCount), from_facelets(&s));
		}

		#[test]
		fn centers() {
			assert_eq!(Err(ParseError::FaceletCubie("centers")), from_facelets(&swapped(&[(4, 13)])));
		}

		#[test]
		fn unknown_corner() {
			// U sticker of UR edge with R sticker of URF corner
			assert_eq!(Err(ParseError::FaceletCubie("URF")), from_facelets(&swapped(&[(5, 9)])));
		}

		#[test]
		fn twisted_corner() {
			assert_eq!(
				Err(ParseError::FaceletState(CubeError::CornerOrientation)),
				from_facelets(&swapped(&[(8, 9), (9, 20)]))
			);
		}

		#[test]
		fn flipped_edge() {
			assert_eq!(
				Err(ParseError::FaceletState(CubeError::EdgeOrientation)),
				from_facelets(&swapped(&[(5, 10)]))
			);
		}

		#[test]
		fn swapped_edges() {
			assert_eq!(
				Err(ParseError::FaceletState(CubeError::Parity)),
				from_facelets(&swapped(&[(10, 19)]))
			);
		}
	}
}
