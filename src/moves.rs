//! Outer-layer face turns and the canonical order used to skip redundant sequences.

use std::{fmt, str::FromStr};

use crate::error::ParseError;



pub const N_MOVES: usize = 18;
pub const N_PHASE2_MOVES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face { U, R, F, D, L, B }
pub const ALL_FACES: [Face; 6] = {use Face::*; [U, R, F, D, L, B]};
impl Face {
	pub fn index(self) -> usize {
		self as usize
	}

	pub fn from_index(index: usize) -> Self {
		ALL_FACES[index]
	}

	pub fn opposite(self) -> Self {
		ALL_FACES[(self.index() + 3) % 6]
	}

	pub fn to_char(self) -> char {
		match self {
			Face::U => 'U',
			Face::R => 'R',
			Face::F => 'F',
			Face::D => 'D',
			Face::L => 'L',
			Face::B => 'B',
		}
	}

	pub fn from_char(c: char) -> Option<Self> {
		match c {
			'U' => Some(Face::U),
			'R' => Some(Face::R),
			'F' => Some(Face::F),
			'D' => Some(Face::D),
			'L' => Some(Face::L),
			'B' => Some(Face::B),
			_ => None,
		}
	}
}



/// `X` is a clockwise quarter turn, `X2` a half turn, `Xs` counter-clockwise (`X'`).
///
/// The discriminant is `face * 3 + power`, and is used directly as a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Move {
	U, U2, Us,
	R, R2, Rs,
	F, F2, Fs,
	D, D2, Ds,
	L, L2, Ls,
	B, B2, Bs,
}
pub const ALL_MOVES: [Move; N_MOVES] = {use Move::*; [U, U2, Us, R, R2, Rs, F, F2, Fs, D, D2, Ds, L, L2, Ls, B, B2, Bs]};

/// Generators of the phase 2 subgroup `<U, D, R2, L2, F2, B2>`, in phase 2 table column order.
pub const PHASE2_MOVES: [Move; N_PHASE2_MOVES] = {use Move::*; [U, U2, Us, D, D2, Ds, R2, L2, F2, B2]};

impl Move {
	/// `power` is 0 for a quarter turn, 1 for a half turn, 2 for an inverse quarter turn.
	pub fn new(face: Face, power: u8) -> Self {
		debug_assert!(power < 3);
		ALL_MOVES[face.index() * 3 + power as usize]
	}

	pub fn index(self) -> usize {
		self as usize
	}

	pub fn face(self) -> Face {
		Face::from_index(self.index() / 3)
	}

	pub fn power(self) -> u8 {
		self as u8 % 3
	}

	/// Number of clockwise quarter turns this move stands for.
	pub fn quarter_turns(self) -> u8 {
		self.power() + 1
	}

	pub fn inverse(self) -> Self {
		Move::new(self.face(), 2 - self.power())
	}

	pub fn is_phase2(self) -> bool {
		PHASE2_MOVES.contains(&self)
	}

	/// A move is redundant after `previous` if it turns the same face, or if it
	/// turns U, R or F right after the opposite face: opposite turns commute, so
	/// only the U-before-D (R-before-L, F-before-B) order is searched.
	pub fn is_redundant_after(self, previous: Option<Move>) -> bool {
		let Some(previous) = previous else { return false };
		let face = self.face().index();
		let previous_face = previous.face().index();
		face == previous_face || previous_face == face + 3
	}
}

impl fmt::Display for Move {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let suffix = match self.power() {
			0 => "",
			1 => "2",
			_ => "'",
		};
		write!(f, "{}{suffix}", self.face().to_char())
	}
}

impl FromStr for Move {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut chars = s.chars();
		let face = chars.next()
			.and_then(Face::from_char)
			.ok_or_else(|| ParseError::Move(s.to_owned()))?;
		let power = match chars.as_str() {
			"" => 0,
			"2" => 1,
			"'" => 2,
			_ => return Err(ParseError::Move(s.to_owned())),
		};
		Ok(Move::new(face, power))
	}
}



/// Parses whitespace separated tokens such as `"R U R' U'"`.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, ParseError> {
	s.split_whitespace().map(str::parse).collect()
}

pub fn format_moves(moves: &[Move]) -> String {
	moves.iter()
		.map(Move::to_string)
		.collect::<Vec<_>>()
		.join(" ")
}

/// True if no adjacent pair of `moves` would have been pruned by [`Move::is_redundant_after`].
pub fn is_canonical(moves: &[Move]) -> bool {
	moves.windows(2).all(|pair| !pair[1].is_redundant_after(Some(pair[0])))
}

/// Rewrites `moves` into an equivalent canonical sequence: turns of the same
/// face are merged (and dropped if they cancel), and commuting opposite turns
/// are put in U-before-D order. Never longer than the input.
pub fn canonicalize(moves: &[Move]) -> Vec<Move> {
	let mut canonical = Vec::with_capacity(moves.len());
	for &move_ in moves {
		push_canonical(&mut canonical, move_);
	}
	canonical
}

/// `moves` must already be canonical, and stays so.
fn push_canonical(moves: &mut Vec<Move>, move_: Move) {
	let Some(&last) = moves.last() else {
		moves.push(move_);
		return;
	};
	if last.face() == move_.face() {
		moves.pop();
		if let Some(merged) = merge(last, move_) {
			push_canonical(moves, merged);
		}
	}
	else if last.face() == move_.face().opposite() {
		let before_last = moves.len().checked_sub(2).map(|i| moves[i]);
		match before_last {
			Some(same) if same.face() == move_.face() => {
				moves.truncate(moves.len() - 2);
				if let Some(merged) = merge(same, move_) {
					push_canonical(moves, merged);
				}
				push_canonical(moves, last);
			}
			_ if move_.is_redundant_after(Some(last)) => {
				moves.pop();
				push_canonical(moves, move_);
				push_canonical(moves, last);
			}
			_ => moves.push(move_),
		}
	}
	else {
		moves.push(move_);
	}
}

/// Two turns of the same face as one, `None` if they cancel.
fn merge(a: Move, b: Move) -> Option<Move> {
	debug_assert_eq!(a.face(), b.face());
	match (a.quarter_turns() + b.quarter_turns()) % 4 {
		0 => None,
		turns => Some(Move::new(a.face(), turns - 1)),
	}
}



#[cfg(test)]
mod moves {
	use super::*;
	use Move::*;

	#[test]
	fn index_layout() {
		for (i, move_) in ALL_MOVES.iter().enumerate() {
			assert_eq!(i, move_.index());
			assert_eq!(Face::from_index(i / 3), move_.face());
		}
		assert_eq!(Ds, Move::new(Face::D, 2));
	}

	#[test]
	fn inverse() {
		assert_eq!(Rs, R.inverse());
		assert_eq!(R, Rs.inverse());
		assert_eq!(B2, B2.inverse());
	}

	#[test]
	fn phase2_moves() {
		let expected = [true, true, true, false, true, false, false, true, false, true, true, true, false, true, false, false, true, false];
		let actual = ALL_MOVES.map(Move::is_phase2);
		assert_eq!(expected, actual);
	}

	mod is_redundant_after {
		use super::*;

		#[test]
		fn first_move() {
			assert!(ALL_MOVES.iter().all(|m| !m.is_redundant_after(None)));
		}

		#[test]
		fn same_face() {
			assert!(U2.is_redundant_after(Some(U)));
			assert!(Rs.is_redundant_after(Some(R2)));
		}

		#[test]
		fn opposite_faces() {
			assert!(!D.is_redundant_after(Some(U)));
			assert!(U.is_redundant_after(Some(D)));
			assert!(!L2.is_redundant_after(Some(Rs)));
			assert!(R.is_redundant_after(Some(L)));
			assert!(!Bs.is_redundant_after(Some(F)));
			assert!(F2.is_redundant_after(Some(B)));
		}

		#[test]
		fn unrelated_faces() {
			assert!(!R.is_redundant_after(Some(U)));
			assert!(!U.is_redundant_after(Some(R)));
			assert!(!F.is_redundant_after(Some(D2)));
		}
	}

	mod tokens {
		use super::*;

		#[test]
		fn display() {
			assert_eq!("R", R.to_string());
			assert_eq!("D2", D2.to_string());
			assert_eq!("B'", Bs.to_string());
		}

		#[test]
		fn parse_sequence() {
			assert_eq!(Ok(vec![R, U, Rs, Us]), parse_moves("R U R' U'"));
			assert_eq!(Ok(vec![]), parse_moves("   "));
			assert_eq!(Ok(vec![F2, L]), parse_moves(" F2\tL\n"));
		}

		#[test]
		fn parse_errors() {
			assert_eq!(Err(ParseError::Move("X".into())), "X".parse::<Move>());
			assert_eq!(Err(ParseError::Move("R3".into())), "R3".parse::<Move>());
			assert_eq!(Err(ParseError::Move("".into())), "".parse::<Move>());
			assert_eq!(Err(ParseError::Move("u".into())), parse_moves("R u"));
		}

		#[test]
		fn every_token_survives_display() {
			for move_ in ALL_MOVES {
				assert_eq!(Ok(move_), move_.to_string().parse());
			}
			assert_eq!("R U R' U'", format_moves(&[R, U, Rs, Us]));
			assert_eq!("", format_moves(&[]));
		}
	}

	#[test]
	fn canonical_sequences() {
		assert!(is_canonical(&[R, U, Rs, Us]));
		assert!(is_canonical(&[U, D, R, L2]));
		assert!(!is_canonical(&[D, U]));
		assert!(!is_canonical(&[R, R]));
		assert!(is_canonical(&[]));
	}

	mod canonicalize {
		use super::*;

		#[test]
		fn already_canonical() {
			assert_eq!(vec![R, U, Rs, Us], canonicalize(&[R, U, Rs, Us]));
			assert_eq!(vec![U, D2], canonicalize(&[U, D2]));
		}

		#[test]
		fn merges_same_face() {
			assert_eq!(vec![Rs], canonicalize(&[R, R2]));
			assert_eq!(vec![U2], canonicalize(&[U, U]));
			assert_eq!(vec![F], canonicalize(&[F, F, F, F, F]));
		}

		#[test]
		fn cancels() {
			assert_eq!(Vec::<Move>::new(), canonicalize(&[R, Rs]));
			assert_eq!(vec![U], canonicalize(&[U, F, Fs]));
			assert_eq!(vec![B2], canonicalize(&[B, R, L, Ls, Rs, B]));
		}

		#[test]
		fn orders_opposite_faces() {
			assert_eq!(vec![U, D], canonicalize(&[D, U]));
			assert_eq!(vec![R2, Ls], canonicalize(&[Ls, R2]));
		}

		#[test]
		fn merges_across_opposite_face() {
			assert_eq!(vec![U2, D], canonicalize(&[U, D, U]));
			assert_eq!(vec![L], canonicalize(&[R, L, Rs]));
			assert_eq!(vec![F2], canonicalize(&[B, F2, Bs]));
		}

		#[test]
		fn result_is_canonical() {
			let moves = [D, U, D, R, L, Rs, Ls, F2, B, F2, U];
			let canonical = canonicalize(&moves);
			assert!(is_canonical(&canonical));
			assert!(canonical.len() <= moves.len());
		}
	}
}
