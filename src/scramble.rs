//! Random-state scrambles on top of the process-wide tables.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;
use std::thread::{self, JoinHandle};

use log::{debug, error, warn};
use rand::Rng;

use crate::config::ScrambleConfig;
use crate::cube::CubeState;
use crate::error::SolveError;
use crate::moves::{Move, format_moves};
use crate::random::{random_cube_state, random_move_scramble};
use crate::search::Searcher;
use crate::tables::Tables;



static TABLES: OnceLock<Tables> = OnceLock::new();

/// Builds the tables on first use; every other caller blocks until that build
/// is done and then shares it.
pub fn ensure_ready() -> &'static Tables {
	TABLES.get_or_init(Tables::build)
}

pub fn is_ready() -> bool {
	TABLES.get().is_some()
}

/// Starts building the tables in the background so the first scramble does not wait.
pub fn spawn_warm_up() -> JoinHandle<()> {
	thread::spawn(|| {
		ensure_ready();
	})
}

/// Random states drawn before giving up on `min_length`.
const MAX_DRAWS: usize = 100;



#[derive(Debug, Clone, Default)]
pub struct ScrambleService {
	config: ScrambleConfig,
}

impl ScrambleService {
	pub fn new(config: ScrambleConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> ScrambleConfig {
		self.config
	}

	pub fn ensure_ready(&self) -> &'static Tables {
		ensure_ready()
	}

	pub fn solve(&self, cube: &CubeState) -> Result<Vec<Move>, SolveError> {
		Searcher::new(ensure_ready(), self.config.search).solve(cube)
	}

	/// A scramble as space separated move tokens, drawn with the thread-local rng.
	pub fn generate_scramble(&self) -> String {
		self.generate_scramble_with(&mut rand::rng())
	}

	pub fn generate_scramble_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
		format_moves(&self.generate_scramble_moves_with(rng))
	}

	/// Solves a uniformly random state and returns the solution.
	///
	/// Never fails: a solver error or panic is logged and replaced by
	/// `fallback_length` random moves.
	pub fn generate_scramble_moves_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Move> {
		let attempt = panic::catch_unwind(AssertUnwindSafe(|| self.draw_solved_state(rng)));
		match attempt {
			Ok(Ok(Some(moves))) => return moves,
			Ok(Ok(None)) => warn!("no random state solved in at least {} moves after {MAX_DRAWS} draws", self.config.min_length),
			Ok(Err(err)) => error!("solving a random state failed: {err}"),
			Err(payload) => error!("solver panicked: {}", panic_message(&*payload)),
		}
		warn!("falling back to {} random moves", self.config.fallback_length);
		random_move_scramble(self.config.fallback_length, rng)
	}

	fn draw_solved_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<Vec<Move>>, SolveError> {
		let searcher = Searcher::new(ensure_ready(), self.config.search);
		for _ in 0..MAX_DRAWS {
			let cube = random_cube_state(rng);
			let solution = searcher.solve(&cube)?;
			if solution.len() >= self.config.min_length {
				return Ok(Some(solution));
			}
			debug!("drawn state solves in {} moves, drawing again", solution.len());
		}
		Ok(None)
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
	if let Some(message) = payload.downcast_ref::<&str>() {
		*message
	}
	else if let Some(message) = payload.downcast_ref::<String>() {
		message.as_str()
	}
	else {
		"unknown panic payload"
	}
}



pub fn generate_scramble() -> String {
	ScrambleService::default().generate_scramble()
}

pub fn solve(cube: &CubeState) -> Result<Vec<Move>, SolveError> {
	ScrambleService::default().solve(cube)
}
