//! Random-state scrambles for the 3x3x3 cube, generated by solving uniformly
//! random cube states with Kociemba's two-phase algorithm.
//!
//! ```no_run
//! let scramble = rubiks_cube_scrambler::generate_scramble();
//! println!("{scramble}");
//! ```

pub mod config;
pub mod coord;
pub mod cube;
pub mod error;
pub mod facelet;
pub mod move_tables;
pub mod moves;
pub mod pruning;
pub mod random;
pub mod scramble;
pub mod search;
pub mod tables;

pub use config::{ScrambleConfig, SearchConfig};
pub use cube::CubeState;
pub use error::{CubeError, ParseError, SolveError};
pub use facelet::{from_facelets, to_facelets};
pub use moves::{Face, Move, canonicalize, format_moves, is_canonical, parse_moves};
pub use random::{random_cube_state, random_move_scramble};
pub use scramble::{ScrambleService, ensure_ready, generate_scramble, solve, spawn_warm_up};
pub use search::Searcher;
pub use tables::Tables;
