use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};
use rand::{RngCore, SeedableRng, rngs::StdRng};

use rubiks_cube_scrambler::{
	CubeState, ScrambleConfig, ScrambleService, SearchConfig, Tables,
	format_moves, from_facelets, parse_moves,
};



#[derive(Parser)]
#[command(name = "scrambler")]
#[command(author, version, about, long_about = None)]
struct Cli {
	/// Increase logging verbosity (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,

	/// Deepest phase 1 search bound
	#[arg(long, default_value_t = SearchConfig::default().max_phase1_depth, global = true)]
	max_phase1_depth: u8,

	/// Bound on the length of a whole solution
	#[arg(long, default_value_t = SearchConfig::default().max_total_depth, global = true)]
	max_total_depth: u8,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print random-state scrambles, one per line.
	Scramble {
		/// How many scrambles to print
		#[arg(short = 'n', long, default_value_t = 1)]
		count: usize,
		/// Seed for reproducible scrambles
		#[arg(long)]
		seed: Option<u64>,
	},
	/// Solve the state reached by applying MOVES to a solved cube, or the state given by --facelets.
	Solve {
		#[arg(required_unless_present = "facelets", allow_hyphen_values = true)]
		moves: Vec<String>,
		/// 54 letters, faces in the order U R F D L B
		#[arg(long, conflicts_with = "moves")]
		facelets: Option<String>,
	},
	/// Build the tables and report timing and pruning depth distributions.
	Tables,
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(match cli.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		})
		.format_timestamp(Some(TimestampPrecision::Millis))
		.init();

	let config = ScrambleConfig {
		search: SearchConfig {
			max_phase1_depth: cli.max_phase1_depth,
			max_total_depth: cli.max_total_depth,
		},
		..ScrambleConfig::default()
	};
	let service = ScrambleService::new(config);

	match cli.command {
		Commands::Scramble { count, seed } => {
			let mut rng: Box<dyn RngCore> = match seed {
				Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
				None => Box::new(rand::rng()),
			};
			service.ensure_ready();
			for _ in 0..count {
				println!("{}", service.generate_scramble_with(&mut *rng));
			}
			ExitCode::SUCCESS
		}
		Commands::Solve { moves, facelets } => {
			let cube = match read_state(&moves, facelets.as_deref()) {
				Ok(cube) => cube,
				Err(err) => {
					eprintln!("error: {err}");
					return ExitCode::FAILURE;
				}
			};
			let time_begin = Instant::now();
			match service.solve(&cube) {
				Ok(solution) => {
					info!("solved in {:?}", time_begin.elapsed());
					println!("{} ({} moves)", format_moves(&solution), solution.len());
					ExitCode::SUCCESS
				}
				Err(err) => {
					eprintln!("error: {err}");
					ExitCode::FAILURE
				}
			}
		}
		Commands::Tables => {
			let time_begin = Instant::now();
			let tables = Tables::build();
			println!("built in {:?}", time_begin.elapsed());
			let pruning = &tables.pruning;
			for (name, table) in [
				("twist x slice", &pruning.twist_slice),
				("flip x slice", &pruning.flip_slice),
				("edge4 x corner", &pruning.edge4_corner),
				("edge4 x edge8", &pruning.edge4_edge8),
			] {
				println!("{name}: {} entries, max depth {}", table.len(), table.max_depth());
				for (depth, count) in table.histogram().iter().enumerate() {
					println!("  {depth:>2}: {count}");
				}
			}
			ExitCode::SUCCESS
		}
	}
}

fn read_state(moves: &[String], facelets: Option<&str>) -> Result<CubeState, rubiks_cube_scrambler::ParseError> {
	match facelets {
		Some(facelets) => from_facelets(facelets),
		None => Ok(CubeState::from_moves(&parse_moves(&moves.join(" "))?)),
	}
}
