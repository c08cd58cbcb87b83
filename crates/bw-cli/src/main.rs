//! CLI frontend for the Boardwalk landing simulator.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

use commands::OutputFormat;

#[derive(Parser)]
#[command(
    name = "bw",
    about = "Boardwalk: estimate how often each board square is landed on",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play many turns and report the landing distribution
    Simulate {
        /// Number of turns to play
        #[arg(short, long, default_value = "10000")]
        turns: u64,

        /// RNG seed for a reproducible run (default: a fresh random seed)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Independent workers to split the turns across (at most one per turn)
        #[arg(short, long, default_value = "1")]
        workers: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Order squares from most to least visited
        #[arg(short, long)]
        ranked: bool,
    },

    /// List the board squares and their categories
    Board {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            turns,
            seed,
            workers,
            format,
            ranked,
        } => commands::simulate::run(turns, seed, workers, format, ranked),
        Commands::Board { format } => commands::board::run(format),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
/// Set `BW_LOG_JSON` for JSON lines.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if std::env::var("BW_LOG_JSON").is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
