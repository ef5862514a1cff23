//! Mastergen CLI - command-line interface for the genetic codebreaker.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Mastergen - a genetic-algorithm Mastermind codebreaker
#[derive(Parser, Debug)]
#[command(name = "mastergen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Break a single secret code
    Solve {
        /// Number of colors in the alphabet
        colors: u8,

        /// Secret code, e.g. 1234 or 1,2,10,4
        secret: String,

        /// Slots per code (default: length of the secret)
        #[arg(short = 'l', long)]
        slots: Option<usize>,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Population size per search
        #[arg(short, long)]
        population: Option<usize>,

        /// Generation budget per search
        #[arg(short, long)]
        generations: Option<usize>,

        /// Maximum number of turns
        #[arg(short = 't', long)]
        max_turns: Option<usize>,

        /// Solver configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress turn-by-turn output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Solve many random secrets and aggregate statistics
    Bench {
        /// Number of colors in the alphabet
        #[arg(long, default_value = "6")]
        colors: u8,

        /// Slots per code
        #[arg(short = 'l', long, default_value = "4")]
        slots: usize,

        /// Number of games to play (default: 100)
        #[arg(short = 'n', long, default_value = "100")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Solver configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::BenchFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    let result = match args.command {
        Commands::Solve {
            colors,
            secret,
            slots,
            seed,
            population,
            generations,
            max_turns,
            config,
            format,
            quiet,
        } => cli::solve::execute(&cli::solve::SolveArgs {
            colors,
            secret,
            slots,
            seed,
            population,
            generations,
            max_turns,
            config,
            format,
            quiet,
        }),

        Commands::Bench {
            colors,
            slots,
            games,
            seed,
            threads,
            config,
            format,
            progress,
        } => cli::bench::execute(&cli::bench::BenchArgs {
            colors,
            slots,
            games,
            seed,
            threads,
            config,
            format,
            progress,
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
