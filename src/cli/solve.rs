//! Solve command implementation.

use super::output::{JsonSolveResult, format_solve_text, format_turn};
use super::{CliError, OutputFormat, load_config, resolve_seed};
use mastergen::{Code, SecretOracle, SessionConfig, Solver};
use std::path::PathBuf;

/// Arguments of the `solve` command.
#[derive(Debug)]
pub(crate) struct SolveArgs {
    pub(crate) colors: u8,
    pub(crate) secret: String,
    pub(crate) slots: Option<usize>,
    pub(crate) seed: Option<u64>,
    pub(crate) population: Option<usize>,
    pub(crate) generations: Option<usize>,
    pub(crate) max_turns: Option<usize>,
    pub(crate) config: Option<PathBuf>,
    pub(crate) format: OutputFormat,
    pub(crate) quiet: bool,
}

/// Execute the solve command.
///
/// # Errors
///
/// Returns an error if the arguments are invalid or the solver fails.
pub(crate) fn execute(args: &SolveArgs) -> Result<(), CliError> {
    let secret: Code = args.secret.parse()?;
    let session = SessionConfig::new(args.colors, args.slots.unwrap_or(secret.len()))?;
    session.validate(&secret)?;

    let mut config = load_config(args.config.as_deref())?;
    if let Some(population) = args.population {
        config.evolution.population_size = population;
    }
    if let Some(generations) = args.generations {
        config.evolution.generations = generations;
    }
    if let Some(max_turns) = args.max_turns {
        config.max_turns = max_turns;
    }

    let seed = resolve_seed(args.seed);
    let verbose = args.format == OutputFormat::Text && !args.quiet;

    if verbose {
        println!("Colors: {}", session.colors());
        println!("Code to guess: {secret}");
        println!("Seed: {seed}");
        println!();
    }

    let oracle = SecretOracle::new(secret);
    let mut solver = Solver::seeded(session, config, seed)?;
    let report = solver.solve_with(&oracle, |turn| {
        if verbose {
            println!("{}", format_turn(turn));
        }
    })?;

    match args.format {
        OutputFormat::Text => {
            if verbose {
                println!();
            }
            print!("{}", format_solve_text(&report, seed));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonSolveResult { seed, report: &report })?;
            println!("{json}");
        }
    }

    Ok(())
}
