//! Bench command implementation.

use super::output::{JsonBenchResult, format_bench_csv, format_bench_text};
use super::{BenchFormat, CliError, load_config, resolve_seed};
use indicatif::{ProgressBar, ProgressStyle};
use mastergen::SessionConfig;
use mastergen::benchmark::run_benchmark_with;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments of the `bench` command.
#[derive(Debug)]
pub(crate) struct BenchArgs {
    pub(crate) colors: u8,
    pub(crate) slots: usize,
    pub(crate) games: u64,
    pub(crate) seed: Option<u64>,
    pub(crate) threads: Option<usize>,
    pub(crate) config: Option<PathBuf>,
    pub(crate) format: BenchFormat,
    pub(crate) progress: bool,
}

/// Execute the bench command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn execute(args: &BenchArgs) -> Result<(), CliError> {
    let session = SessionConfig::new(args.colors, args.slots)?;
    let config = load_config(args.config.as_deref())?;

    // Set thread pool size if specified
    if let Some(num_threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let base_seed = resolve_seed(args.seed);

    let pb = if args.progress {
        let pb = ProgressBar::new(args.games);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})")
                .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let stats = run_benchmark_with(&session, &config, args.games, base_seed, |_| {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    })?;

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();
    let games_per_sec = if duration.as_secs_f64() > 0.0 {
        stats.games_played as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    match args.format {
        BenchFormat::Text => {
            println!();
            print!("{}", format_bench_text(&stats, &session, base_seed));
            println!();
            println!("Duration: {:.2}s ({:.0} games/sec)", duration.as_secs_f64(), games_per_sec);
        }
        BenchFormat::Json => {
            let json_result = JsonBenchResult::from_stats(&stats, &session, base_seed);
            let json = serde_json::to_string_pretty(&json_result)?;
            println!("{json}");
        }
        BenchFormat::Csv => {
            print!("{}", format_bench_csv(&stats));
        }
    }

    Ok(())
}
