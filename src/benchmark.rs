//! Benchmark runner: many independent sessions against random secrets.
//!
//! Game `i` uses seed `base_seed + i` both to draw its secret and to drive
//! its solver, so a benchmark is reproducible from its base seed. Each game
//! is single-threaded; games run in parallel with rayon and their
//! statistics are folded per thread and merged at the end.

// Statistics use intentional casts
#![allow(clippy::cast_precision_loss)]

use crate::error::{ConfigError, SolveError};
use crate::game::{SecretOracle, SessionConfig};
use crate::solver::{SolveReport, Solver, SolverConfig};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results of many games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BenchmarkStats {
    /// Games played.
    pub games_played: u64,
    /// Games that found the secret.
    pub solved: u64,
    /// Games that ended in an error.
    pub failed: u64,
    /// Fewest turns in a solved game.
    pub min_turns: Option<usize>,
    /// Most turns in a solved game.
    pub max_turns: Option<usize>,
    /// Number of solved games per turn count.
    pub turn_histogram: BTreeMap<usize, u64>,
    #[serde(skip)]
    total_turns: u64,
    #[serde(skip)]
    turns_sq_sum: u64,
}

impl BenchmarkStats {
    /// Create empty stats.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one game.
    pub fn add_result(&mut self, outcome: &Result<SolveReport, SolveError>) {
        match outcome {
            Ok(report) => self.add_solved(report.turns),
            Err(_) => self.add_failure(),
        }
    }

    /// Record a game solved in `turns` turns.
    pub fn add_solved(&mut self, turns: usize) {
        self.games_played += 1;
        self.solved += 1;
        self.total_turns += turns as u64;
        self.turns_sq_sum += (turns as u64) * (turns as u64);
        self.min_turns = Some(self.min_turns.map_or(turns, |m| m.min(turns)));
        self.max_turns = Some(self.max_turns.map_or(turns, |m| m.max(turns)));
        *self.turn_histogram.entry(turns).or_insert(0) += 1;
    }

    /// Record a game that ended without finding the secret.
    pub fn add_failure(&mut self) {
        self.games_played += 1;
        self.failed += 1;
    }

    /// Merge stats from another thread.
    pub fn merge(&mut self, other: &BenchmarkStats) {
        self.games_played += other.games_played;
        self.solved += other.solved;
        self.failed += other.failed;
        self.total_turns += other.total_turns;
        self.turns_sq_sum += other.turns_sq_sum;
        self.min_turns = match (self.min_turns, other.min_turns) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max_turns = match (self.max_turns, other.max_turns) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        for (&turns, &count) in &other.turn_histogram {
            *self.turn_histogram.entry(turns).or_insert(0) += count;
        }
    }

    /// Fraction of games solved (0.0-1.0).
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.solved as f64 / self.games_played as f64
    }

    /// Mean turns over solved games.
    #[must_use]
    pub fn mean_turns(&self) -> f64 {
        if self.solved == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.solved as f64
    }

    /// Standard deviation of turns over solved games.
    #[must_use]
    pub fn turns_std_dev(&self) -> f64 {
        if self.solved == 0 {
            return 0.0;
        }
        let n = self.solved as f64;
        let mean = self.mean_turns();
        let variance = (self.turns_sq_sum as f64 / n) - (mean * mean);
        if variance < 0.0 {
            0.0
        } else {
            variance.sqrt()
        }
    }
}

/// Play one game against a secret drawn from `seed`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the solver fails.
pub fn play_game(
    session: &SessionConfig,
    config: &SolverConfig,
    seed: u64,
) -> Result<SolveReport, SolveError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let oracle = SecretOracle::new(session.random_code(&mut rng));
    let mut solver = Solver::new(*session, config.clone(), rng)?;
    solver.solve(&oracle)
}

/// Play `games` games in parallel and aggregate their results.
///
/// # Errors
///
/// Returns an error if the configuration is invalid for the session.
pub fn run_benchmark(
    session: &SessionConfig,
    config: &SolverConfig,
    games: u64,
    base_seed: u64,
) -> Result<BenchmarkStats, ConfigError> {
    run_benchmark_with(session, config, games, base_seed, |_| {})
}

/// Like [`run_benchmark`], calling `on_game` after every finished game.
///
/// `on_game` runs on the worker threads and must be cheap.
///
/// # Errors
///
/// Returns an error if the configuration is invalid for the session.
pub fn run_benchmark_with<F>(
    session: &SessionConfig,
    config: &SolverConfig,
    games: u64,
    base_seed: u64,
    on_game: F,
) -> Result<BenchmarkStats, ConfigError>
where
    F: Fn(&Result<SolveReport, SolveError>) + Sync,
{
    config.validate(session)?;

    let stats = (0..games)
        .into_par_iter()
        .fold(BenchmarkStats::new, |mut local, i| {
            let outcome = play_game(session, config, base_seed.wrapping_add(i));
            if let Err(e) = &outcome {
                log::warn!("game {i} failed: {e}");
            }
            local.add_result(&outcome);
            on_game(&outcome);
            local
        })
        .reduce(BenchmarkStats::new, |mut a, b| {
            a.merge(&b);
            a
        });

    Ok(stats)
}
