//! Output formatting utilities for CLI.

// Statistics output uses intentional casts
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use mastergen::benchmark::BenchmarkStats;
use mastergen::{SessionConfig, SolveReport, TurnReport};
use serde::Serialize;
use std::fmt::Write;

/// JSON-serializable solve result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSolveResult<'a> {
    /// Random seed used.
    pub(super) seed: u64,
    /// The full solve report.
    #[serde(flatten)]
    pub(super) report: &'a SolveReport,
}

/// Format one turn as a single line.
pub(super) fn format_turn(turn: &TurnReport) -> String {
    let mut line = format!(
        "Turn {:>3}: {}  black={} white={}",
        turn.turn, turn.guess, turn.result.black, turn.result.white
    );
    if turn.search_attempts > 0 {
        let _ = write!(line, "  [elite {}", turn.elite_size);
        if turn.search_attempts > 1 {
            let _ = write!(line, ", {} searches", turn.search_attempts);
        }
        line.push(']');
    }
    line
}

/// Format a solve report as human-readable text.
pub(super) fn format_solve_text(report: &SolveReport, seed: u64) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Solved: {}", report.secret);
    let _ = writeln!(output, "  Turns: {}", report.turns);
    let _ = writeln!(output, "  Seed: {seed}");
    output
}

/// Format benchmark stats as human-readable text.
pub(super) fn format_bench_text(stats: &BenchmarkStats, session: &SessionConfig, base_seed: u64) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Benchmark Results ({} games, {} colors x {} slots, seed {base_seed})",
        stats.games_played,
        session.colors(),
        session.slots()
    );
    output.push_str("========================================\n\n");

    let _ = writeln!(
        output,
        "Solved: {} ({:.1}%)",
        stats.solved,
        stats.solve_rate() * 100.0
    );
    let _ = writeln!(output, "Failed: {}", stats.failed);
    if let (Some(min), Some(max)) = (stats.min_turns, stats.max_turns) {
        let _ = writeln!(
            output,
            "Turns: {:.2} (+/- {:.2}), min {min}, max {max}",
            stats.mean_turns(),
            stats.turns_std_dev()
        );
    }

    if !stats.turn_histogram.is_empty() {
        output.push_str("\nTurns to solve:\n");
        let widest = stats.turn_histogram.values().copied().max().unwrap_or(1).max(1);
        for (turns, count) in &stats.turn_histogram {
            let bar = "#".repeat(((count * 40) / widest) as usize);
            let _ = writeln!(output, "  {turns:>3}: {count:>6} {bar}");
        }
    }

    output
}

/// Format benchmark stats as CSV, one row per turn count.
pub(super) fn format_bench_csv(stats: &BenchmarkStats) -> String {
    let mut output = String::new();

    // Header
    output.push_str("turns,games,fraction\n");

    // Data rows
    for (turns, count) in &stats.turn_histogram {
        let fraction = if stats.games_played == 0 {
            0.0
        } else {
            *count as f64 / stats.games_played as f64
        };
        let _ = writeln!(output, "{turns},{count},{fraction:.4}");
    }
    if stats.failed > 0 {
        let _ = writeln!(
            output,
            "failed,{},{:.4}",
            stats.failed,
            stats.failed as f64 / stats.games_played as f64
        );
    }

    output
}

/// JSON-serializable benchmark result.
#[derive(Debug, Serialize)]
pub(super) struct JsonBenchResult<'a> {
    /// Alphabet size.
    colors: u8,
    /// Slots per code.
    slots: usize,
    /// Seed of the first game.
    base_seed: u64,
    /// Fraction of games solved (0.0-1.0).
    solve_rate: f64,
    /// Mean turns over solved games.
    mean_turns: f64,
    /// Standard deviation of turns.
    turns_std_dev: f64,
    /// Raw counters and histogram.
    #[serde(flatten)]
    stats: &'a BenchmarkStats,
}

impl<'a> JsonBenchResult<'a> {
    /// Create from stats and session.
    pub(super) fn from_stats(stats: &'a BenchmarkStats, session: &SessionConfig, base_seed: u64) -> Self {
        Self {
            colors: session.colors(),
            slots: session.slots(),
            base_seed,
            solve_rate: stats.solve_rate(),
            mean_turns: stats.mean_turns(),
            turns_std_dev: stats.turns_std_dev(),
            stats,
        }
    }
}
