// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Mastergen: a genetic-algorithm codebreaker for Mastermind-style games.
//!
//! Given pin feedback for every guess so far, the solver evolves candidate
//! codes until it finds ones consistent with all of it, plays one, and
//! repeats until the secret is found.
//!
//! - Deterministic: all randomness comes from a seedable RNG handle
//! - Bounded: search retries and turns are capped
//! - Observable: every turn is reported to the caller
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Solver Loop  │  Benchmark       │
//! ├─────────────────────────────────────┤
//! │   Evolutionary Search (gp)          │
//! ├─────────────────────────────────────┤
//! │   Pin Scoring │ History │ Oracle    │
//! └─────────────────────────────────────┘
//! ```

pub mod benchmark;
pub mod error;
pub mod game;
pub mod gp;
pub mod solver;

pub use error::{ConfigError, ScoreError, SolveError};

// Re-export key types at crate root for convenience
pub use game::{Code, GuessRecord, History, Oracle, PinResult, SecretOracle, SessionConfig, score};
pub use solver::{SolveReport, Solver, SolverConfig, TurnReport};
