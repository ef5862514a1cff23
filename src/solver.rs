//! Turn-by-turn solver.
//!
//! The solver plays a fixed opening guess, records the oracle's feedback,
//! then repeatedly runs a genetic search over the full history and plays a
//! code from the resulting elite set until the secret is found.
//!
//! ```text
//!   ┌──────────┐  guess   ┌────────┐
//!   │ SEARCHING│ ───────► │ Oracle │
//!   └────┬─────┘ ◄─────── └────────┘
//!        │        pins
//!        │ (L, 0)
//!        ▼
//!   ┌──────────┐
//!   │  SOLVED  │
//!   └──────────┘
//! ```
//!
//! Searches that come back empty, or that only produce codes already
//! played, are retried with a larger population and a shorter generation
//! budget. Both the retries and the number of turns are bounded.

use crate::error::{ConfigError, SolveError};
use crate::game::{Code, GuessRecord, History, Oracle, PinResult, SessionConfig};
use crate::gp::{EvolutionConfig, evolve, history_fitness};
use log::{debug, info, warn};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a solving session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Budgets and operator rates for each search.
    pub evolution: EvolutionConfig,
    /// Maximum number of guesses before giving up.
    pub max_turns: usize,
    /// Maximum number of searches per turn.
    pub max_search_attempts: usize,
    /// Opening guess; defaults to [`SessionConfig::opening_code`].
    pub opening: Option<Code>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            evolution: EvolutionConfig::default(),
            max_turns: 64,
            max_search_attempts: 10,
            opening: None,
        }
    }
}

impl SolverConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Check the configuration against a session.
    ///
    /// # Errors
    ///
    /// Returns an error if a budget is zero, a rate is out of range or the
    /// opening guess does not fit the session.
    pub fn validate(&self, session: &SessionConfig) -> Result<(), ConfigError> {
        self.evolution.validate()?;
        if self.max_turns == 0 {
            return Err(ConfigError::InvalidParameter(
                "max_turns must be at least 1".to_string(),
            ));
        }
        if self.max_search_attempts == 0 {
            return Err(ConfigError::InvalidParameter(
                "max_search_attempts must be at least 1".to_string(),
            ));
        }
        if let Some(opening) = &self.opening {
            session.validate(opening)?;
        }
        Ok(())
    }
}

/// What happened on one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Turn number, starting at 1.
    pub turn: usize,
    /// The guess played.
    pub guess: Code,
    /// The oracle's feedback.
    pub result: PinResult,
    /// Size of the elite set the guess was taken from (0 for the opening).
    pub elite_size: usize,
    /// Searches run to find the guess (0 for the opening).
    pub search_attempts: usize,
}

/// Outcome of a successful session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    /// The session that was played.
    pub session: SessionConfig,
    /// The code that scored all black pins.
    pub secret: Code,
    /// Number of guesses played.
    pub turns: usize,
    /// Every guess with its feedback.
    pub history: Vec<GuessRecord>,
    /// Per-turn reports, in order.
    pub reports: Vec<TurnReport>,
}

/// A candidate picked from a search.
struct Candidate {
    code: Code,
    elite_size: usize,
    attempts: usize,
}

/// Plays a session against an [`Oracle`].
#[derive(Debug)]
pub struct Solver<R> {
    session: SessionConfig,
    config: SolverConfig,
    rng: R,
}

impl Solver<SmallRng> {
    /// Create a solver with a [`SmallRng`] seeded from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid for the session.
    pub fn seeded(
        session: SessionConfig,
        config: SolverConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::new(session, config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Solver<R> {
    /// Create a solver drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid for the session.
    pub fn new(session: SessionConfig, config: SolverConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate(&session)?;
        Ok(Self {
            session,
            config,
            rng,
        })
    }

    /// The session being played.
    #[must_use]
    pub fn session(&self) -> &SessionConfig {
        &self.session
    }

    /// The solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Play until the secret is found.
    ///
    /// # Errors
    ///
    /// Returns an error if the oracle fails, the turn budget runs out, or
    /// no fresh consistent code can be found within the search budget.
    pub fn solve<O: Oracle + ?Sized>(&mut self, oracle: &O) -> Result<SolveReport, SolveError> {
        self.solve_with(oracle, |_| {})
    }

    /// Play until the secret is found, calling `observer` after every turn.
    ///
    /// # Errors
    ///
    /// Same as [`Solver::solve`].
    pub fn solve_with<O, F>(&mut self, oracle: &O, mut observer: F) -> Result<SolveReport, SolveError>
    where
        O: Oracle + ?Sized,
        F: FnMut(&TurnReport),
    {
        let slots = self.session.slots();
        let mut history = History::new(slots);
        let mut reports = Vec::new();
        let mut candidate = Candidate {
            code: self
                .config
                .opening
                .clone()
                .unwrap_or_else(|| self.session.opening_code()),
            elite_size: 0,
            attempts: 0,
        };

        loop {
            let turn = history.len() + 1;
            let result = oracle.play(&candidate.code)?;
            history.push(candidate.code.clone(), result)?;

            let report = TurnReport {
                turn,
                guess: candidate.code,
                result,
                elite_size: candidate.elite_size,
                search_attempts: candidate.attempts,
            };
            info!(
                "turn {turn}: guess {} -> {result} (elite {})",
                report.guess, report.elite_size
            );
            observer(&report);

            if result.is_solved(slots) {
                let secret = report.guess.clone();
                reports.push(report);
                return Ok(SolveReport {
                    session: self.session,
                    secret,
                    turns: turn,
                    history: history.into_records(),
                    reports,
                });
            }
            reports.push(report);

            if turn >= self.config.max_turns {
                return Err(SolveError::TurnLimit {
                    turns: self.config.max_turns,
                });
            }
            candidate = self.next_guess(&history, turn + 1)?;
        }
    }

    /// Search for a code consistent with `history` that has not been played.
    fn next_guess(&mut self, history: &History, turn: usize) -> Result<Candidate, SolveError> {
        let fitness = history_fitness(history);
        let mut exhausted = false;

        for attempt in 0..self.config.max_search_attempts {
            let config = self.config.evolution.escalated(attempt);
            let (mut elite, stats) = evolve(&self.session, &config, &fitness, &mut self.rng);
            let elite_size = elite.len();
            debug!(
                "turn {turn}, attempt {}: elite {elite_size} after {} generations",
                attempt + 1,
                stats.generations_run
            );

            if elite.is_empty() {
                exhausted = false;
                warn!(
                    "turn {turn}: empty elite set, retrying with population {}",
                    config.escalated(1).population_size
                );
                continue;
            }

            while let Some(code) = elite.pop() {
                if !history.contains(&code) {
                    return Ok(Candidate {
                        code,
                        elite_size,
                        attempts: attempt + 1,
                    });
                }
            }
            exhausted = true;
            warn!("turn {turn}: every elite code was already played, searching again");
        }

        let attempts = self.config.max_search_attempts;
        Err(if exhausted {
            SolveError::EliteExhausted { turn, attempts }
        } else {
            SolveError::NoSolutionFound { turn, attempts }
        })
    }
}
