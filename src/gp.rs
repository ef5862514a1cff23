//! Genetic algorithm for searching consistent codes.
//!
//! Candidate codes are treated as chromosomes. Each search breeds a
//! population with crossover, mutation and permutation, and keeps every
//! offspring whose fitness against the guess history is zero.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │         Evolution Loop              │
//! ├─────────────────────────────────────┤
//! │ Crossover │ Mutation │ Permutation  │
//! ├─────────────────────────────────────┤
//! │   Fitness Evaluation │ Elite Set    │
//! ├─────────────────────────────────────┤
//! │           Pin Scoring               │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use mastergen::game::{Code, History, SessionConfig};
//! use mastergen::gp::{evolve, history_fitness, EvolutionConfig};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let session = SessionConfig::classic();
//! let mut history = History::new(session.slots());
//! history.push(Code::from(vec![1, 1, 2, 2]), mastergen::game::PinResult::new(1, 1))?;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let (elite, _stats) = evolve(&session, &EvolutionConfig::default(), history_fitness(&history), &mut rng);
//! assert!(elite.len() <= 60);
//! # Ok::<(), mastergen::ScoreError>(())
//! ```

mod crossover;
mod elite;
mod evolution;
mod fitness;
mod mutation;

pub use crossover::{crossover, CrossoverConfig};
pub use elite::EliteSet;
pub use evolution::{evolve, EvolutionConfig, EvolutionStats, GenerationStats, MAX_POPULATION};
pub use fitness::{fitness_score, history_fitness};
pub use mutation::{mutate, permute, vary, MutationConfig};
