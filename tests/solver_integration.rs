//! End-to-end tests for the solver loop.
//!
//! These tests play full sessions against fixed and random secrets and check
//! that every session terminates with the secret within a bounded number of
//! turns.
//!
//! Run with: cargo test --release solver_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use mastergen::benchmark::run_benchmark;
use mastergen::gp::{EvolutionConfig, evolve};
use mastergen::{Code, PinResult, SecretOracle, SessionConfig, Solver, SolverConfig};
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn test_classic_secret_across_seeds() {
    let session = SessionConfig::classic();
    let secret = Code::from(vec![1, 2, 3, 4]);
    let oracle = SecretOracle::new(secret.clone());

    for seed in 0..20 {
        let mut solver = Solver::seeded(session, SolverConfig::default(), seed).unwrap();
        let report = solver
            .solve(&oracle)
            .unwrap_or_else(|e| panic!("seed {seed} failed: {e}"));

        assert!(report.turns < 50, "seed {seed} took {} turns", report.turns);
        assert_eq!(report.secret, secret);
        assert_eq!(report.history[0].code, Code::from(vec![1, 1, 2, 2]));
        assert_eq!(report.history.last().unwrap().result, PinResult::new(4, 0));
    }
}

#[test]
fn test_random_secrets() {
    let session = SessionConfig::classic();
    let stats = run_benchmark(&session, &SolverConfig::default(), 32, 7).unwrap();

    assert_eq!(stats.games_played, 32);
    assert_eq!(stats.failed, 0);
    assert!(stats.max_turns.unwrap() < 50);
}

#[test]
fn test_wider_game() {
    let session = SessionConfig::new(8, 5).unwrap();
    let secret = session.code(vec![8, 1, 7, 7, 3]).unwrap();
    let oracle = SecretOracle::new(secret.clone());

    let mut solver = Solver::seeded(session, SolverConfig::default(), 99).unwrap();
    let report = solver.solve(&oracle).unwrap();

    assert_eq!(report.secret, secret);
    assert_eq!(report.history[0].code, Code::from(vec![1, 1, 2, 2, 2]));
}

#[test]
fn test_single_color_game() {
    let session = SessionConfig::new(1, 4).unwrap();
    let oracle = SecretOracle::new(Code::from(vec![1, 1, 1, 1]));

    let report = Solver::seeded(session, SolverConfig::default(), 0)
        .unwrap()
        .solve(&oracle)
        .unwrap();

    assert_eq!(report.turns, 1);
}

#[test]
fn test_every_turn_after_opening_was_consistent_or_searched() {
    let session = SessionConfig::classic();
    let oracle = SecretOracle::new(Code::from(vec![5, 5, 6, 1]));
    let report = Solver::seeded(session, SolverConfig::default(), 31)
        .unwrap()
        .solve(&oracle)
        .unwrap();

    for turn in &report.reports[1..] {
        assert!(turn.search_attempts >= 1);
        assert!(turn.elite_size >= 1);
    }
}

#[test]
fn test_constant_zero_evaluator_fills_elite() {
    let session = SessionConfig::classic();
    for population_size in [1, 10, 60, 200] {
        let config = EvolutionConfig {
            population_size,
            ..EvolutionConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(population_size as u64);
        let (elite, stats) = evolve(&session, &config, |_| 0, &mut rng);

        assert_eq!(elite.len(), population_size);
        assert!(stats.generations_run <= config.generations);
    }
}
