//! Tests for loading solver configuration from JSON files.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use mastergen::{Code, ConfigError, SessionConfig, SolverConfig};
use std::io::Write;

#[test]
fn test_partial_file_uses_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "max_turns": 20, "evolution": {{ "population_size": 90 }} }}"#
    )
    .unwrap();

    let config = SolverConfig::from_json_file(file.path()).unwrap();

    assert_eq!(config.max_turns, 20);
    assert_eq!(config.evolution.population_size, 90);
    assert_eq!(config.evolution.generations, 100);
    assert_eq!(config.max_search_attempts, SolverConfig::default().max_search_attempts);
    assert!(config.validate(&SessionConfig::classic()).is_ok());
}

#[test]
fn test_opening_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "opening": [1, 2, 3, 3] }}"#).unwrap();

    let config = SolverConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.opening, Some(Code::from(vec![1, 2, 3, 3])));
}

#[test]
fn test_round_trip_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solver.json");
    std::fs::write(&path, serde_json::to_string(&SolverConfig::default()).unwrap()).unwrap();

    assert_eq!(SolverConfig::from_json_file(&path).unwrap(), SolverConfig::default());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SolverConfig::from_json_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let err = SolverConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_out_of_range_rate_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "evolution": {{ "mutation": {{ "mutation_rate": 2.0, "permutation_rate": 0.03 }} }} }}"#
    )
    .unwrap();

    let config = SolverConfig::from_json_file(file.path()).unwrap();
    assert!(matches!(
        config.validate(&SessionConfig::classic()),
        Err(ConfigError::InvalidParameter(_))
    ));
}
