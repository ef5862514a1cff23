//! Fitness evaluation against the guess history.
//!
//! A trial code is scored by pretending it is the secret and replaying every
//! recorded guess against it. The fitness is the total pin disagreement with
//! the feedback actually observed; zero means the trial is consistent with
//! everything seen so far. Lower is better.

use crate::error::ScoreError;
use crate::game::{Code, History, score};

/// Sum of pin differences between the feedback `trial` would have produced
/// and the feedback recorded in `history`.
///
/// # Errors
///
/// Returns [`ScoreError::LengthMismatch`] if `trial` does not have the
/// history's slot count.
pub fn fitness_score(trial: &Code, history: &History) -> Result<usize, ScoreError> {
    history.records().iter().try_fold(0, |total, record| -> Result<usize, ScoreError> {
        let predicted = score(trial, &record.code)?;
        Ok(total + predicted.distance(&record.result))
    })
}

/// Build a fitness evaluator closed over the complete history.
///
/// Trials that cannot be compared with the history get `usize::MAX` so they
/// are never eligible.
#[must_use]
pub fn history_fitness(history: &History) -> impl Fn(&Code) -> usize + '_ {
    move |trial| fitness_score(trial, history).unwrap_or(usize::MAX)
}
