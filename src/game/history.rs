//! Append-only record of played turns.

use crate::error::ScoreError;
use crate::game::code::{Code, GuessRecord, PinResult};
use serde::{Deserialize, Serialize};

/// The guesses played so far, in order, with their feedback.
///
/// Every record has the same slot count; records are never edited or
/// removed once pushed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    slots: usize,
    records: Vec<GuessRecord>,
}

impl History {
    /// Create an empty history for codes of `slots` slots.
    #[must_use]
    pub fn new(slots: usize) -> Self {
        Self {
            slots,
            records: Vec::new(),
        }
    }

    /// Append a completed turn.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::LengthMismatch`] if the code does not have the
    /// history's slot count.
    pub fn push(&mut self, code: Code, result: PinResult) -> Result<(), ScoreError> {
        if code.len() != self.slots {
            return Err(ScoreError::LengthMismatch {
                left: code.len(),
                right: self.slots,
            });
        }
        self.records.push(GuessRecord::new(code, result));
        Ok(())
    }

    /// All records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    /// Number of turns played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no turn has been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `code` has already been played.
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.records.iter().any(|r| &r.code == code)
    }

    /// The most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&GuessRecord> {
        self.records.last()
    }

    /// Slot count of every code in the history.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Consume the history, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<GuessRecord> {
        self.records
    }
}
