//! Error types for scoring, configuration and solving.

use thiserror::Error;

/// Errors raised when two codes cannot be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The two codes have a different number of slots.
    #[error("length mismatch: {left} slots vs {right} slots")]
    LengthMismatch {
        /// Length of the first code.
        left: usize,
        /// Length of the second code.
        right: usize,
    },
}

/// Errors raised while building or loading a session or solver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The alphabet is empty.
    #[error("at least one color is required")]
    NoColors,
    /// The code has no slots.
    #[error("at least one slot is required")]
    NoSlots,
    /// The slot count exceeds the supported maximum.
    #[error("{slots} slots requested, at most {max} are supported")]
    TooManySlots {
        /// Requested slot count.
        slots: usize,
        /// Supported maximum.
        max: usize,
    },
    /// A code has the wrong number of slots for the session.
    #[error("code has {actual} slots, expected {expected}")]
    WrongLength {
        /// Session slot count.
        expected: usize,
        /// Slots in the offending code.
        actual: usize,
    },
    /// A code uses a color outside `[1, colors]`.
    #[error("color {color} at slot {slot} is outside 1..={colors}")]
    ColorOutOfRange {
        /// Zero-based slot index.
        slot: usize,
        /// Offending color.
        color: u8,
        /// Alphabet size.
        colors: u8,
    },
    /// A numeric parameter is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// A code string could not be parsed.
    #[error("invalid code {0:?}")]
    InvalidCode(String),
    /// A configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A configuration file is not valid JSON for the expected type.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that end a solving session without finding the secret.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The session or solver configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// The oracle could not score a guess.
    #[error("scoring error: {0}")]
    Score(#[from] ScoreError),
    /// Every search attempt came back empty.
    #[error("no consistent code found on turn {turn} after {attempts} search attempts")]
    NoSolutionFound {
        /// Turn that needed a new guess.
        turn: usize,
        /// Number of engine invocations made.
        attempts: usize,
    },
    /// Every search attempt only produced codes that were already played.
    #[error("elite set exhausted by already-played codes on turn {turn} after {attempts} search attempts")]
    EliteExhausted {
        /// Turn that needed a new guess.
        turn: usize,
        /// Number of engine invocations made.
        attempts: usize,
    },
    /// The turn budget ran out before the secret was found.
    #[error("secret not found within {turns} turns")]
    TurnLimit {
        /// Configured turn budget.
        turns: usize,
    },
}
