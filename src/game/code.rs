//! Code and feedback value types.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of colors: a guess, a secret or a chromosome.
///
/// Codes are plain values. Operators build new codes rather than editing
/// ones that are already shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(Vec<u8>);

impl Code {
    /// The colors, slot by slot.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.0
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the code has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the code, returning its colors.
    #[must_use]
    pub fn into_values(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Code {
    fn from(values: Vec<u8>) -> Self {
        Self(values)
    }
}

impl FromIterator<u8> for Code {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact = self.0.iter().all(|&c| c < 10);
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 && !compact {
                write!(f, ",")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = ConfigError;

    /// Parse `"1234"` (one digit per slot) or `"1,2,10,4"` / `"1 2 10 4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ConfigError::InvalidCode(s.to_string());
        if s.is_empty() {
            return Err(invalid());
        }

        if s.contains([',', ' ']) {
            let code: Code = s
                .split([',', ' '])
                .filter(|token| !token.is_empty())
                .map(|token| token.parse::<u8>().map_err(|_| invalid()))
                .collect::<Result<_, _>>()?;
            if code.is_empty() {
                return Err(invalid());
            }
            Ok(code)
        } else {
            s.chars()
                .map(|c| {
                    c.to_digit(10)
                        .and_then(|d| u8::try_from(d).ok())
                        .ok_or_else(invalid)
                })
                .collect()
        }
    }
}

/// Feedback for one guess: exact matches and color-only matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PinResult {
    /// Slots where both codes hold the same color.
    pub black: usize,
    /// Further color matches at different slots.
    pub white: usize,
}

impl PinResult {
    /// Create a pin result.
    #[must_use]
    pub fn new(black: usize, white: usize) -> Self {
        Self { black, white }
    }

    /// Whether this result means the guess was the secret.
    #[must_use]
    pub fn is_solved(&self, slots: usize) -> bool {
        self.black == slots && self.white == 0
    }

    /// Sum of absolute pin differences against another result.
    #[must_use]
    pub fn distance(&self, other: &PinResult) -> usize {
        self.black.abs_diff(other.black) + self.white.abs_diff(other.white)
    }
}

impl fmt::Display for PinResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.black, self.white)
    }
}

/// One completed turn: the guess played and the feedback it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The guess.
    pub code: Code,
    /// Feedback from the oracle.
    pub result: PinResult,
}

impl GuessRecord {
    /// Create a record.
    #[must_use]
    pub fn new(code: Code, result: PinResult) -> Self {
        Self { code, result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        let code: Code = "1234".parse().unwrap();
        assert_eq!(code.values(), &[1, 2, 3, 4]);
        assert_eq!(code.to_string(), "1234");
    }

    #[test]
    fn test_parse_separated() {
        let code: Code = "1,2, 10 4".parse().unwrap();
        assert_eq!(code.values(), &[1, 2, 10, 4]);
        assert_eq!(code.to_string(), "1,2,10,4");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Code>().is_err());
        assert!("12a4".parse::<Code>().is_err());
        assert!("1,x,3".parse::<Code>().is_err());
        assert!("1,300".parse::<Code>().is_err());
    }

    #[test]
    fn test_parse_rejects_separators_only() {
        for input in [",", ", ,", " , , "] {
            assert!(matches!(
                input.parse::<Code>(),
                Err(ConfigError::InvalidCode(_))
            ));
        }
    }

    #[test]
    fn test_pin_distance() {
        let a = PinResult::new(2, 1);
        let b = PinResult::new(0, 2);
        assert_eq!(a.distance(&b), 3);
        assert_eq!(b.distance(&a), 3);
        assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn test_is_solved() {
        assert!(PinResult::new(4, 0).is_solved(4));
        assert!(!PinResult::new(3, 0).is_solved(4));
        assert!(!PinResult::new(4, 0).is_solved(5));
    }
}
