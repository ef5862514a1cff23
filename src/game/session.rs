//! Session configuration: alphabet size and slot count.
//!
//! A session is fixed once it starts. Every component that needs to know
//! how codes look receives a [`SessionConfig`] by reference instead of
//! reading global state.

use crate::error::ConfigError;
use crate::game::code::Code;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maximum number of slots in a code.
pub const MAX_SLOTS: usize = 64;

/// Immutable description of the game being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionConfig {
    colors: u8,
    slots: usize,
}

impl SessionConfig {
    /// Create a session with `colors` colors and `slots` slots per code.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the slot count
    /// exceeds [`MAX_SLOTS`].
    pub fn new(colors: u8, slots: usize) -> Result<Self, ConfigError> {
        if colors == 0 {
            return Err(ConfigError::NoColors);
        }
        if slots == 0 {
            return Err(ConfigError::NoSlots);
        }
        if slots > MAX_SLOTS {
            return Err(ConfigError::TooManySlots {
                slots,
                max: MAX_SLOTS,
            });
        }
        Ok(Self { colors, slots })
    }

    /// The classic game: six colors, four slots.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            colors: 6,
            slots: 4,
        }
    }

    /// Alphabet size.
    #[must_use]
    pub fn colors(&self) -> u8 {
        self.colors
    }

    /// Number of slots per code.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Build a code from raw values, checking it against this session.
    ///
    /// # Errors
    ///
    /// Returns an error if the length or any color is out of range.
    pub fn code(&self, values: Vec<u8>) -> Result<Code, ConfigError> {
        let code = Code::from(values);
        self.validate(&code)?;
        Ok(code)
    }

    /// Check that a code has the session's length and alphabet.
    ///
    /// # Errors
    ///
    /// Returns an error if the length or any color is out of range.
    pub fn validate(&self, code: &Code) -> Result<(), ConfigError> {
        if code.len() != self.slots {
            return Err(ConfigError::WrongLength {
                expected: self.slots,
                actual: code.len(),
            });
        }
        if let Some((slot, &color)) = code
            .values()
            .iter()
            .enumerate()
            .find(|(_, c)| **c == 0 || **c > self.colors)
        {
            return Err(ConfigError::ColorOutOfRange {
                slot,
                color,
                colors: self.colors,
            });
        }
        Ok(())
    }

    /// Draw a uniformly random color.
    pub fn random_color<R: Rng>(&self, rng: &mut R) -> u8 {
        rng.gen_range(1..=self.colors)
    }

    /// Draw a uniformly random code.
    pub fn random_code<R: Rng>(&self, rng: &mut R) -> Code {
        (0..self.slots).map(|_| self.random_color(rng)).collect()
    }

    /// The fixed opening guess.
    ///
    /// The first half of the slots hold color 1 and the rest color 2, so the
    /// classic game opens with `1122`. With a single color every slot is 1.
    #[must_use]
    pub fn opening_code(&self) -> Code {
        let second = self.colors.min(2);
        let half = self.slots / 2;
        (0..self.slots)
            .map(|i| if i < half { 1 } else { second })
            .collect()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::classic()
    }
}
