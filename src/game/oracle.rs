//! The oracle: the only component that knows the secret.

use crate::error::ScoreError;
use crate::game::code::{Code, PinResult};
use crate::game::scoring::score;

/// Answers guesses with pin feedback.
pub trait Oracle {
    /// Score `guess` against the hidden secret.
    ///
    /// # Errors
    ///
    /// Returns an error if the guess cannot be compared with the secret.
    fn play(&self, guess: &Code) -> Result<PinResult, ScoreError>;
}

/// An oracle holding a fixed secret.
#[derive(Debug, Clone)]
pub struct SecretOracle {
    secret: Code,
}

impl SecretOracle {
    /// Create an oracle for `secret`.
    #[must_use]
    pub fn new(secret: Code) -> Self {
        Self { secret }
    }

    /// The secret. Only reporting code should look at this.
    #[must_use]
    pub fn secret(&self) -> &Code {
        &self.secret
    }
}

impl Oracle for SecretOracle {
    fn play(&self, guess: &Code) -> Result<PinResult, ScoreError> {
        score(guess, &self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_oracle() {
        let oracle = SecretOracle::new(Code::from(vec![1, 2, 3, 4]));
        assert_eq!(
            oracle.play(&Code::from(vec![1, 1, 2, 2])).unwrap(),
            PinResult::new(1, 1)
        );
        assert_eq!(
            oracle.play(&Code::from(vec![1, 2, 3, 4])).unwrap(),
            PinResult::new(4, 0)
        );
        assert!(oracle.play(&Code::from(vec![1, 2])).is_err());
    }
}
