//! Game layer for Mastermind-style codebreaking.
//!
//! - Session configuration (alphabet size, slot count)
//! - Codes and pin feedback
//! - Pin scoring
//! - Turn history
//! - The oracle that hides the secret

mod code;
mod history;
mod oracle;
mod scoring;
mod session;

pub use code::{Code, GuessRecord, PinResult};
pub use history::History;
pub use oracle::{Oracle, SecretOracle};
pub use scoring::score;
pub use session::{SessionConfig, MAX_SLOTS};
