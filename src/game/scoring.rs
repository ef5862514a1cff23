//! Pin scoring: compares two codes and counts black and white pins.
//!
//! Black pins count slots where both codes agree. White pins count the
//! remaining color matches with multiset semantics: every slot of either
//! code takes part in at most one match, so duplicate colors are not
//! double counted.

use crate::error::ScoreError;
use crate::game::code::{Code, PinResult};
use crate::game::session::MAX_SLOTS;

/// Score `a` against `b`.
///
/// The result is symmetric: `score(a, b) == score(b, a)`.
///
/// # Errors
///
/// Returns [`ScoreError::LengthMismatch`] if the codes differ in length.
pub fn score(a: &Code, b: &Code) -> Result<PinResult, ScoreError> {
    if a.len() != b.len() {
        return Err(ScoreError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(score_values(a.values(), b.values()))
}

/// Score two equal-length color slices.
fn score_values(a: &[u8], b: &[u8]) -> PinResult {
    debug_assert_eq!(a.len(), b.len());

    // Codes longer than MAX_SLOTS never come out of a validated session,
    // but the scorer itself must still handle them.
    if a.len() > MAX_SLOTS {
        return score_values_heap(a, b);
    }
    let mut consumed_a = [false; MAX_SLOTS];
    let mut consumed_b = [false; MAX_SLOTS];

    let mut black = 0;
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        if x == y {
            black += 1;
            consumed_a[i] = true;
            consumed_b[i] = true;
        }
    }

    let mut white = 0;
    for (i, x) in a.iter().enumerate() {
        if consumed_a[i] {
            continue;
        }
        if let Some(j) = (0..b.len()).find(|&j| !consumed_b[j] && b[j] == *x) {
            consumed_b[j] = true;
            white += 1;
        }
    }

    PinResult { black, white }
}

/// Same algorithm with heap-allocated consumption marks.
fn score_values_heap(a: &[u8], b: &[u8]) -> PinResult {
    let mut consumed_b = vec![false; b.len()];
    let mut unmatched_a = Vec::with_capacity(a.len());

    let mut black = 0;
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        if x == y {
            black += 1;
            consumed_b[i] = true;
        } else {
            unmatched_a.push(*x);
        }
    }

    let mut white = 0;
    for x in unmatched_a {
        if let Some(j) = (0..b.len()).find(|&j| !consumed_b[j] && b[j] == x) {
            consumed_b[j] = true;
            white += 1;
        }
    }

    PinResult { black, white }
}
