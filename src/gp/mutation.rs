//! Mutation and permutation operators.
//!
//! Mutation overwrites one random locus with a fresh color. Permutation
//! only reorders alleles, so the multiset of colors is unchanged.

use crate::game::{Code, SessionConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Configuration for mutation operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationConfig {
    /// Probability of applying [`mutate`] to a crossover child.
    pub mutation_rate: f64,
    /// Per-locus probability of a swap in [`permute`].
    pub permutation_rate: f64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.03,
            permutation_rate: 0.03,
        }
    }
}

/// Overwrite one uniformly chosen locus with a uniformly drawn color.
///
/// At most one locus differs afterwards; the new color may equal the old one.
#[must_use]
pub fn mutate<R: Rng>(code: Code, session: &SessionConfig, rng: &mut R) -> Code {
    let mut values = code.into_values();
    if values.is_empty() {
        return Code::from(values);
    }
    let locus = rng.gen_range(0..values.len());
    values[locus] = session.random_color(rng);
    Code::from(values)
}

/// Swap each locus, with probability `rate`, with a uniformly chosen locus.
///
/// Swapping a locus with itself is a no-op.
#[must_use]
pub fn permute<R: Rng>(code: Code, rate: f64, rng: &mut R) -> Code {
    let mut values = code.into_values();
    let len = values.len();
    for i in 0..len {
        if rng.gen_bool(rate) {
            let j = rng.gen_range(0..len);
            values.swap(i, j);
        }
    }
    Code::from(values)
}

/// Apply the per-child operator pipeline after crossover: optional
/// mutation, then permutation.
#[must_use]
pub fn vary<R: Rng>(
    child: Code,
    session: &SessionConfig,
    config: &MutationConfig,
    rng: &mut R,
) -> Code {
    let child = if rng.gen_bool(config.mutation_rate) {
        mutate(child, session, rng)
    } else {
        child
    };
    permute(child, config.permutation_rate, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn sorted(code: &Code) -> Vec<u8> {
        let mut values = code.values().to_vec();
        values.sort_unstable();
        values
    }

    #[test]
    fn test_mutate_touches_one_locus() {
        let session = SessionConfig::new(9, 8).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..500 {
            let original = session.random_code(&mut rng);
            let mutated = mutate(original.clone(), &session, &mut rng);
            let changed = original
                .values()
                .iter()
                .zip(mutated.values())
                .filter(|(a, b)| a != b)
                .count();
            assert!(changed <= 1);
            assert!(session.validate(&mutated).is_ok());
        }
    }

    #[test]
    fn test_mutate_eventually_changes_something() {
        let session = SessionConfig::classic();
        let mut rng = SmallRng::seed_from_u64(3);
        let original = Code::from(vec![1, 1, 1, 1]);
        let changed = (0..50).any(|_| mutate(original.clone(), &session, &mut rng) != original);
        assert!(changed);
    }

    #[test]
    fn test_permute_preserves_multiset() {
        let session = SessionConfig::new(6, 10).unwrap();
        let mut rng = SmallRng::seed_from_u64(123);

        for _ in 0..500 {
            let original = session.random_code(&mut rng);
            let permuted = permute(original.clone(), 0.5, &mut rng);
            assert_eq!(sorted(&original), sorted(&permuted));
        }
    }

    #[test]
    fn test_permute_zero_rate_is_identity() {
        let mut rng = SmallRng::seed_from_u64(9);
        let code = Code::from(vec![1, 2, 3, 4]);
        assert_eq!(permute(code.clone(), 0.0, &mut rng), code);
    }

    #[test]
    fn test_vary_keeps_session_shape() {
        let session = SessionConfig::classic();
        let config = MutationConfig {
            mutation_rate: 1.0,
            permutation_rate: 1.0,
        };
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..100 {
            let child = vary(session.random_code(&mut rng), &session, &config, &mut rng);
            assert!(session.validate(&child).is_ok());
        }
    }
}
