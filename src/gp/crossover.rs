//! Crossover operator.
//!
//! Uniform crossover: every locus independently takes its allele from one
//! of the two parents.

use crate::game::Code;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Configuration for crossover operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossoverConfig {
    /// Probability that a locus takes the second parent's allele.
    pub crossover_rate: f64,
}

impl Default for CrossoverConfig {
    fn default() -> Self {
        Self {
            crossover_rate: 0.5,
        }
    }
}

/// Combine two parents into a child.
///
/// The child has the parents' length and every allele comes from one of the
/// parents at the same locus. Parents are expected to have equal length;
/// extra loci on the longer parent are ignored.
#[must_use]
pub fn crossover<R: Rng>(
    parent1: &Code,
    parent2: &Code,
    config: &CrossoverConfig,
    rng: &mut R,
) -> Code {
    parent1
        .values()
        .iter()
        .zip(parent2.values())
        .map(|(&a, &b)| {
            if rng.gen_bool(config.crossover_rate) {
                b
            } else {
                a
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionConfig;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_child_takes_alleles_from_parents() {
        let session = SessionConfig::new(8, 6).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let config = CrossoverConfig::default();

        for _ in 0..200 {
            let p1 = session.random_code(&mut rng);
            let p2 = session.random_code(&mut rng);
            let child = crossover(&p1, &p2, &config, &mut rng);

            assert_eq!(child.len(), p1.len());
            for (i, allele) in child.values().iter().enumerate() {
                assert!(*allele == p1.values()[i] || *allele == p2.values()[i]);
            }
        }
    }

    #[test]
    fn test_extreme_rates_copy_one_parent() {
        let mut rng = SmallRng::seed_from_u64(7);
        let p1 = Code::from(vec![1, 1, 1, 1]);
        let p2 = Code::from(vec![2, 2, 2, 2]);

        let never = CrossoverConfig { crossover_rate: 0.0 };
        assert_eq!(crossover(&p1, &p2, &never, &mut rng), p1);

        let always = CrossoverConfig { crossover_rate: 1.0 };
        assert_eq!(crossover(&p1, &p2, &always, &mut rng), p2);
    }
}
