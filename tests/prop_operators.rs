//! Property-based tests for the genetic operators.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use mastergen::gp::{CrossoverConfig, crossover, mutate, permute};
use mastergen::{Code, SessionConfig};

fn session_and_parents() -> impl Strategy<Value = (SessionConfig, Code, Code)> {
    (1u8..=9, 1usize..=12).prop_flat_map(|(colors, slots)| {
        let session = SessionConfig::new(colors, slots).unwrap();
        (
            Just(session),
            prop::collection::vec(1u8..=colors, slots).prop_map(Code::from),
            prop::collection::vec(1u8..=colors, slots).prop_map(Code::from),
        )
    })
}

fn sorted(code: &Code) -> Vec<u8> {
    let mut values = code.values().to_vec();
    values.sort_unstable();
    values
}

proptest! {
    /// Crossover keeps the length and takes each allele from a parent.
    #[test]
    fn prop_crossover_alleles_from_parents(
        (_, p1, p2) in session_and_parents(),
        rate in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let child = crossover(&p1, &p2, &CrossoverConfig { crossover_rate: rate }, &mut rng);

        prop_assert_eq!(child.len(), p1.len());
        for i in 0..child.len() {
            let allele = child.values()[i];
            prop_assert!(allele == p1.values()[i] || allele == p2.values()[i]);
        }
    }

    /// Mutation changes at most one locus and stays within the alphabet.
    #[test]
    fn prop_mutation_single_locus(
        (session, code, _) in session_and_parents(),
        seed in any::<u64>()
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mutated = mutate(code.clone(), &session, &mut rng);

        let changed = code
            .values()
            .iter()
            .zip(mutated.values())
            .filter(|(a, b)| a != b)
            .count();
        prop_assert!(changed <= 1);
        prop_assert!(session.validate(&mutated).is_ok());
    }

    /// Permutation only rearranges alleles.
    #[test]
    fn prop_permutation_preserves_multiset(
        (_, code, _) in session_and_parents(),
        rate in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let permuted = permute(code.clone(), rate, &mut rng);

        prop_assert_eq!(permuted.len(), code.len());
        prop_assert_eq!(sorted(&permuted), sorted(&code));
    }
}
