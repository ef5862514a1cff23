//! Main evolution loop.
//!
//! One call to [`evolve`] runs a fresh search: a random initial population
//! is bred generation after generation, offspring with fitness zero are
//! collected into an [`EliteSet`], and the set is returned once it is full
//! or the generation budget is spent.

use crate::error::ConfigError;
use crate::game::{Code, SessionConfig};
use crate::gp::crossover::{CrossoverConfig, crossover};
use crate::gp::elite::EliteSet;
use crate::gp::mutation::{MutationConfig, vary};
use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest population a search may use, including escalated retries.
pub const MAX_POPULATION: usize = 1 << 16;

/// Configuration for one search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Population size; also the elite set capacity.
    pub population_size: usize,
    /// Maximum number of generations.
    pub generations: usize,
    /// Crossover configuration.
    pub crossover: CrossoverConfig,
    /// Mutation configuration.
    pub mutation: MutationConfig,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 60,
            generations: 100,
            crossover: CrossoverConfig::default(),
            mutation: MutationConfig::default(),
        }
    }
}

impl EvolutionConfig {
    /// Check that sizes are positive and rates are probabilities.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::InvalidParameter(
                "population_size must be at least 1".to_string(),
            ));
        }
        if self.population_size > MAX_POPULATION {
            return Err(ConfigError::InvalidParameter(format!(
                "population_size must be at most {MAX_POPULATION}, got {}",
                self.population_size
            )));
        }
        if self.generations == 0 {
            return Err(ConfigError::InvalidParameter(
                "generations must be at least 1".to_string(),
            ));
        }
        let rates = [
            ("crossover_rate", self.crossover.crossover_rate),
            ("mutation_rate", self.mutation.mutation_rate),
            ("permutation_rate", self.mutation.permutation_rate),
        ];
        for (name, rate) in rates {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::InvalidParameter(format!(
                    "{name} must be within [0, 1], got {rate}"
                )));
            }
        }
        Ok(())
    }

    /// Budgets for retry `attempt` (0-based) after a fruitless search.
    ///
    /// Each attempt doubles the population, up to [`MAX_POPULATION`], and
    /// halves the generation budget, never going below one generation.
    #[must_use]
    pub fn escalated(&self, attempt: usize) -> Self {
        let shift = u32::try_from(attempt).unwrap_or(u32::MAX);
        let factor = 1usize.checked_shl(shift).unwrap_or(usize::MAX);
        Self {
            population_size: self.population_size.saturating_mul(factor).min(MAX_POPULATION),
            generations: self.generations.checked_shr(shift).unwrap_or(0).max(1),
            ..*self
        }
    }
}

/// Statistics for a single productive generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number, starting at 1.
    pub generation: usize,
    /// Offspring with fitness zero.
    pub eligible: usize,
    /// Elite set size after the generation.
    pub elite_size: usize,
}

/// Overall statistics from one search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics for every generation that produced eligible offspring.
    pub generations: Vec<GenerationStats>,
    /// Generations run in total.
    pub generations_run: usize,
    /// Generations that produced no eligible offspring.
    pub stagnant_generations: usize,
}

/// Run one search.
///
/// `fitness` scores a code against everything known so far; only codes
/// scoring exactly zero enter the elite set. The returned set holds at most
/// `config.population_size` codes and may be empty.
pub fn evolve<F, R>(
    session: &SessionConfig,
    config: &EvolutionConfig,
    fitness: F,
    rng: &mut R,
) -> (EliteSet, EvolutionStats)
where
    F: Fn(&Code) -> usize,
    R: Rng,
{
    let capacity = config.population_size;
    let mut population: Vec<Code> = (0..capacity).map(|_| session.random_code(rng)).collect();
    let mut elite = EliteSet::new();
    let mut stats = EvolutionStats::default();

    let mut generation = 1;
    while elite.len() < capacity && generation <= config.generations {
        let offspring = breed(&population, session, config, rng);
        let eligibles: Vec<Code> = offspring.into_iter().filter(|c| fitness(c) == 0).collect();

        if eligibles.is_empty() {
            // Stagnant generation: breed again from the same parents.
            stats.stagnant_generations += 1;
            generation += 1;
            continue;
        }

        admit(&mut elite, &eligibles, capacity, session, rng);

        trace!(
            "generation {generation}: {} eligible, elite {}",
            eligibles.len(),
            elite.len()
        );
        stats.generations.push(GenerationStats {
            generation,
            eligible: eligibles.len(),
            elite_size: elite.len(),
        });

        population = next_population(eligibles, capacity, session, rng);
        generation += 1;
    }

    stats.generations_run = generation - 1;
    debug!(
        "search finished after {} generations ({} stagnant), elite size {}",
        stats.generations_run,
        stats.stagnant_generations,
        elite.len()
    );

    (elite, stats)
}

/// Add a generation's eligible offspring to the elite set.
///
/// An eligible already in the set is swapped out for a random code; the
/// second pass then appends it again at the tail. Insertion stops once the
/// set holds `capacity` codes.
fn admit<R: Rng>(
    elite: &mut EliteSet,
    eligibles: &[Code],
    capacity: usize,
    session: &SessionConfig,
    rng: &mut R,
) {
    for code in eligibles {
        if elite.remove(code) {
            elite.insert(session.random_code(rng));
        }
    }
    for code in eligibles {
        if elite.len() >= capacity {
            break;
        }
        elite.insert(code.clone());
    }
}

/// Parents of the next generation: the eligible offspring, padded with
/// random codes up to `capacity`.
fn next_population<R: Rng>(
    eligibles: Vec<Code>,
    capacity: usize,
    session: &SessionConfig,
    rng: &mut R,
) -> Vec<Code> {
    let mut population = eligibles;
    population.resize_with(capacity, || session.random_code(rng));
    population
}

/// Breed the offspring of one generation.
///
/// Member `i` is crossed with member `i + 1`; the last member has no partner
/// and is carried over unchanged.
fn breed<R: Rng>(
    population: &[Code],
    session: &SessionConfig,
    config: &EvolutionConfig,
    rng: &mut R,
) -> Vec<Code> {
    let mut offspring = Vec::with_capacity(population.len());
    for pair in population.windows(2) {
        let child = crossover(&pair[0], &pair[1], &config.crossover, rng);
        offspring.push(vary(child, session, &config.mutation, rng));
    }
    if let Some(last) = population.last() {
        offspring.push(last.clone());
    }
    offspring
}
