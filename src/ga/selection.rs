//! Selection strategies.
//!
//! Selection builds the mating pool for the next generation: it returns
//! `population_size` **owned** copies drawn from the evaluated population.
//! Because every copy is an independent `Solution`, an individual chosen into
//! several slots can later be mutated in one slot without affecting the
//! others.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::config::GaConfig;
use super::types::{Optimization, Solution};
use rand::seq::index;
use rand::Rng;

/// Chooses the individuals that seed the next generation.
pub trait SelectionOperator: Send + Sync {
    /// Returns exactly `config.population_size` independent copies.
    ///
    /// `population` is fully evaluated and must not be empty.
    fn select<R: Rng>(
        &self,
        population: &[Solution],
        config: &GaConfig,
        rng: &mut R,
    ) -> Vec<Solution>;
}

/// Tournament selection: pick `k` distinct individuals at random, keep the
/// best.
///
/// `k` is [`GaConfig::tournament_size`]. Individuals are drawn without
/// replacement within one tournament and with replacement across
/// tournaments, so `k == population_size` always returns the global best.
///
/// Higher `k` = stronger selection pressure.
/// - k=2: light pressure (good for diversity)
/// - k=3-5: moderate pressure (typical default)
/// - k>5: strong pressure (risk of premature convergence)
///
/// # Complexity
/// O(k) per tournament
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TournamentSelection;

impl SelectionOperator for TournamentSelection {
    fn select<R: Rng>(
        &self,
        population: &[Solution],
        config: &GaConfig,
        rng: &mut R,
    ) -> Vec<Solution> {
        (0..config.population_size)
            .map(|_| {
                let idx = tournament(population, config.tournament_size, config.optimization, rng);
                population[idx].clone()
            })
            .collect()
    }
}

/// Runs one tournament and returns the winner's index.
///
/// `k` is clamped to `1..=population.len()`.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(
    population: &[Solution],
    k: usize,
    optimization: Optimization,
    rng: &mut R,
) -> usize {
    let n = population.len();
    assert!(n > 0, "cannot select from empty population");
    let k = k.clamp(1, n);

    let mut contenders = index::sample(rng, n, k).into_iter();
    // k >= 1, so the sample is never empty
    let mut best_idx = contenders.next().unwrap_or(0);
    let mut best = population[best_idx]
        .fitness()
        .unwrap_or(optimization.worst());

    for idx in contenders {
        let f = population[idx].fitness().unwrap_or(optimization.worst());
        if optimization.is_better(f, best) {
            best = f;
            best_idx = idx;
        }
    }
    best_idx
}
