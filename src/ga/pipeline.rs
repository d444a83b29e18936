//! Operator pipeline: selection → crossover → mutation → elitism.
//!
//! [`OperatorPipeline`] statically composes one operator of each kind and
//! turns an evaluated population into the next (unevaluated) one.
//!
//! # Pairing and elitism policy
//!
//! - Crossover pairs consecutive selected individuals: `(0, 1)`, `(2, 3)`, …
//!   An odd trailing individual passes through without crossover.
//! - With elitism on, the best individual of the input population overwrites
//!   the **last** slot of the output, after mutation.

use super::config::GaConfig;
use super::operators::{CrossoverOperator, MutationOperator};
use super::selection::SelectionOperator;
use super::types::Solution;
use rand::Rng;

/// A composed set of genetic operators.
///
/// # Examples
///
/// ```
/// use spga::ga::{
///     Bounds, OperatorPipeline, TournamentSelection, UniformCrossover, UniformMutation,
/// };
///
/// let bounds = Bounds::new(-1.0, 1.0).unwrap();
/// let pipeline = OperatorPipeline::new(
///     TournamentSelection,
///     UniformCrossover::default(),
///     UniformMutation::new(bounds),
/// )
/// .with_elitism(true);
/// assert!(pipeline.elitism());
/// ```
#[derive(Debug, Clone)]
pub struct OperatorPipeline<S, C, M> {
    selection: S,
    crossover: C,
    mutation: M,
    elitism: bool,
}

impl<S, C, M> OperatorPipeline<S, C, M>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
{
    /// Composes the three operators. Elitism is off by default.
    pub fn new(selection: S, crossover: C, mutation: M) -> Self {
        Self {
            selection,
            crossover,
            mutation,
            elitism: false,
        }
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    pub fn elitism(&self) -> bool {
        self.elitism
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    pub fn crossover(&self) -> &C {
        &self.crossover
    }

    pub fn mutation(&self) -> &M {
        &self.mutation
    }

    /// Builds the next generation from an evaluated population.
    ///
    /// `population` is only read. The returned buffer is freshly allocated
    /// and has `config.population_size` individuals. Individuals changed by
    /// crossover or mutation come back unevaluated.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn next_generation<R: Rng>(
        &self,
        population: &[Solution],
        config: &GaConfig,
        rng: &mut R,
    ) -> Vec<Solution> {
        assert!(!population.is_empty(), "cannot breed from empty population");

        // 1. Selection (owned copies)
        let mut next = self.selection.select(population, config, rng);
        debug_assert_eq!(next.len(), config.population_size);

        // 2. Pairwise crossover
        for pair in next.chunks_exact_mut(2) {
            if rng.random_range(0.0..1.0) < config.crossover_rate {
                let (c1, c2) = self.crossover.crossover(&pair[0], &pair[1], config, rng);
                pair[0] = c1;
                pair[1] = c2;
            }
        }

        // 3. Mutation
        for ind in next.iter_mut() {
            if rng.random_range(0.0..1.0) < config.mutation_rate {
                self.mutation.mutate(ind, config, rng);
                ind.invalidate();
            }
        }

        // 4. Elitism
        if self.elitism {
            if let (Some(best), Some(slot)) =
                (config.optimization.best_of(population), next.last_mut())
            {
                *slot = best.clone();
            }
        }

        next
    }
}
