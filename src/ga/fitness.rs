//! Fitness evaluation and population generation.
//!
//! Both are user callbacks. The engine never interprets what a callback
//! does: a fitness function may return a sentinel such as `0.0` for an
//! infeasible point, and the engine simply compares it like any other value.

use super::config::GaConfig;
use super::types::{Bounds, Solution};
use crate::error::CallbackError;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the fitness of one individual.
///
/// Any infallible closure `Fn(&Solution, &GaConfig) -> f64` implements this
/// trait. Implement it on your own type when evaluation can fail; the error
/// is propagated to the caller of the runner unchanged.
///
/// # Thread Safety
///
/// Must be `Send + Sync` because the population may be evaluated in
/// parallel (feature `parallel`).
pub trait FitnessFunction: Send + Sync {
    /// Evaluates `solution`. Higher or lower is better depending on
    /// [`GaConfig::optimization`].
    fn evaluate(&self, solution: &Solution, config: &GaConfig) -> Result<f64, CallbackError>;
}

impl<F> FitnessFunction for F
where
    F: Fn(&Solution, &GaConfig) -> f64 + Send + Sync,
{
    fn evaluate(&self, solution: &Solution, config: &GaConfig) -> Result<f64, CallbackError> {
        Ok(self(solution, config))
    }
}

/// Creates the initial population.
///
/// Called exactly once per run. Must return `config.population_size`
/// individuals, all with the same dimension.
pub trait PopulationGenerator: Send + Sync {
    fn generate<R: Rng>(
        &self,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<Vec<Solution>, CallbackError>;
}

/// Draws every gene uniformly from a single interval.
#[derive(Debug, Clone, Copy)]
pub struct UniformGenerator {
    dimension: usize,
    bounds: Bounds,
}

impl UniformGenerator {
    pub fn new(dimension: usize, bounds: Bounds) -> Self {
        Self { dimension, bounds }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl PopulationGenerator for UniformGenerator {
    fn generate<R: Rng>(
        &self,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<Vec<Solution>, CallbackError> {
        Ok((0..config.population_size)
            .map(|_| {
                let genes = (0..self.dimension)
                    .map(|_| self.bounds.sample(rng))
                    .collect();
                Solution::new(genes)
            })
            .collect())
    }
}

/// Evaluates every individual and stores its fitness.
///
/// The whole population is evaluated, with no caching across generations.
/// Returns the number of evaluations performed. Stops at the first
/// callback error.
pub fn evaluate_population<F: FitnessFunction + ?Sized>(
    fitness: &F,
    population: &mut [Solution],
    config: &GaConfig,
) -> Result<usize, CallbackError> {
    #[cfg(feature = "parallel")]
    {
        if config.parallel {
            population.par_iter_mut().try_for_each(|ind| {
                let f = fitness.evaluate(ind, config)?;
                ind.set_fitness(f);
                Ok::<(), CallbackError>(())
            })?;
            return Ok(population.len());
        }
    }

    for ind in population.iter_mut() {
        let f = fitness.evaluate(ind, config)?;
        ind.set_fitness(f);
    }
    Ok(population.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    struct FailsAbove(f64);

    impl FitnessFunction for FailsAbove {
        fn evaluate(&self, s: &Solution, _: &GaConfig) -> Result<f64, CallbackError> {
            let x = s.genes()[0];
            if x > self.0 {
                return Err(format!("{x} is out of range").into());
            }
            Ok(x)
        }
    }

    #[test]
    fn test_uniform_generator_shape() {
        let bounds = Bounds::new(-1.0, 1.0).unwrap();
        let generator = UniformGenerator::new(10, bounds);
        let config = GaConfig::default().with_population_size(37);
        let mut rng = create_rng(42);

        let pop = generator.generate(&config, &mut rng).unwrap();
        assert_eq!(pop.len(), 37);
        for ind in &pop {
            assert_eq!(ind.dimension(), 10);
            assert!(!ind.is_evaluated());
            assert!(ind.genes().iter().all(|&g| bounds.contains(g)));
        }
    }

    #[test]
    fn test_every_individual_evaluated() {
        let mut pop: Vec<Solution> = (0..20).map(|i| Solution::new(vec![i as f64])).collect();
        let config = GaConfig::default();
        let square = |s: &Solution, _: &GaConfig| s.genes()[0] * s.genes()[0];

        let n = evaluate_population(&square, &mut pop, &config).unwrap();
        assert_eq!(n, 20);
        for (i, ind) in pop.iter().enumerate() {
            assert_eq!(ind.fitness(), Some((i * i) as f64));
        }
    }

    #[test]
    fn test_stale_fitness_is_overwritten() {
        let mut pop = vec![Solution::evaluated(vec![2.0], 999.0)];
        let config = GaConfig::default();
        let identity = |s: &Solution, _: &GaConfig| s.genes()[0];
        evaluate_population(&identity, &mut pop, &config).unwrap();
        assert_eq!(pop[0].fitness(), Some(2.0));
    }

    #[test]
    fn test_closure_reads_extensions() {
        let config = GaConfig::default().with_extension("offset", 10.0_f64);
        let shifted = |s: &Solution, c: &GaConfig| {
            s.genes()[0] + c.extensions.get::<f64>("offset").copied().unwrap_or(0.0)
        };
        let mut pop = vec![Solution::new(vec![1.5])];
        evaluate_population(&shifted, &mut pop, &config).unwrap();
        assert_eq!(pop[0].fitness(), Some(11.5));
    }

    #[test]
    fn test_callback_error_propagates() {
        let mut pop: Vec<Solution> = (0..5).map(|i| Solution::new(vec![i as f64])).collect();
        let config = GaConfig::default();
        let err = evaluate_population(&FailsAbove(2.0), &mut pop, &config).unwrap_err();
        assert_eq!(err.to_string(), "3 is out of range");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let config = GaConfig::default().with_parallel(true);
        let cube = |s: &Solution, _: &GaConfig| s.genes()[0].powi(3);
        let mut par: Vec<Solution> = (0..500).map(|i| Solution::new(vec![i as f64 * 0.1])).collect();
        let mut seq = par.clone();

        evaluate_population(&cube, &mut par, &config).unwrap();
        evaluate_population(&cube, &mut seq, &config.clone().with_parallel(false)).unwrap();
        assert_eq!(par, seq);
    }
}
