//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → convergence check → selection →
//! crossover → mutation → elitism → evaluation → …

use super::config::GaConfig;
use super::fitness::{evaluate_population, FitnessFunction, PopulationGenerator};
use super::operators::{CrossoverOperator, MutationOperator};
use super::pipeline::OperatorPipeline;
use super::report::{GaResult, GenerationStats, Termination};
use super::selection::SelectionOperator;
use super::stagnation::{Progress, StagnationTracker};
use super::types::Solution;
use crate::error::GaError;
use crate::random::rng_from_seed;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let pipeline = OperatorPipeline::new(TournamentSelection, MeanCrossover::default(), mutation)
///     .with_elitism(true);
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&generator, &fitness, &pipeline, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// - [`GaError::Config`] if `config` fails validation (nothing runs).
    /// - [`GaError::Generator`] / [`GaError::Fitness`] if a callback fails;
    ///   the run is aborted, not retried.
    /// - [`GaError::PopulationSize`] if the generator returns the wrong number
    ///   of individuals.
    pub fn run<G, F, S, C, M>(
        generator: &G,
        fitness: &F,
        pipeline: &OperatorPipeline<S, C, M>,
        config: &GaConfig,
    ) -> Result<GaResult, GaError>
    where
        G: PopulationGenerator,
        F: FitnessFunction + ?Sized,
        S: SelectionOperator,
        C: CrossoverOperator,
        M: MutationOperator,
    {
        Self::run_with_cancel(generator, fitness, pipeline, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA will
    /// stop at the end of the current generation and return the best
    /// solution found so far.
    pub fn run_with_cancel<G, F, S, C, M>(
        generator: &G,
        fitness: &F,
        pipeline: &OperatorPipeline<S, C, M>,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, GaError>
    where
        G: PopulationGenerator,
        F: FitnessFunction + ?Sized,
        S: SelectionOperator,
        C: CrossoverOperator,
        M: MutationOperator,
    {
        config.validate()?;

        info!(
            population_size = config.population_size,
            num_iterations = config.num_iterations,
            optimization = %config.optimization,
            crossover_rate = config.crossover_rate,
            mutation_rate = config.mutation_rate,
            stagnation_limit = config.stagnation_limit,
            elitism = pipeline.elitism(),
            "starting genetic algorithm"
        );

        let started = Instant::now();
        let deadline = config.time_limit_ms.map(Duration::from_millis);
        let mut rng = rng_from_seed(config.seed);

        // 1. Initialize population
        let mut population = generator
            .generate(config, &mut rng)
            .map_err(GaError::Generator)?;
        if population.len() != config.population_size {
            return Err(GaError::PopulationSize {
                expected: config.population_size,
                actual: population.len(),
            });
        }

        let optimization = config.optimization;
        let mut tracker = StagnationTracker::new(optimization, config.stagnation_limit);
        let mut best: Option<(Solution, usize)> = None;
        let mut history = Vec::new();
        let mut evaluations = 0usize;
        let mut generation = 0usize;

        // 2. Evolutionary loop
        let termination = loop {
            // Evaluate
            evaluations += evaluate_population(fitness, &mut population, config)
                .map_err(|source| GaError::Fitness { generation, source })?;

            // Update best-so-far; the population is non-empty (validated size)
            let gen_best_idx = optimization.best_index(&population).unwrap_or(0);
            let gen_best = &population[gen_best_idx];
            let gen_best_fitness = gen_best.fitness().unwrap_or(optimization.worst());
            if tracker.observe(gen_best_fitness) == Progress::Improved {
                best = Some((gen_best.clone(), generation));
            }

            let best_so_far = tracker.best().unwrap_or(gen_best_fitness);
            let stats =
                GenerationStats::from_population(generation, &population, optimization, best_so_far);
            log_progress(config.verbose, &stats, tracker.counter());
            history.push(stats);

            generation += 1;

            // Convergence check
            if generation >= config.num_iterations {
                break Termination::MaxIterations;
            }
            if tracker.is_stagnant() {
                break Termination::Stagnation;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break Termination::Cancelled;
                }
            }
            if let Some(limit) = deadline {
                if started.elapsed() >= limit {
                    break Termination::TimeLimit;
                }
            }

            // Breed the next generation
            population = pipeline.next_generation(&population, config, &mut rng);
        };

        // At least one generation was evaluated, so `best` is set
        let (best, best_generation) = match best {
            Some(found) => found,
            None => (population[0].clone(), 0),
        };

        info!(
            ?termination,
            generations = generation,
            evaluations,
            best_fitness = best.fitness().unwrap_or(f64::NAN),
            best_generation,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "genetic algorithm finished"
        );

        Ok(GaResult::from_best(
            best,
            best_generation,
            evaluations,
            termination,
            history,
        ))
    }
}

fn log_progress(verbose: bool, stats: &GenerationStats, stagnation: usize) {
    if verbose {
        info!(
            generation = stats.generation,
            best_fitness = stats.best_fitness,
            mean_fitness = stats.mean_fitness,
            best_so_far = stats.best_so_far,
            stagnation,
            "generation complete"
        );
    } else {
        debug!(
            generation = stats.generation,
            best_fitness = stats.best_fitness,
            mean_fitness = stats.mean_fitness,
            best_so_far = stats.best_so_far,
            stagnation,
            "generation complete"
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
