//! Run results.
//!
//! Pure data: the runner assembles a [`GaResult`] once, at termination, from
//! its best-so-far state. Nothing here renders or prints.

use super::types::{Optimization, Solution};

/// Why a run stopped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// `num_iterations` generations were evaluated.
    MaxIterations,
    /// `stagnation_limit` consecutive generations without improvement.
    Stagnation,
    /// The cancellation flag was raised.
    Cancelled,
    /// The wall-clock time limit elapsed.
    TimeLimit,
}

/// Fitness summary of one evaluated generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,
    /// Best fitness in this generation.
    pub best_fitness: f64,
    /// Mean fitness of this generation.
    pub mean_fitness: f64,
    /// Worst fitness in this generation.
    pub worst_fitness: f64,
    /// Best fitness found up to and including this generation.
    pub best_so_far: f64,
}

impl GenerationStats {
    /// Summarizes an evaluated population.
    ///
    /// Unevaluated individuals count as the worst value for `optimization`.
    pub fn from_population(
        generation: usize,
        population: &[Solution],
        optimization: Optimization,
        best_so_far: f64,
    ) -> Self {
        let worst_possible = optimization.worst();
        let mut best = worst_possible;
        let mut worst = f64::NAN;
        let mut sum = 0.0;

        for ind in population {
            let f = ind.fitness().unwrap_or(worst_possible);
            if optimization.is_better(f, best) {
                best = f;
            }
            if worst.is_nan() || optimization.is_better(worst, f) {
                worst = f;
            }
            sum += f;
        }

        let mean_fitness = if population.is_empty() {
            f64::NAN
        } else {
            sum / population.len() as f64
        };

        Self {
            generation,
            best_fitness: best,
            mean_fitness,
            worst_fitness: worst,
            best_so_far,
        }
    }
}

/// Result of a GA run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// Decision vector of the best individual found during the whole run.
    pub best_solution: Vec<f64>,

    /// Fitness of [`best_solution`](Self::best_solution).
    pub best_fitness: f64,

    /// Generation in which the best individual was first found.
    pub best_generation: usize,

    /// Number of generations evaluated.
    pub generations: usize,

    /// Total number of fitness evaluations.
    pub evaluations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// One entry per evaluated generation.
    pub history: Vec<GenerationStats>,
}

impl GaResult {
    pub(crate) fn from_best(
        best: Solution,
        best_generation: usize,
        evaluations: usize,
        termination: Termination,
        history: Vec<GenerationStats>,
    ) -> Self {
        let best_fitness = best.fitness().unwrap_or(f64::NAN);
        Self {
            best_solution: best.into_genes(),
            best_fitness,
            best_generation,
            generations: history.len(),
            evaluations,
            termination,
            history,
        }
    }

    /// Best-so-far fitness after each generation, for external plotting.
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.history.iter().map(|s| s.best_so_far).collect()
    }

    /// Whether the run stopped early because the search stagnated.
    pub fn stagnated(&self) -> bool {
        self.termination == Termination::Stagnation
    }
}
