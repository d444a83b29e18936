//! Simple, pluggable genetic algorithm engine.
//!
//! `spga` evolves a population of real-valued decision vectors. The caller
//! supplies the problem-specific pieces (a population generator, a fitness
//! function and the selection/crossover/mutation operators) and receives
//! the best solution found.
//!
//! - **Both directions**: maximize or minimize, chosen per run.
//! - **Elitism**: optionally carries the best individual into the next
//!   generation unchanged.
//! - **Stagnation control**: stops early after a configurable number of
//!   generations without strict improvement.
//! - **Built-in operators**: tournament selection, mean and uniform
//!   crossover, uniform and constant-step mutation.
//!
//! # Example
//!
//! ```
//! use spga::ga::{
//!     Bounds, GaConfig, GaRunner, MeanCrossover, OperatorPipeline, Solution,
//!     TournamentSelection, UniformGenerator, UniformMutation,
//! };
//!
//! let bounds = Bounds::new(0.0, 12.55).unwrap();
//! let generator = UniformGenerator::new(1, bounds);
//! let fitness = |s: &Solution, _: &GaConfig| s.genes()[0].sin() * s.genes()[0].powi(2);
//! let pipeline = OperatorPipeline::new(
//!     TournamentSelection,
//!     MeanCrossover::default(),
//!     UniformMutation::new(bounds),
//! )
//! .with_elitism(true);
//!
//! let config = GaConfig::default().with_num_iterations(20).with_seed(42);
//! let result = GaRunner::run(&generator, &fitness, &pipeline, &config).unwrap();
//! assert_eq!(result.best_solution.len(), 1);
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::{CallbackError, ConfigError, ExtensionError, GaError};
