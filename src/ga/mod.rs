//! Genetic Algorithm framework.
//!
//! A generic GA engine built on trait-based abstractions. The caller
//! supplies a [`PopulationGenerator`], a [`FitnessFunction`] and an
//! [`OperatorPipeline`]; [`GaRunner`] drives the loop.
//!
//! # Core Traits
//!
//! - [`PopulationGenerator`]: creates the initial population
//! - [`FitnessFunction`]: scores one individual (closures work too)
//! - [`SelectionOperator`], [`CrossoverOperator`], [`MutationOperator`]:
//!   the pluggable genetic operators
//!
//! # Key Types
//!
//! - [`Solution`]: decision vector plus cached fitness
//! - [`GaConfig`]: algorithm parameters and problem-specific [`Extensions`]
//! - [`OperatorPipeline`]: selection → crossover → mutation → elitism
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best solution, termination reason and per-generation history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod fitness;
pub mod operators;
mod pipeline;
mod report;
mod runner;
mod selection;
mod stagnation;
mod types;

pub use config::{Extensions, GaConfig};
pub use fitness::{evaluate_population, FitnessFunction, PopulationGenerator, UniformGenerator};
pub use operators::{
    ConstantMutation, CrossoverOperator, MeanCrossover, MutationOperator, UniformCrossover,
    UniformMutation,
};
pub use pipeline::OperatorPipeline;
pub use report::{GaResult, GenerationStats, Termination};
pub use runner::GaRunner;
pub use selection::{tournament, SelectionOperator, TournamentSelection};
pub use stagnation::{Progress, StagnationTracker};
pub use types::{Bounds, Optimization, Solution};
