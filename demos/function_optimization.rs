//! Maximizes `sin(x)·x²` on `[0, 12.55]`.
//!
//! Run with `RUST_LOG=spga=debug` to see every generation.

use spga::ga::{
    Bounds, GaConfig, GaRunner, MeanCrossover, OperatorPipeline, Solution, TournamentSelection,
    UniformGenerator, UniformMutation,
};
use spga::GaError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GaError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let bounds = Bounds::new(0.0, 12.55)?;

    // Points outside the interval score zero
    let fitness = move |s: &Solution, _: &GaConfig| {
        let x = s.genes()[0];
        if bounds.contains(x) {
            x.sin() * x * x
        } else {
            0.0
        }
    };

    let config = GaConfig::default()
        .with_population_size(100)
        .with_num_iterations(100)
        .with_mutation_rate(0.15)
        .with_crossover_rate(0.8)
        .with_stagnation_limit(20)
        .with_verbose(true);
    let pipeline = OperatorPipeline::new(
        TournamentSelection,
        MeanCrossover::default(),
        UniformMutation::new(bounds),
    )
    .with_elitism(true);

    let result = GaRunner::run(&UniformGenerator::new(1, bounds), &fitness, &pipeline, &config)?;

    println!("x         = {:.6}", result.best_solution[0]);
    println!("f(x)      = {:.6}", result.best_fitness);
    println!("found at  = generation {}", result.best_generation);
    println!("stopped   = {:?} after {} generations", result.termination, result.generations);
    Ok(())
}
