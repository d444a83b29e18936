//! Fits a degree-9 polynomial to 13 points by minimizing mean absolute error.
//!
//! The data set travels to the fitness function through the config's
//! extension map.

use spga::ga::{
    Bounds, ConstantMutation, GaConfig, GaRunner, OperatorPipeline, Optimization, Solution,
    TournamentSelection, UniformCrossover, UniformGenerator,
};
use spga::GaError;
use tracing_subscriber::EnvFilter;

const DATA: [(f64, f64); 13] = [
    (-3.0, -329.24),
    (-2.5, -18.696777),
    (-2.0, 8.97),
    (-1.5, 0.072636719),
    (-1.0, -2.86),
    (-0.5, -1.8504492),
    (0.0, 0.25),
    (0.5, 5.3464648),
    (1.0, 27.12),
    (1.5, 136.69088),
    (2.0, 617.21),
    (2.5, 2366.1753),
    (3.0, 7788.22),
];

/// Evaluates `c[0] + c[1]·x + … + c[n]·xⁿ`.
fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

fn mean_absolute_error(s: &Solution, config: &GaConfig) -> f64 {
    let Some(data) = config.extensions.get::<Vec<(f64, f64)>>("data") else {
        return f64::INFINITY;
    };
    let total: f64 = data
        .iter()
        .map(|&(x, y)| (polynomial(s.genes(), x) - y).abs())
        .sum();
    total / data.len() as f64
}

fn main() -> Result<(), GaError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GaConfig::default()
        .with_population_size(100)
        .with_num_iterations(500)
        .with_optimization(Optimization::Minimize)
        .with_tournament_size(3)
        .with_mutation_rate(0.2)
        .with_crossover_rate(0.6)
        .with_stagnation_limit(100)
        .with_extension("data", DATA.to_vec());
    let pipeline = OperatorPipeline::new(
        TournamentSelection,
        UniformCrossover::default(),
        ConstantMutation::new(0.01),
    )
    .with_elitism(true);

    let generator = UniformGenerator::new(10, Bounds::new(-1.0, 1.0)?);
    let result = GaRunner::run(&generator, &mean_absolute_error, &pipeline, &config)?;

    println!("MAE = {:.6} ({:?})", result.best_fitness, result.termination);
    for (power, c) in result.best_solution.iter().enumerate() {
        println!("  c{power} = {c:+.6}");
    }
    for &(x, y) in &DATA {
        println!("  f({x:+.1}) = {:+12.4}  (target {y:+12.4})", polynomial(&result.best_solution, x));
    }
    Ok(())
}
