//! Error types.
//!
//! Configuration problems are reported before the evolutionary loop starts.
//! Failures raised by user callbacks are wrapped with the context the engine
//! knows about (which phase, which generation) and otherwise passed through
//! untouched: the original error stays reachable via
//! [`std::error::Error::source`].

use thiserror::Error;

/// Error type returned by user-supplied callbacks (generator, fitness).
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Invalid [`GaConfig`](crate::ga::GaConfig) parameter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    PopulationSize,

    #[error("num_iterations must be at least 1")]
    NumIterations,

    #[error("{name} must be within [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },

    #[error("stagnation_limit must be at least 1")]
    StagnationLimit,

    #[error("tournament_size must be within 1..={population_size}, got {size}")]
    TournamentSize { size: usize, population_size: usize },

    #[error("time_limit_ms must be positive or None")]
    TimeLimit,

    #[error("invalid bounds [{min}, {max}]")]
    Bounds { min: f64, max: f64 },

    #[error("unknown optimization direction `{0}` (expected `max` or `min`)")]
    UnknownOptimization(String),
}

/// Lookup failure in [`Extensions`](crate::ga::Extensions).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    #[error("missing extension `{0}`")]
    Missing(String),

    #[error("extension `{key}` is not a `{expected}`")]
    TypeMismatch { key: String, expected: &'static str },
}

/// Top-level error for a GA run.
#[derive(Debug, Error)]
pub enum GaError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("population generator failed: {0}")]
    Generator(#[source] CallbackError),

    #[error("fitness evaluation failed in generation {generation}: {source}")]
    Fitness {
        generation: usize,
        #[source]
        source: CallbackError,
    },

    #[error("population generator returned {actual} individuals, expected {expected}")]
    PopulationSize { expected: usize, actual: usize },
}
