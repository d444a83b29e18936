//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop,
//! plus an open [`Extensions`] map for problem-specific data (datasets,
//! constants) that callbacks need at evaluation time.

use super::types::Optimization;
use crate::error::{ConfigError, ExtensionError};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use spga::ga::{GaConfig, Optimization};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.num_iterations, 100);
/// assert_eq!(config.optimization, Optimization::Maximize);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use spga::ga::{GaConfig, Optimization};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_optimization(Optimization::Minimize)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.2)
///     .with_extension("data", vec![(0.0, 1.0), (1.0, 2.0)]);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Maximum number of generations to evaluate.
    pub num_iterations: usize,

    /// Whether higher or lower fitness is better.
    pub optimization: Optimization,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is skipped, both parents pass through unchanged.
    pub crossover_rate: f64,

    /// Probability of mutating an individual (0.0–1.0).
    pub mutation_rate: f64,

    /// Consecutive generations without strict improvement of the
    /// best-so-far fitness before the run stops.
    pub stagnation_limit: usize,

    /// Number of distinct individuals competing in each tournament.
    pub tournament_size: usize,

    /// Emit per-generation progress at `info` level instead of `debug`.
    pub verbose: bool,

    /// Evaluate fitness across rayon worker threads.
    ///
    /// Only takes effect with the `parallel` cargo feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked after each generation, so a run may exceed it by up to one
    /// generation's worth of work.
    pub time_limit_ms: Option<u64>,

    /// Problem-specific values handed to callbacks.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub extensions: Extensions,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            num_iterations: 100,
            optimization: Optimization::Maximize,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            stagnation_limit: 20,
            tournament_size: 3,
            verbose: false,
            parallel: false,
            seed: None,
            time_limit_ms: None,
            extensions: Extensions::default(),
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    /// Sets the optimization direction.
    pub fn with_optimization(mut self, optimization: Optimization) -> Self {
        self.optimization = optimization;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the stagnation limit.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables per-generation progress logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Attaches a problem-specific value under `key`.
    pub fn with_extension<T: Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
        self.extensions.insert(key, value);
        self
    }

    /// Validates the configuration.
    ///
    /// Called by the runner before the first generation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::PopulationSize);
        }
        if self.num_iterations == 0 {
            return Err(ConfigError::NumIterations);
        }
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.mutation_rate)?;
        if self.stagnation_limit == 0 {
            return Err(ConfigError::StagnationLimit);
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentSize {
                size: self.tournament_size,
                population_size: self.population_size,
            });
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::TimeLimit);
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails the range check too
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::Probability { name, value });
    }
    Ok(())
}

/// Open, typed map of problem-specific values.
///
/// Values are stored behind `Arc`, so cloning a [`GaConfig`] is cheap and
/// never copies a dataset.
///
/// ```
/// use spga::ga::Extensions;
///
/// let mut ext = Extensions::default();
/// ext.insert("data", vec![1.0_f64, 2.0, 3.0]);
///
/// let data: &Vec<f64> = ext.require("data").unwrap();
/// assert_eq!(data.len(), 3);
/// assert!(ext.get::<String>("data").is_none());
/// ```
#[derive(Clone, Default)]
pub struct Extensions {
    map: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl Extensions {
    /// Inserts `value` under `key`, replacing any previous value.
    pub fn insert<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.map.insert(key.into(), Arc::new(value));
    }

    /// Returns the value under `key` if present and of type `T`.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.map.get(key).and_then(|v| v.downcast_ref::<T>())
    }

    /// Like [`get`](Self::get), but reports why the lookup failed.
    pub fn require<T: Any>(&self, key: &str) -> Result<&T, ExtensionError> {
        let value = self
            .map
            .get(key)
            .ok_or_else(|| ExtensionError::Missing(key.to_string()))?;
        value
            .downcast_ref::<T>()
            .ok_or_else(|| ExtensionError::TypeMismatch {
                key: key.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.map.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Extensions").field("keys", &keys).finish()
    }
}
