//! Core value types: [`Solution`], [`Optimization`] and [`Bounds`].
//!
//! A [`Solution`] owns its decision vector. Cloning produces an independent
//! copy, which is what lets selection hand the same parent to several slots
//! without later mutation of one slot leaking into another.

use crate::error::ConfigError;
use rand::Rng;
use std::str::FromStr;

/// One candidate: a decision vector plus its cached fitness.
///
/// `fitness` is `None` until the individual has been evaluated, and is
/// cleared again by [`invalidate`](Solution::invalidate) whenever the genes
/// change in place.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    genes: Vec<f64>,
    fitness: Option<f64>,
}

impl Solution {
    /// Creates an unevaluated solution.
    pub fn new(genes: Vec<f64>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    /// Creates a solution with a known fitness.
    pub fn evaluated(genes: Vec<f64>, fitness: f64) -> Self {
        Self {
            genes,
            fitness: Some(fitness),
        }
    }

    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Mutable access to the genes.
    ///
    /// Callers that change genes through this must call
    /// [`invalidate`](Self::invalidate) afterwards; the pipeline does this
    /// for every mutated individual.
    pub fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.genes
    }

    pub fn into_genes(self) -> Vec<f64> {
        self.genes
    }

    pub fn dimension(&self) -> usize {
        self.genes.len()
    }

    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Drops the cached fitness.
    pub fn invalidate(&mut self) {
        self.fitness = None;
    }
}

impl From<Vec<f64>> for Solution {
    fn from(genes: Vec<f64>) -> Self {
        Self::new(genes)
    }
}

/// Optimization direction.
///
/// Parses from `"max"`/`"min"` (and the long forms `"maximize"`/`"minimize"`).
///
/// ```
/// use spga::ga::Optimization;
///
/// let dir: Optimization = "min".parse().unwrap();
/// assert!(dir.is_better(1.0, 2.0));
/// assert!(!dir.is_better(2.0, 2.0));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Optimization {
    /// Higher fitness is better.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "max", alias = "maximize"))]
    Maximize,
    /// Lower fitness is better.
    #[cfg_attr(feature = "serde", serde(rename = "min", alias = "minimize"))]
    Minimize,
}

impl Optimization {
    /// Returns `true` if `candidate` is strictly better than `incumbent`.
    ///
    /// NaN is worse than every number; two NaNs never improve on each other.
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        if candidate.is_nan() {
            return false;
        }
        if incumbent.is_nan() {
            return true;
        }
        match self {
            Optimization::Maximize => candidate > incumbent,
            Optimization::Minimize => candidate < incumbent,
        }
    }

    /// The worst possible fitness in this direction.
    ///
    /// Used in place of a missing fitness, so unevaluated individuals never
    /// win a comparison.
    pub fn worst(self) -> f64 {
        match self {
            Optimization::Maximize => f64::NEG_INFINITY,
            Optimization::Minimize => f64::INFINITY,
        }
    }

    /// Index of the best individual, first one wins on ties.
    ///
    /// Returns `None` for an empty slice.
    pub fn best_index(self, population: &[Solution]) -> Option<usize> {
        let mut iter = population.iter().enumerate();
        let (mut best_idx, first) = iter.next()?;
        let mut best = first.fitness().unwrap_or(self.worst());
        for (idx, ind) in iter {
            let f = ind.fitness().unwrap_or(self.worst());
            if self.is_better(f, best) {
                best = f;
                best_idx = idx;
            }
        }
        Some(best_idx)
    }

    /// The best individual, first one wins on ties.
    pub fn best_of(self, population: &[Solution]) -> Option<&Solution> {
        self.best_index(population).map(|i| &population[i])
    }
}

impl FromStr for Optimization {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" | "maximize" => Ok(Optimization::Maximize),
            "min" | "minimize" => Ok(Optimization::Minimize),
            _ => Err(ConfigError::UnknownOptimization(s.to_string())),
        }
    }
}

impl std::fmt::Display for Optimization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Optimization::Maximize => f.write_str("max"),
            Optimization::Minimize => f.write_str("min"),
        }
    }
}

/// Closed real interval `[min, max]` used as a search space.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    /// Creates a new interval.
    ///
    /// Fails if either end is not finite or `min > max`. A degenerate
    /// interval (`min == max`) is allowed.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ConfigError::Bounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Draws a value uniformly from the interval.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.min == self.max {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_solution_lifecycle() {
        let mut s = Solution::new(vec![1.0, 2.0]);
        assert!(!s.is_evaluated());
        assert_eq!(s.dimension(), 2);

        s.set_fitness(3.5);
        assert_eq!(s.fitness(), Some(3.5));

        s.genes_mut()[0] = 4.0;
        s.invalidate();
        assert_eq!(s.fitness(), None);
        assert_eq!(s.genes(), &[4.0, 2.0]);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Solution::evaluated(vec![1.0, 2.0, 3.0], 6.0);
        let mut copy = original.clone();
        copy.genes_mut()[1] = -2.0;
        assert_eq!(original.genes(), &[1.0, 2.0, 3.0]);
        assert_eq!(copy.genes(), &[1.0, -2.0, 3.0]);
    }

    #[test]
    fn test_is_better_directions() {
        assert!(Optimization::Maximize.is_better(2.0, 1.0));
        assert!(!Optimization::Maximize.is_better(1.0, 2.0));
        assert!(Optimization::Minimize.is_better(1.0, 2.0));
        assert!(!Optimization::Minimize.is_better(2.0, 1.0));
    }

    #[test]
    fn test_equal_is_not_better() {
        assert!(!Optimization::Maximize.is_better(5.0, 5.0));
        assert!(!Optimization::Minimize.is_better(5.0, 5.0));
    }

    #[test]
    fn test_nan_always_loses() {
        for dir in [Optimization::Maximize, Optimization::Minimize] {
            assert!(!dir.is_better(f64::NAN, 0.0));
            assert!(dir.is_better(0.0, f64::NAN));
            assert!(!dir.is_better(f64::NAN, f64::NAN));
        }
    }

    #[test]
    fn test_worst_never_wins() {
        assert!(Optimization::Maximize.is_better(-1e300, Optimization::Maximize.worst()));
        assert!(Optimization::Minimize.is_better(1e300, Optimization::Minimize.worst()));
    }

    #[test]
    fn test_best_index() {
        let pop = vec![
            Solution::evaluated(vec![0.0], 3.0),
            Solution::evaluated(vec![1.0], 7.0),
            Solution::evaluated(vec![2.0], 1.0),
            Solution::evaluated(vec![3.0], 7.0),
        ];
        assert_eq!(Optimization::Maximize.best_index(&pop), Some(1));
        assert_eq!(Optimization::Minimize.best_index(&pop), Some(2));
        assert_eq!(Optimization::Maximize.best_index(&[]), None);
    }

    #[test]
    fn test_best_index_skips_unevaluated() {
        let pop = vec![
            Solution::new(vec![0.0]),
            Solution::evaluated(vec![1.0], -50.0),
        ];
        assert_eq!(Optimization::Maximize.best_index(&pop), Some(1));
        assert_eq!(Optimization::Minimize.best_index(&pop), Some(1));
    }

    #[test]
    fn test_parse_optimization() {
        assert_eq!("max".parse::<Optimization>(), Ok(Optimization::Maximize));
        assert_eq!("MIN".parse::<Optimization>(), Ok(Optimization::Minimize));
        assert_eq!(
            "minimize".parse::<Optimization>(),
            Ok(Optimization::Minimize)
        );
        assert!(matches!(
            "sideways".parse::<Optimization>(),
            Err(ConfigError::UnknownOptimization(_))
        ));
        assert_eq!(Optimization::Minimize.to_string(), "min");
    }

    #[test]
    fn test_bounds_validation() {
        assert!(Bounds::new(0.0, 12.55).is_ok());
        assert!(Bounds::new(1.0, 1.0).is_ok());
        assert!(Bounds::new(2.0, 1.0).is_err());
        assert!(Bounds::new(f64::NAN, 1.0).is_err());
        assert!(Bounds::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_bounds_sample_within_range() {
        let bounds = Bounds::new(-1.0, 1.0).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            assert!(bounds.contains(bounds.sample(&mut rng)));
        }
    }

    #[test]
    fn test_degenerate_bounds_sample() {
        let bounds = Bounds::new(3.0, 3.0).unwrap();
        let mut rng = create_rng(1);
        assert_eq!(bounds.sample(&mut rng), 3.0);
        assert_eq!(bounds.clamp(10.0), 3.0);
        assert_eq!(bounds.width(), 0.0);
    }
}
