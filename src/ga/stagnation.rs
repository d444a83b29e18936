//! Stagnation tracking.
//!
//! Counts consecutive generations in which the best-so-far fitness did not
//! strictly improve. Equal fitness is not an improvement.

use super::types::Optimization;

/// Outcome of observing one generation's best fitness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Strictly better than every previous generation; counter reset.
    Improved,
    /// No strict improvement; counter incremented.
    Stalled,
}

/// Tracks the best-so-far fitness and the stagnation counter.
///
/// ```
/// use spga::ga::{Optimization, Progress, StagnationTracker};
///
/// let mut tracker = StagnationTracker::new(Optimization::Minimize, 2);
/// assert_eq!(tracker.observe(5.0), Progress::Improved);
/// assert_eq!(tracker.observe(5.0), Progress::Stalled);
/// assert!(!tracker.is_stagnant());
/// assert_eq!(tracker.observe(6.0), Progress::Stalled);
/// assert!(tracker.is_stagnant());
/// ```
#[derive(Debug, Clone)]
pub struct StagnationTracker {
    optimization: Optimization,
    limit: usize,
    counter: usize,
    best: Option<f64>,
}

impl StagnationTracker {
    pub fn new(optimization: Optimization, limit: usize) -> Self {
        Self {
            optimization,
            limit,
            counter: 0,
            best: None,
        }
    }

    /// Records a generation's best fitness.
    ///
    /// The first observation is always an improvement.
    pub fn observe(&mut self, fitness: f64) -> Progress {
        let improved = match self.best {
            None => true,
            Some(best) => self.optimization.is_better(fitness, best),
        };
        if improved {
            self.best = Some(fitness);
            self.counter = 0;
            Progress::Improved
        } else {
            self.counter += 1;
            Progress::Stalled
        }
    }

    /// Consecutive non-improving generations so far.
    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Best fitness observed so far.
    pub fn best(&self) -> Option<f64> {
        self.best
    }

    /// `true` once the counter has reached the limit.
    pub fn is_stagnant(&self) -> bool {
        self.counter >= self.limit
    }
}
