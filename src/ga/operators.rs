//! Real-valued crossover and mutation operators.
//!
//! # Crossover Operators
//!
//! - [`MeanCrossover`]: arithmetic blend of both parents
//! - [`UniformCrossover`]: per-gene exchange
//!
//! # Mutation Operators
//!
//! - [`UniformMutation`]: redraw one gene from the search bounds
//! - [`ConstantMutation`]: shift one gene by a fixed step
//!
//! Operators must preserve the decision-vector length. The engine does not
//! check this at runtime.
//!
//! # References
//!
//! - Michalewicz (1996), *Genetic Algorithms + Data Structures = Evolution
//!   Programs*, ch. 6 (arithmetic crossover, uniform mutation)
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use super::config::GaConfig;
use super::types::{Bounds, Solution};
use rand::Rng;

// ============================================================================
// Traits
// ============================================================================

/// Combines two parents into two children.
pub trait CrossoverOperator: Send + Sync {
    /// Returns two unevaluated children with the parents' dimension.
    fn crossover<R: Rng>(
        &self,
        parent1: &Solution,
        parent2: &Solution,
        config: &GaConfig,
        rng: &mut R,
    ) -> (Solution, Solution);
}

/// Perturbs one individual in place.
///
/// The pipeline decides *whether* to mutate (with
/// [`GaConfig::mutation_rate`]) and clears the fitness afterwards.
pub trait MutationOperator: Send + Sync {
    fn mutate<R: Rng>(&self, individual: &mut Solution, config: &GaConfig, rng: &mut R);
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Arithmetic (mean) crossover.
///
/// For every coordinate:
///
/// ```text
/// child1 = α·p1 + (1 − α)·p2
/// child2 = (1 − α)·p1 + α·p2
/// ```
///
/// The default `α = 0.5` gives both children the coordinate-wise mean.
///
/// # Complexity
/// O(n) time, O(n) space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanCrossover {
    alpha: f64,
}

impl MeanCrossover {
    /// Creates a blend with weight `alpha` on the first parent.
    ///
    /// `alpha` is clamped to `[0, 1]`.
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for MeanCrossover {
    fn default() -> Self {
        Self { alpha: 0.5 }
    }
}

impl CrossoverOperator for MeanCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &Solution,
        parent2: &Solution,
        _config: &GaConfig,
        _rng: &mut R,
    ) -> (Solution, Solution) {
        let a = self.alpha;
        let (c1, c2): (Vec<f64>, Vec<f64>) = parent1
            .genes()
            .iter()
            .zip(parent2.genes())
            .map(|(&x, &y)| (a * x + (1.0 - a) * y, (1.0 - a) * x + a * y))
            .unzip();
        (Solution::new(c1), Solution::new(c2))
    }
}

/// Uniform crossover.
///
/// For every coordinate, with probability `swap_probability` child1 takes
/// parent2's gene and child2 takes parent1's; otherwise each child keeps its
/// own parent's gene. The default probability is 0.5.
///
/// # Complexity
/// O(n) time, O(n) space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformCrossover {
    swap_probability: f64,
}

impl UniformCrossover {
    /// `swap_probability` is clamped to `[0, 1]`.
    pub fn new(swap_probability: f64) -> Self {
        Self {
            swap_probability: swap_probability.clamp(0.0, 1.0),
        }
    }
}

impl Default for UniformCrossover {
    fn default() -> Self {
        Self {
            swap_probability: 0.5,
        }
    }
}

impl CrossoverOperator for UniformCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &Solution,
        parent2: &Solution,
        _config: &GaConfig,
        rng: &mut R,
    ) -> (Solution, Solution) {
        let (c1, c2): (Vec<f64>, Vec<f64>) = parent1
            .genes()
            .iter()
            .zip(parent2.genes())
            .map(|(&x, &y)| {
                if rng.random_bool(self.swap_probability) {
                    (y, x)
                } else {
                    (x, y)
                }
            })
            .unzip();
        (Solution::new(c1), Solution::new(c2))
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Uniform mutation: replace one random gene with a fresh draw from
/// `bounds`.
///
/// # Complexity
/// O(1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformMutation {
    bounds: Bounds,
}

impl UniformMutation {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

impl MutationOperator for UniformMutation {
    fn mutate<R: Rng>(&self, individual: &mut Solution, _config: &GaConfig, rng: &mut R) {
        let n = individual.dimension();
        if n == 0 {
            return;
        }
        let idx = rng.random_range(0..n);
        individual.genes_mut()[idx] = self.bounds.sample(rng);
    }
}

/// Constant-step mutation: add `±step` to one random gene, sign chosen
/// uniformly.
///
/// The result is not clamped; an out-of-range point simply scores whatever
/// the fitness function says it scores.
///
/// # Complexity
/// O(1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantMutation {
    step: f64,
}

impl ConstantMutation {
    pub fn new(step: f64) -> Self {
        Self { step: step.abs() }
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for ConstantMutation {
    fn default() -> Self {
        Self { step: 0.01 }
    }
}

impl MutationOperator for ConstantMutation {
    fn mutate<R: Rng>(&self, individual: &mut Solution, _config: &GaConfig, rng: &mut R) {
        let n = individual.dimension();
        if n == 0 {
            return;
        }
        let idx = rng.random_range(0..n);
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        individual.genes_mut()[idx] += sign * self.step;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn parents() -> (Solution, Solution) {
        (
            Solution::evaluated(vec![0.0, 2.0, 4.0, 6.0], 1.0),
            Solution::evaluated(vec![10.0, 8.0, 6.0, 4.0], 2.0),
        )
    }

    // ---- Mean crossover ----

    #[test]
    fn test_mean_crossover_default_is_average() {
        let (p1, p2) = parents();
        let mut rng = create_rng(42);
        let (c1, c2) = MeanCrossover::default().crossover(&p1, &p2, &GaConfig::default(), &mut rng);
        assert_eq!(c1.genes(), &[5.0, 5.0, 5.0, 5.0]);
        assert_eq!(c2.genes(), c1.genes());
        assert!(!c1.is_evaluated());
        assert!(!c2.is_evaluated());
    }

    #[test]
    fn test_mean_crossover_weighted() {
        let (p1, p2) = parents();
        let mut rng = create_rng(42);
        let (c1, c2) = MeanCrossover::new(0.75).crossover(&p1, &p2, &GaConfig::default(), &mut rng);
        assert_eq!(c1.genes(), &[2.5, 3.5, 4.5, 5.5]);
        assert_eq!(c2.genes(), &[7.5, 6.5, 5.5, 4.5]);
    }

    #[test]
    fn test_mean_crossover_alpha_one_copies_parents() {
        let (p1, p2) = parents();
        let mut rng = create_rng(42);
        let (c1, c2) = MeanCrossover::new(3.0).crossover(&p1, &p2, &GaConfig::default(), &mut rng);
        assert_eq!(c1.genes(), p1.genes());
        assert_eq!(c2.genes(), p2.genes());
    }

    // ---- Uniform crossover ----

    #[test]
    fn test_uniform_crossover_exchanges_genes() {
        let (p1, p2) = parents();
        let mut rng = create_rng(42);
        let config = GaConfig::default();

        let mut saw_mix = false;
        for _ in 0..50 {
            let (c1, c2) = UniformCrossover::default().crossover(&p1, &p2, &config, &mut rng);
            assert_eq!(c1.dimension(), 4);
            assert_eq!(c2.dimension(), 4);
            for i in 0..4 {
                let pair = (c1.genes()[i], c2.genes()[i]);
                let kept = (p1.genes()[i], p2.genes()[i]);
                let swapped = (p2.genes()[i], p1.genes()[i]);
                assert!(pair == kept || pair == swapped);
            }
            if c1.genes() != p1.genes() && c1.genes() != p2.genes() {
                saw_mix = true;
            }
        }
        assert!(saw_mix, "uniform crossover should mix genes eventually");
    }

    #[test]
    fn test_uniform_crossover_extremes() {
        let (p1, p2) = parents();
        let mut rng = create_rng(1);
        let config = GaConfig::default();

        let (c1, c2) = UniformCrossover::new(0.0).crossover(&p1, &p2, &config, &mut rng);
        assert_eq!((c1.genes(), c2.genes()), (p1.genes(), p2.genes()));

        let (c1, c2) = UniformCrossover::new(1.0).crossover(&p1, &p2, &config, &mut rng);
        assert_eq!((c1.genes(), c2.genes()), (p2.genes(), p1.genes()));
    }

    // ---- Uniform mutation ----

    #[test]
    fn test_uniform_mutation_changes_one_gene_within_bounds() {
        let bounds = Bounds::new(100.0, 200.0).unwrap();
        let mut rng = create_rng(42);
        let original = Solution::new(vec![0.0; 5]);

        for _ in 0..100 {
            let mut ind = original.clone();
            UniformMutation::new(bounds).mutate(&mut ind, &GaConfig::default(), &mut rng);
            let changed: Vec<f64> = ind.genes().iter().copied().filter(|&g| g != 0.0).collect();
            assert_eq!(changed.len(), 1);
            assert!(bounds.contains(changed[0]));
        }
    }

    #[test]
    fn test_mutation_on_empty_vector_is_noop() {
        let mut rng = create_rng(42);
        let mut ind = Solution::new(vec![]);
        let bounds = Bounds::new(0.0, 1.0).unwrap();
        UniformMutation::new(bounds).mutate(&mut ind, &GaConfig::default(), &mut rng);
        ConstantMutation::default().mutate(&mut ind, &GaConfig::default(), &mut rng);
        assert_eq!(ind.dimension(), 0);
    }

    // ---- Constant mutation ----

    #[test]
    fn test_constant_mutation_step() {
        let mut rng = create_rng(42);
        let mutation = ConstantMutation::new(0.25);
        let (mut ups, mut downs) = (0, 0);

        for _ in 0..200 {
            let mut ind = Solution::new(vec![1.0, 1.0, 1.0]);
            mutation.mutate(&mut ind, &GaConfig::default(), &mut rng);
            let moved: Vec<f64> = ind.genes().iter().copied().filter(|&g| g != 1.0).collect();
            assert_eq!(moved.len(), 1);
            if moved[0] == 1.25 {
                ups += 1;
            } else {
                assert_eq!(moved[0], 0.75);
                downs += 1;
            }
        }
        assert!(ups > 50 && downs > 50, "sign should be balanced: {ups} up, {downs} down");
    }

    #[test]
    fn test_constant_mutation_default_step() {
        assert_eq!(ConstantMutation::default().step(), 0.01);
        assert_eq!(ConstantMutation::new(-0.5).step(), 0.5);
    }

    // ---- Integration: crossover + mutation pipeline ----

    #[test]
    fn test_operators_preserve_dimension() {
        let mut rng = create_rng(42);
        let bounds = Bounds::new(-1.0, 1.0).unwrap();
        let config = GaConfig::default();
        let p1 = Solution::new((0..20).map(|i| i as f64 / 20.0).collect());
        let p2 = Solution::new((0..20).map(|i| -(i as f64) / 20.0).collect());

        for _ in 0..50 {
            let (mut c1, mut c2) = UniformCrossover::default().crossover(&p1, &p2, &config, &mut rng);
            UniformMutation::new(bounds).mutate(&mut c1, &config, &mut rng);
            ConstantMutation::default().mutate(&mut c2, &config, &mut rng);
            let (c3, _) = MeanCrossover::default().crossover(&c1, &c2, &config, &mut rng);

            assert_eq!(c1.dimension(), 20);
            assert_eq!(c2.dimension(), 20);
            assert_eq!(c3.dimension(), 20);
        }
    }
}
