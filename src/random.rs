//! Random number generator construction.
//!
//! Every run owns a single generator created here, so a fixed seed makes the
//! whole evolutionary trajectory reproducible (as long as evaluation is
//! sequential or the fitness function is pure).

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from OS entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
