//! Process-wide random source used to pick retail markups.

use std::sync::Mutex;

use chrono::Utc;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

static GENERATOR: Lazy<RandomCostGenerator> = Lazy::new(RandomCostGenerator::initialize);

/// Draws a value uniformly from `[min, max]`.
pub trait CostSource {
    fn generate_random_cost(&self, min: f64, max: f64) -> f64;
}

/// Single seeded PRNG shared by the whole process.
///
/// Created lazily on first access and never dropped. The seed is the current
/// wall-clock time in whole seconds, taken exactly once.
#[derive(Debug)]
pub struct RandomCostGenerator {
    rng: Mutex<StdRng>,
    seed: u64,
    seed_initialized: bool,
}

impl RandomCostGenerator {
    /// The process instance. First call seeds it.
    pub fn instance() -> &'static RandomCostGenerator {
        &GENERATOR
    }

    fn initialize() -> Self {
        let seed = Utc::now().timestamp().max(0) as u64;
        tracing::debug!(seed, "random cost generator seeded");
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            seed,
            seed_initialized: true,
        }
    }

    pub fn is_seed_initialized(&self) -> bool {
        self.seed_initialized
    }

    /// Seed used at initialisation (seconds since the Unix epoch).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `[min, max]`. A degenerate range yields `min`.
    pub fn generate_random_cost(&self, min: f64, max: f64) -> f64 {
        debug_assert!(min <= max, "min ({min}) must not exceed max ({max})");
        if !(min < max) {
            return min;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(min..=max)
    }
}

impl CostSource for RandomCostGenerator {
    fn generate_random_cost(&self, min: f64, max: f64) -> f64 {
        RandomCostGenerator::generate_random_cost(self, min, max)
    }
}

impl<T: CostSource + ?Sized> CostSource for &T {
    fn generate_random_cost(&self, min: f64, max: f64) -> f64 {
        (**self).generate_random_cost(min, max)
    }
}
