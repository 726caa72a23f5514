

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use tracing::info;


/// Shared RNG handle. Seeded mode makes template sampling and mock data reproducible.
pub struct RandomSource {
    rng: Mutex<StdRng>,
}

impl RandomSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                info!(seed, "Using deterministic RNG");
                Self::seeded(seed)
            }
            None => Self::from_entropy(),
        }
    }

    /// Picks `min(amount, items.len())` distinct elements.
    pub fn sample<'a, T>(&self, items: &'a [T], amount: usize) -> Vec<&'a T> {
        let mut rng = self.rng.lock();
        items.choose_multiple(&mut *rng, amount).collect()
    }

    pub fn int_in(&self, range: RangeInclusive<u32>) -> u32 {
        self.rng.lock().random_range(range)
    }

    pub fn float_in(&self, range: RangeInclusive<f64>) -> f64 {
        self.rng.lock().random_range(range)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl std::fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomSource").finish_non_exhaustive()
    }
}
