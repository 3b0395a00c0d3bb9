//! Entropy-backed RNG oracle for live sessions.

use game_core::RngOracle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// [`RngOracle`] drawing from a standard PRNG.
///
/// Seeding makes a single build reproducible, which is handy when chasing a
/// bug; no cross-version guarantee is made.
#[derive(Clone, Debug)]
pub struct EntropyRng {
    rng: StdRng,
}

impl EntropyRng {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngOracle for EntropyRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len.max(1))
    }

    fn roll_percent(&mut self) -> u32 {
        self.rng.gen_range(0..=100)
    }
}
