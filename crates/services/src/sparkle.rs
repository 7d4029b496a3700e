use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Probability that one render of the main view plays the snow effect.
pub const SPARKLE_PROBABILITY: f64 = 0.08;

/// Decorative-effect roll behind a seedable RNG so renders stay
/// deterministic under test.
#[derive(Debug)]
pub struct Sparkle {
    rng: Mutex<StdRng>,
}

impl Sparkle {
    /// A sparkle source seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// A deterministic sparkle source for tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Roll once; `true` means play the effect.
    #[must_use]
    pub fn roll(&self) -> bool {
        self.rng
            .lock()
            .map(|mut rng| rng.random_bool(SPARKLE_PROBABILITY))
            .unwrap_or(false)
    }
}

impl Default for Sparkle {
    fn default() -> Self {
        Self::new()
    }
}
