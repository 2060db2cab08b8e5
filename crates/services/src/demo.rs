//! Decorative percentages for the subject cards.
//!
//! These values are invented on the spot, never stored, and nothing reads
//! them back. Keep them out of any real scoring path.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct DemoProgress {
    rng: Mutex<StdRng>,
}

impl DemoProgress {
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic sequence for tests and screenshots.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// A fake percentage in `0..100`.
    #[must_use]
    pub fn percent(&self) -> u32 {
        match self.rng.lock() {
            Ok(mut rng) => rng.random_range(0..100),
            Err(poisoned) => poisoned.into_inner().random_range(0..100),
        }
    }
}

impl Default for DemoProgress {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_below_one_hundred() {
        let demo = DemoProgress::seeded(7);
        assert!((0..500).map(|_| demo.percent()).all(|p| p < 100));
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = DemoProgress::seeded(42);
        let b = DemoProgress::seeded(42);
        let left: Vec<u32> = (0..8).map(|_| a.percent()).collect();
        let right: Vec<u32> = (0..8).map(|_| b.percent()).collect();
        assert_eq!(left, right);
    }
}
