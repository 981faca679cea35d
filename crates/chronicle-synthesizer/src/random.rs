//! Random-source adapters

use chronicle_domain::RandomSource;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Production randomness backed by the thread-local generator
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    /// Create a new thread-backed source
    pub fn new() -> Self {
        Self(rand::thread_rng())
    }
}

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Reproducible randomness for tests and `--seed`
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Create a source that yields the same sequence for the same seed
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
