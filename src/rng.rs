//! Seeded random source handed to the generator.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// A `StdRng` that remembers the seed it was built from.
///
/// Every run logs its seed so that a batch can be reproduced exactly by
/// passing the same value back in.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    /// Creates a generator from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), seed }
    }

    /// Creates a generator from a seed drawn from the thread-local RNG.
    #[must_use]
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// Uses `seed` when given, otherwise picks a fresh one.
    #[must_use]
    pub fn from_optional(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_random, Self::new)
    }

    /// The seed this generator was built from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for SessionRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst);
    }
}
