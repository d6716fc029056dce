//! Random target selection
//!
//! Every slot is equally likely, empty ones included. The random source is
//! injectable so spins can be replayed from a seed.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::{Result, WheelError};

/// Pick a slot uniformly from `[0, segment_count)`
pub fn select_random_target<R: Rng + ?Sized>(rng: &mut R, segment_count: usize) -> Result<usize> {
    if segment_count == 0 {
        return Err(WheelError::InvalidSegmentCount);
    }
    Ok(rng.random_range(0..segment_count))
}

/// Random source owned by a wheel
#[derive(Debug, Clone)]
pub struct SpinRng {
    seed: Option<u64>,
    rng: Pcg32,
}

impl SpinRng {
    /// Deterministic stream for tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seeded from the system random source
    pub fn from_entropy() -> Self {
        Self {
            seed: None,
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    /// Seed this stream was created with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn select(&mut self, segment_count: usize) -> Result<usize> {
        select_random_target(&mut self.rng, segment_count)
    }
}

impl Default for SpinRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for SpinRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}
