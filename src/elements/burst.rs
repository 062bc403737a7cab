// Copyright (c) 2024 Mike Tsao

use crate::{types::SampleRate, util::Rng};
use serde::{Deserialize, Serialize};

/// Supplies the initial contents of a string's delay line. Implementations
/// must be deterministic: the same arguments always produce the same samples.
pub trait BurstGenerator: Send + Sync + core::fmt::Debug {
    /// Returns exactly `num_samples` samples.
    fn generate(&self, num_samples: usize, sample_rate: SampleRate) -> Vec<f64>;
}

/// Uniform white noise in [-1.0, 1.0). The stream is seeded from the
/// generator's own seed together with the requested length and sample rate,
/// so strings of different pitch get different excitation, but asking again
/// for the same pitch reproduces it exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WhiteNoise {
    seed: u64,
}
impl Default for WhiteNoise {
    fn default() -> Self {
        Self::new_with_seed(Self::DEFAULT_SEED)
    }
}
impl WhiteNoise {
    /// The seed used by [WhiteNoise::default()].
    pub const DEFAULT_SEED: u64 = 0x0123_4567_89ab_cdef;

    /// A generator whose output depends on `seed`.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// A generator with a seed drawn from the OS. Each instance sounds a
    /// little different, but each is still deterministic for its lifetime.
    #[cfg(feature = "std")]
    pub fn new_random() -> anyhow::Result<Self> {
        Ok(Self::new_with_seed(Rng::generate_seed()? as u64))
    }

    /// This generator's seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn stream_seed(&self, num_samples: usize, sample_rate: SampleRate) -> u128 {
        (u128::from(self.seed) << 64) | (((num_samples as u128) << 32) ^ sample_rate.0 as u128)
    }
}
impl BurstGenerator for WhiteNoise {
    fn generate(&self, num_samples: usize, sample_rate: SampleRate) -> Vec<f64> {
        let mut rng = Rng::new_with_seed(self.stream_seed(num_samples, sample_rate));
        (0..num_samples).map(|_| rng.rand_bipolar()).collect()
    }
}
