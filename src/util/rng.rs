// Copyright (c) 2024 Mike Tsao

//! Provides a random-number generator for noise bursts.

#[cfg(feature = "std")]
use byteorder::{BigEndian, ByteOrder};
use delegate::delegate;

/// A pseudorandom number generator (PRNG) for applications such as
/// digital-audio libraries that don't require cryptographically secure random
/// numbers.
#[derive(Debug)]
pub struct Rng(oorandom::Rand64);
#[allow(missing_docs)]
impl Rng {
    /// Pass the same number to [Rng::new_with_seed()] to get the same stream
    /// back again. Good for reproducing a burst exactly.
    pub fn new_with_seed(seed: u128) -> Self {
        Self(oorandom::Rand64::new(seed))
    }

    /// Create a sufficiently high-quality random number that's suitable for
    /// [Rng].
    #[cfg(feature = "std")]
    pub fn generate_seed() -> anyhow::Result<u128> {
        let mut bytes = [0u8; 16];

        getrandom::getrandom(&mut bytes)?;
        Ok(BigEndian::read_u128(&bytes))
    }

    /// A value uniformly distributed in [-1.0, 1.0).
    pub fn rand_bipolar(&mut self) -> f64 {
        self.rand_float() * 2.0 - 1.0
    }

    delegate! {
        to self.0 {
            /// A value uniformly distributed in [0.0, 1.0).
            pub fn rand_float(&mut self) -> f64;
        }
    }
}
