// Copyright (c) 2024 Mike Tsao

//! Handles wall-clock and digital-audio time.

use crate::types::{ParameterType, Waveform};
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use synonym::Synonym;

/// Represents the [seconds](https://en.wikipedia.org/wiki/Second) unit of time.
#[derive(Synonym, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Seconds(pub f64);
impl Seconds {
    /// Zero seconds.
    pub const fn zero() -> Seconds {
        Seconds(0.0)
    }

    /// The number of whole samples this duration spans at the given rate,
    /// rounded to the nearest sample (ties to even). Negative durations have
    /// no samples; callers that care check [Seconds::is_valid_delay()] or
    /// [Seconds::is_valid_duration()] first.
    pub fn get_num_samples(&self, sample_rate: SampleRate) -> usize {
        (self.0 * sample_rate.0 as ParameterType).round_ties_even() as usize
    }

    /// Like [Seconds::get_num_samples()], but `None` if the count would be
    /// negative, not finite, or longer than [Waveform::MAX_LEN].
    pub fn checked_num_samples(&self, sample_rate: SampleRate) -> Option<usize> {
        let samples = (self.0 * sample_rate.0 as ParameterType).round_ties_even();
        (0.0..=Waveform::MAX_LEN as ParameterType)
            .contains(&samples)
            .then_some(samples as usize)
    }

    /// True if this is usable as a gap between events: finite and not
    /// negative. Zero is fine.
    pub fn is_valid_delay(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// True if this is usable as the length of a sound: finite and positive.
    pub fn is_valid_duration(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

/// Samples per second. Always a positive integer; cannot be zero.
#[derive(Synonym, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
#[synonym(skip(Default))]
#[serde(rename_all = "kebab-case")]
pub struct SampleRate(#[derivative(Default(value = "44100"))] pub usize);
#[allow(missing_docs)]
impl SampleRate {
    pub const DEFAULT_SAMPLE_RATE: usize = 44100;
    pub const DEFAULT: SampleRate = SampleRate::new(Self::DEFAULT_SAMPLE_RATE);

    pub const fn new(value: usize) -> Self {
        if value != 0 {
            Self(value)
        } else {
            Self(Self::DEFAULT_SAMPLE_RATE)
        }
    }
}
impl From<SampleRate> for f64 {
    fn from(value: SampleRate) -> Self {
        value.0 as f64
    }
}
impl From<SampleRate> for u32 {
    fn from(value: SampleRate) -> Self {
        value.0 as u32
    }
}
