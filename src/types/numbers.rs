// Copyright (c) 2024 Mike Tsao

//! Numeric types used throughout the system.

use crate::error::{SynthesisError, SynthesisResult};
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use synonym::Synonym;

/// Use [ParameterType] in places where a real number is needed.
pub type ParameterType = f64;

/// Frequency in [Hertz](https://en.wikipedia.org/wiki/Hertz). Any positive
/// number. 440 = A4.
#[derive(Synonym, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FrequencyHz(pub f64);
impl FrequencyHz {
    /// Returns true if this frequency could be the pitch of a real string.
    pub fn is_audible_candidate(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Returns this frequency moved by the given number of equal-tempered
    /// semitones. Negative values lower the pitch.
    pub fn transposed(&self, semitones: ParameterType) -> Self {
        Self(self.0 * 2.0f64.powf(semitones / 12.0))
    }
}

/// The gain applied each time a sample travels around the delay line. Always
/// in (0, 0.5]; 0.5 is the classic Karplus-Strong averaging filter, and
/// smaller values make the string die away faster.
#[derive(Clone, Copy, Debug, Derivative, PartialEq, PartialOrd, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(try_from = "ParameterType", into = "ParameterType")]
pub struct Damping(#[derivative(Default(value = "0.5"))] ParameterType);
#[allow(missing_docs)]
impl Damping {
    /// The largest stable value.
    pub const MAX_VALUE: ParameterType = 0.5;

    pub fn new(value: ParameterType) -> SynthesisResult<Self> {
        // The negated comparison also rejects NaN.
        if !(value > 0.0 && value <= Self::MAX_VALUE) {
            return Err(SynthesisError::InvalidDamping(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> ParameterType {
        self.0
    }
}
impl TryFrom<ParameterType> for Damping {
    type Error = SynthesisError;

    fn try_from(value: ParameterType) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
impl From<Damping> for ParameterType {
    fn from(value: Damping) -> Self {
        value.0
    }
}
