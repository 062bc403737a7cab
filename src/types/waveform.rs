// Copyright (c) 2024 Mike Tsao

use derive_more::Deref;
use kahan::KahanSum;
use std::sync::Arc;

/// An immutable run of mono samples at the system sample rate. Cloning a
/// [Waveform] shares the underlying samples rather than copying them.
#[derive(Clone, Debug, Deref, PartialEq)]
pub struct Waveform(Arc<[f64]>);
impl Default for Waveform {
    fn default() -> Self {
        Self::from(Vec::default())
    }
}
impl Waveform {
    /// The longest buffer synthesis will allocate, in samples. That's 2^28,
    /// a little over 100 minutes at 44.1 kHz. Delay lines are held to the same
    /// limit.
    pub const MAX_LEN: usize = 1 << 28;

    /// The samples, in order.
    pub fn samples(&self) -> &[f64] {
        &self.0
    }

    /// The largest absolute sample value, or zero for an empty waveform.
    pub fn peak(&self) -> f64 {
        self.0.iter().fold(0.0, |peak, s| peak.max(s.abs()))
    }

    /// The arithmetic mean of the samples, or zero for an empty waveform.
    pub fn mean(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        let mut sum = KahanSum::new();
        for sample in self.0.iter() {
            sum += *sample;
        }
        sum.sum() / self.0.len() as f64
    }

    /// True if both waveforms are backed by the same allocation.
    pub fn shares_samples_with(&self, other: &Waveform) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl From<Vec<f64>> for Waveform {
    fn from(value: Vec<f64>) -> Self {
        Self(value.into())
    }
}
impl From<&[f64]> for Waveform {
    fn from(value: &[f64]) -> Self {
        Self(value.into())
    }
}
impl FromIterator<f64> for Waveform {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
