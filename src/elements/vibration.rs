// Copyright (c) 2024 Mike Tsao

use crate::{
    elements::BurstGenerator,
    error::{SynthesisError, SynthesisResult},
    types::{Damping, FrequencyHz, ParameterType, SampleRate, Seconds, Waveform},
    util::{normalize, remove_dc},
};

/// Returns the number of delay-line cells that produce the given pitch,
/// rounded to the nearest whole sample (ties to even). Non-integer ratios are
/// only approximately in tune. Returns `None` when the pitch needs fewer than
/// one cell or more than [Waveform::MAX_LEN].
pub fn delay_line_length(frequency: FrequencyHz, sample_rate: SampleRate) -> Option<usize> {
    let len = (sample_rate.0 as ParameterType / frequency.0).round_ties_even();
    (1.0..=Waveform::MAX_LEN as ParameterType)
        .contains(&len)
        .then_some(len as usize)
}

/// A Karplus-Strong string. The ring buffer holds one period of the string's
/// motion; each step emits the cell under the cursor, then replaces it with
/// the damped average of itself and its neighbor before moving on.
///
/// Memory use is the length of the ring, regardless of how many samples are
/// requested.
#[derive(Debug)]
pub struct StringVibration {
    ring: Vec<f64>,
    cursor: usize,
    damping: Damping,
    remaining: usize,
}
impl StringVibration {
    /// Starts a string from the given excitation, which becomes the ring
    /// buffer. The iterator yields exactly `num_samples` samples, or none if
    /// the excitation is empty.
    pub fn new_with(excitation: Vec<f64>, damping: Damping, num_samples: usize) -> Self {
        let remaining = if excitation.is_empty() { 0 } else { num_samples };
        Self {
            ring: excitation,
            cursor: 0,
            damping,
            remaining,
        }
    }

    /// The number of cells in the delay line.
    pub fn ring_len(&self) -> usize {
        self.ring.len()
    }
}
impl Iterator for StringVibration {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.ring[self.cursor];
        let next_index = (self.cursor + 1) % self.ring.len();
        self.ring[self.cursor] = self.damping.value() * (current + self.ring[next_index]);
        self.cursor = next_index;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl ExactSizeIterator for StringVibration {}

/// Synthesizes one string at `frequency` for `duration`, then removes its DC
/// offset and normalizes it to a peak of 1.0.
///
/// Fails if `damping` is outside (0, 0.5], if `frequency` isn't positive and
/// finite or is too high for a one-cell delay line, if `duration` isn't
/// positive and finite, or if `burst_generator` returns the wrong number of
/// samples.
pub fn vibrate(
    burst_generator: &dyn BurstGenerator,
    frequency: FrequencyHz,
    duration: Seconds,
    damping: ParameterType,
    sample_rate: SampleRate,
) -> SynthesisResult<Waveform> {
    let damping = Damping::new(damping)?;
    if !frequency.is_audible_candidate() {
        return Err(SynthesisError::InvalidFrequency(frequency.0));
    }
    if !duration.is_valid_duration() {
        return Err(SynthesisError::InvalidDuration(duration.0));
    }
    let ring_len = delay_line_length(frequency, sample_rate)
        .ok_or(SynthesisError::InvalidFrequency(frequency.0))?;
    let num_samples = duration
        .checked_num_samples(sample_rate)
        .ok_or(SynthesisError::InvalidDuration(duration.0))?;

    let excitation = burst_generator.generate(ring_len, sample_rate);
    if excitation.len() != ring_len {
        return Err(SynthesisError::BurstLength {
            expected: ring_len,
            actual: excitation.len(),
        });
    }

    let raw: Vec<f64> = StringVibration::new_with(excitation, damping, num_samples).collect();
    Ok(normalize(&remove_dc(&raw)).into())
}
