// Copyright (c) 2024 Mike Tsao

use crate::{
    elements::{overlay, vibrate, BurstGenerator, Instrument, WhiteNoise},
    error::SynthesisResult,
    synthesis::MemoTable,
    types::{
        Chord, Direction, FrequencyHz, ParameterType, SampleRate, Seconds, Velocity, Waveform,
    },
};
use log::debug;

// Floats are keyed by their bit patterns, so only identical values hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct VibrationKey {
    frequency: u64,
    duration: u64,
    damping: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct StrumKey {
    chord: Chord,
    direction: Direction,
    delay: u64,
    vibration: u64,
}

/// Renders strums of an [Instrument].
///
/// Both single strings and whole strums are remembered, so asking for the
/// same thing twice returns the same [Waveform] without recomputing it. The
/// two tables are independent, and each computes a given key at most once
/// even under concurrent use.
#[derive(Debug)]
pub struct Synthesizer {
    instrument: Box<dyn Instrument>,
    burst_generator: Box<dyn BurstGenerator>,
    sample_rate: SampleRate,

    vibrations: MemoTable<VibrationKey, Waveform>,
    strums: MemoTable<StrumKey, Waveform>,
}
impl Synthesizer {
    /// A synthesizer with [WhiteNoise] excitation at the default sample rate.
    pub fn new(instrument: impl Instrument + 'static) -> Self {
        Self::new_with_sample_rate(instrument, SampleRate::DEFAULT)
    }

    #[allow(missing_docs)]
    pub fn new_with_sample_rate(
        instrument: impl Instrument + 'static,
        sample_rate: SampleRate,
    ) -> Self {
        Self::new_with(
            Box::new(instrument),
            Box::new(WhiteNoise::default()),
            sample_rate,
        )
    }

    /// Full control over the collaborators.
    pub fn new_with(
        instrument: Box<dyn Instrument>,
        burst_generator: Box<dyn BurstGenerator>,
        sample_rate: SampleRate,
    ) -> Self {
        Self {
            instrument,
            burst_generator,
            sample_rate,
            vibrations: Default::default(),
            strums: Default::default(),
        }
    }

    #[allow(missing_docs)]
    pub fn instrument(&self) -> &dyn Instrument {
        self.instrument.as_ref()
    }

    #[allow(missing_docs)]
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// One string at `frequency` ringing for `duration`, DC-free and
    /// normalized to a peak of 1.0. See [vibrate()](crate::elements::vibrate())
    /// for the failure cases. Pass [Damping::default()](crate::types::Damping)
    /// `.value()` for the classic 0.5.
    pub fn vibrate(
        &self,
        frequency: FrequencyHz,
        duration: Seconds,
        damping: ParameterType,
    ) -> SynthesisResult<Waveform> {
        let key = VibrationKey {
            frequency: frequency.0.to_bits(),
            duration: duration.0.to_bits(),
            damping: damping.to_bits(),
        };
        self.vibrations.get_or_try_insert_with(key, || {
            debug!(
                "vibrating {} Hz for {} s (damping {damping})",
                frequency.0, duration.0
            );
            vibrate(
                self.burst_generator.as_ref(),
                frequency,
                duration,
                damping,
                self.sample_rate,
            )
        })
    }

    /// Mixes `sounds` at this synthesizer's sample rate. See
    /// [overlay()](crate::elements::overlay()).
    pub fn overlay(&self, sounds: &[Waveform], delay: Seconds) -> SynthesisResult<Waveform> {
        overlay(sounds, delay, self.sample_rate)
    }

    /// Strums `chord`. The velocity's direction picks the string order and
    /// its delay spaces the string onsets. `vibration` defaults to the
    /// instrument's ring time.
    ///
    /// A chord with no sounding strings produces an empty waveform.
    pub fn strum_strings(
        &self,
        chord: &Chord,
        velocity: Velocity,
        vibration: Option<Seconds>,
    ) -> SynthesisResult<Waveform> {
        let vibration = vibration.unwrap_or_else(|| self.instrument.vibration());
        let key = StrumKey {
            chord: chord.clone(),
            direction: velocity.direction(),
            delay: velocity.delay().0.to_bits(),
            vibration: vibration.0.to_bits(),
        };
        self.strums.get_or_try_insert_with(key, || {
            let pitches = match velocity.direction() {
                Direction::Up => self.instrument.upstroke(chord),
                Direction::Down => self.instrument.downstroke(chord),
            };
            debug!(
                "strumming {chord} {} across {} strings",
                velocity.direction(),
                pitches.len()
            );
            let damping = self.instrument.damping().value();
            let sounds = pitches
                .iter()
                .map(|pitch| self.vibrate(pitch.frequency, vibration, damping))
                .collect::<SynthesisResult<Vec<_>>>()?;
            self.overlay(&sounds, velocity.delay())
        })
    }

    /// Forgets every remembered string and strum.
    pub fn clear_caches(&self) {
        self.vibrations.clear();
        self.strums.clear();
    }

    /// How many distinct strings are remembered.
    pub fn cached_vibration_count(&self) -> usize {
        self.vibrations.len()
    }

    /// How many distinct strums are remembered.
    pub fn cached_strum_count(&self) -> usize {
        self.strums.len()
    }
}
