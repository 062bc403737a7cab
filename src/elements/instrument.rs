// Copyright (c) 2024 Mike Tsao

use crate::types::{Chord, Damping, FrequencyHz, Pitch, Seconds};
use derivative::Derivative;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Something that knows which strings sound for a [Chord], in what order, and
/// how they ring.
pub trait Instrument: Send + Sync + core::fmt::Debug {
    /// How much energy each trip around a string's delay line keeps.
    fn damping(&self) -> Damping;

    /// How long a string rings when the caller doesn't say.
    fn vibration(&self) -> Seconds;

    /// The sounding pitches of `chord`, in the order a downstroke reaches
    /// them.
    fn downstroke(&self, chord: &Chord) -> Vec<Pitch>;

    /// The sounding pitches of `chord`, in the order an upstroke reaches
    /// them.
    fn upstroke(&self, chord: &Chord) -> Vec<Pitch>;
}

/// A fretted instrument described by the open pitch of each string, lowest
/// string first. A downstroke sounds the strings in that order and an
/// upstroke in reverse.
#[derive(Clone, Builder, Debug, Derivative, PartialEq, Serialize, Deserialize)]
#[derivative(Default)]
#[builder(default)]
#[serde(default, rename_all = "kebab-case")]
pub struct PluckedStringInstrument {
    /// Open-string pitches, lowest string first.
    #[derivative(Default(value = "PluckedStringInstrument::GUITAR_TUNING.to_vec()"))]
    tuning: Vec<FrequencyHz>,

    /// Default ring time.
    #[derivative(Default(value = "Seconds(5.0)"))]
    vibration: Seconds,

    /// Shared by every string.
    damping: Damping,
}
impl PluckedStringInstrument {
    /// E2 A2 D3 G3 B3 E4.
    pub const GUITAR_TUNING: [FrequencyHz; 6] = [
        FrequencyHz(82.41),
        FrequencyHz(110.0),
        FrequencyHz(146.83),
        FrequencyHz(196.0),
        FrequencyHz(246.94),
        FrequencyHz(329.63),
    ];

    /// G4 C4 E4 A4, re-entrant.
    pub const UKULELE_TUNING: [FrequencyHz; 4] = [
        FrequencyHz(392.0),
        FrequencyHz(261.63),
        FrequencyHz(329.63),
        FrequencyHz(440.0),
    ];

    /// A six-string guitar in standard tuning.
    pub fn guitar() -> Self {
        Self::default()
    }

    /// A soprano ukulele in standard tuning. Its strings are thinner and die
    /// away sooner than a guitar's.
    pub fn ukulele() -> Self {
        Self {
            tuning: Self::UKULELE_TUNING.to_vec(),
            vibration: Seconds(2.5),
            ..Default::default()
        }
    }

    #[allow(missing_docs)]
    pub fn tuning(&self) -> &[FrequencyHz] {
        &self.tuning
    }

    /// Sounding strings in string order. Strings the chord doesn't mention are
    /// treated as muted, and chord entries beyond the last string are ignored.
    fn sounding_strings<'a>(
        &'a self,
        chord: &'a Chord,
    ) -> impl DoubleEndedIterator<Item = FrequencyHz> + 'a {
        self.tuning
            .iter()
            .enumerate()
            .filter_map(move |(string, open)| {
                chord
                    .fret(string)
                    .map(|fret| open.transposed(fret as f64))
            })
    }
}
impl Instrument for PluckedStringInstrument {
    fn damping(&self) -> Damping {
        self.damping
    }

    fn vibration(&self) -> Seconds {
        self.vibration
    }

    fn downstroke(&self, chord: &Chord) -> Vec<Pitch> {
        self.sounding_strings(chord)
            .enumerate()
            .map(|(position, frequency)| Pitch::new(frequency, position))
            .collect()
    }

    fn upstroke(&self, chord: &Chord) -> Vec<Pitch> {
        self.sounding_strings(chord)
            .rev()
            .enumerate()
            .map(|(position, frequency)| Pitch::new(frequency, position))
            .collect()
    }
}
