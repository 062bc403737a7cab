// Copyright (c) 2024 Mike Tsao

//! Common data types used throughout the system.

/// The most commonly used imports.
pub mod prelude {
    pub use super::{
        Chord, Damping, Direction, FrequencyHz, ParameterType, Pitch, SampleRate, Seconds,
        Velocity, Waveform,
    };
}

pub use {
    chord::Chord,
    numbers::{Damping, FrequencyHz, ParameterType},
    stroke::{Direction, Pitch, Velocity},
    time::{SampleRate, Seconds},
    waveform::Waveform,
};

mod chord;
mod numbers;
mod stroke;
mod time;
mod waveform;
