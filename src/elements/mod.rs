// Copyright (c) 2024 Mike Tsao

//! Building blocks for strummed sounds: excitation, the vibrating string,
//! mixing strings into a strum, and the instruments that decide which strings
//! sound.

/// The most commonly used imports.
pub mod prelude {
    pub use super::{
        burst::{BurstGenerator, WhiteNoise},
        instrument::{Instrument, PluckedStringInstrument, PluckedStringInstrumentBuilder},
        overlay::overlay,
        vibration::{vibrate, StringVibration},
    };
}

pub use burst::{BurstGenerator, WhiteNoise};
pub use instrument::{Instrument, PluckedStringInstrument, PluckedStringInstrumentBuilder};
pub use overlay::overlay;
pub use vibration::{delay_line_length, vibrate, StringVibration};

mod burst;
mod instrument;
mod overlay;
mod vibration;
