// Copyright (c) 2024 Mike Tsao

#![deny(missing_docs, unused_imports, unused_variables)]
#![allow(rustdoc::private_intra_doc_links)]

//! Plectrum synthesizes the sound of strummed strings.
//!
//! Each string is modeled with a Karplus-Strong delay line: a short burst of
//! noise circulates through a ring buffer whose length sets the pitch, and a
//! lowpass-and-decay filter applied on every trip around the ring turns the
//! noise into a decaying tone. A strum overlays one such waveform per string,
//! each starting a little later than the one before.
//!
//! * *Easiest*: build a [Synthesizer] around an
//! [Instrument](elements::Instrument) and call
//! [Synthesizer::strum_strings()] with a [Chord](types::Chord) and a
//! [Velocity](types::Velocity).
//! * *More control*: call [Synthesizer::vibrate()] for individual strings and
//! mix them yourself with [overlay()](elements::overlay()).
//! * *Maximum control*: drive a [StringVibration](elements::StringVibration)
//! directly with your own excitation.

/// A collection of imports that are useful to users of this crate. `use
/// plectrum::prelude::*;` for easier onboarding.
pub mod prelude {
    pub use super::{
        elements::prelude::*, error::prelude::*, synthesis::prelude::*, types::prelude::*,
        util::prelude::*,
    };
}

pub use synthesis::Synthesizer;

pub mod elements;
pub mod error;
pub mod synthesis;
pub mod types;
pub mod util;
