// Copyright (c) 2024 Mike Tsao

//! System utilities.

/// Commonly used imports.
pub mod prelude {
    pub use super::{
        processing::{normalize, remove_dc},
        rng::Rng,
    };
}

#[cfg(feature = "hound")]
pub use export::export_to_wav;
pub use processing::{normalize, remove_dc};
pub use rng::Rng;

#[cfg(feature = "hound")]
mod export;
mod processing;
mod rng;
