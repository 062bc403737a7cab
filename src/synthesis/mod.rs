// Copyright (c) 2024 Mike Tsao

//! Turns chords into strums, remembering what it has already rendered.

/// The most commonly used imports.
pub mod prelude {
    pub use super::{MemoTable, Synthesizer};
}

pub use memo::MemoTable;
pub use synthesizer::Synthesizer;

mod memo;
mod synthesizer;
