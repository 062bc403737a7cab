// Copyright (c) 2024 Mike Tsao

//! Errors reported by synthesis operations.

use crate::types::ParameterType;
use thiserror::Error;

/// The most commonly used imports.
pub mod prelude {
    pub use super::{SynthesisError, SynthesisResult};
}

/// Contract violations. Each one means the caller asked for something that
/// would be numerically unstable or meaningless, so the value is reported
/// rather than clamped.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SynthesisError {
    /// Damping must lie in (0, 0.5]. Above 0.5 the delay line grows without
    /// bound; at zero it never decays.
    #[error("damping {0} is outside (0, 0.5]")]
    InvalidDamping(ParameterType),

    /// The frequency is not positive, not finite, or so high that the delay
    /// line would have no cells.
    #[error("frequency {0} Hz can't drive a delay line")]
    InvalidFrequency(ParameterType),

    /// A duration or delay is negative, not finite, or zero where a positive
    /// length is required.
    #[error("duration of {0} seconds is out of range")]
    InvalidDuration(ParameterType),

    /// The burst generator didn't fill the delay line exactly.
    #[error("burst generator produced {actual} samples, but the delay line needs {expected}")]
    BurstLength {
        /// Length of the delay line.
        expected: usize,
        /// What the generator returned.
        actual: usize,
    },
}

/// Shorthand for results of synthesis operations.
pub type SynthesisResult<T> = core::result::Result<T, SynthesisError>;
