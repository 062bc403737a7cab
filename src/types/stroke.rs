// Copyright (c) 2024 Mike Tsao

use crate::{
    error::{SynthesisError, SynthesisResult},
    types::{FrequencyHz, Seconds},
};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Which way the pick travels across the strings.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    EnumIter,
    Eq,
    Hash,
    IntoStaticStr,
    PartialEq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// From the highest-pitched string toward the lowest.
    Up,
    /// From the lowest-pitched string toward the highest.
    #[default]
    Down,
}

/// How a strum travels: its [Direction] and the gap between consecutive
/// string onsets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Velocity {
    direction: Direction,
    delay: Seconds,
}
impl Default for Velocity {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            delay: Seconds(0.04),
        }
    }
}
#[allow(missing_docs)]
impl Velocity {
    /// Fails if `delay` is negative or not finite. A zero delay sounds every
    /// string at once.
    pub fn new(direction: Direction, delay: Seconds) -> SynthesisResult<Self> {
        if !delay.is_valid_delay() {
            return Err(SynthesisError::InvalidDuration(delay.0));
        }
        Ok(Self { direction, delay })
    }

    pub fn up(delay: Seconds) -> SynthesisResult<Self> {
        Self::new(Direction::Up, delay)
    }

    pub fn down(delay: Seconds) -> SynthesisResult<Self> {
        Self::new(Direction::Down, delay)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn delay(&self) -> Seconds {
        self.delay
    }
}

/// One string's contribution to a stroke.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Pitch {
    /// The frequency the string vibrates at.
    pub frequency: FrequencyHz,
    /// Where this string falls in the stroke. Zero sounds first.
    pub position: usize,
}
impl Pitch {
    #[allow(missing_docs)]
    pub fn new(frequency: FrequencyHz, position: usize) -> Self {
        Self {
            frequency,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn velocity_rejects_bad_delays() {
        assert!(Velocity::up(Seconds(0.02)).is_ok());
        assert!(Velocity::down(Seconds::zero()).is_ok());
        assert_eq!(
            Velocity::up(Seconds(-0.01)),
            Err(SynthesisError::InvalidDuration(-0.01))
        );
        assert!(Velocity::down(Seconds(f64::INFINITY)).is_err());
    }

    #[test]
    fn direction_names() {
        let names: Vec<&'static str> = Direction::iter().map(|d| d.into()).collect();
        assert_eq!(names, vec!["Up", "Down"]);
        assert_eq!(
            serde_json::to_string(&Direction::Up).unwrap(),
            "\"up\"".to_string()
        );
    }

    #[test]
    fn velocity_from_json() {
        let v: Velocity = serde_json::from_str(r#"{"direction": "up", "delay": 0.02}"#).unwrap();
        assert_eq!(v, Velocity::up(Seconds(0.02)).unwrap());
    }
}
