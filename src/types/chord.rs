// Copyright (c) 2024 Mike Tsao

use anyhow::{anyhow, Error};
use core::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

/// A chord shape: one fret position per string, counting from the
/// lowest-pitched string. `None` means the string is muted. Fret zero is the
/// open string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Chord {
    frets: Vec<Option<u8>>,
}
impl Chord {
    /// Creates a chord from per-string fret positions.
    pub fn new(frets: Vec<Option<u8>>) -> Self {
        Self { frets }
    }

    /// The per-string fret positions.
    pub fn frets(&self) -> &[Option<u8>] {
        &self.frets
    }

    /// The fret for the given string, or `None` if it's muted or the chord
    /// doesn't mention it.
    pub fn fret(&self, string: usize) -> Option<u8> {
        self.frets.get(string).copied().flatten()
    }

    /// How many strings actually sound.
    pub fn sounding_count(&self) -> usize {
        self.frets.iter().filter(|f| f.is_some()).count()
    }

    fn parse_fret(token: &str) -> anyhow::Result<Option<u8>> {
        match token {
            "x" | "X" | "-" => Ok(None),
            _ => token
                .parse::<u8>()
                .map(Some)
                .map_err(|_| anyhow!("'{token}' isn't a fret number or a mute marker")),
        }
    }
}
impl FromStr for Chord {
    type Err = Error;

    /// Accepts compact tablature like `x32010`, one character per string, or
    /// comma-separated positions like `x,10,12,12,11,10` for higher frets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let frets = if s.contains(',') {
            s.split(',')
                .map(|token| Self::parse_fret(token.trim()))
                .collect::<anyhow::Result<Vec<_>>>()?
        } else {
            let mut buf = [0u8; 4];
            s.chars()
                .map(|c| Self::parse_fret(c.encode_utf8(&mut buf)))
                .collect::<anyhow::Result<Vec<_>>>()?
        };
        Ok(Self::new(frets))
    }
}
impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let needs_commas = self.frets.iter().flatten().any(|fret| *fret > 9);
        let tokens: Vec<String> = self
            .frets
            .iter()
            .map(|fret| match fret {
                Some(fret) => fret.to_string(),
                None => "x".to_string(),
            })
            .collect();
        if needs_commas {
            f.write_str(&tokens.join(","))
        } else {
            f.write_str(&tokens.concat())
        }
    }
}
