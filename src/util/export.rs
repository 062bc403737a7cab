// Copyright (c) 2024 Mike Tsao

use crate::types::{SampleRate, Waveform};
use std::path::Path;

/// Writes the waveform as a 16-bit mono WAV file. Samples outside [-1.0, 1.0]
/// are clipped, which can happen after several strings are overlaid.
pub fn export_to_wav(
    waveform: &Waveform,
    sample_rate: SampleRate,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: sample_rate.into(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for sample in waveform.iter() {
        writer.write_sample((sample.clamp(-1.0, 1.0) * i16::MAX as f64) as i16)?;
    }
    writer.finalize()?;
    Ok(())
}
