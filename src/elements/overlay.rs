// Copyright (c) 2024 Mike Tsao

use crate::{
    error::{SynthesisError, SynthesisResult},
    types::{SampleRate, Seconds, Waveform},
};

/// Mixes the strings of a strum. String `i` starts `i * delay` after the
/// first and is added (not copied) into the result, so overlapping strings
/// sum and may exceed unit range. The result is as long as the latest-ending
/// string, whichever one that is.
///
/// Fails if `delay` is negative or not finite, or if some string would end
/// past [Waveform::MAX_LEN]. No sounds produce an empty waveform; a single
/// sound comes back unchanged regardless of delay.
pub fn overlay(
    sounds: &[Waveform],
    delay: Seconds,
    sample_rate: SampleRate,
) -> SynthesisResult<Waveform> {
    if !delay.is_valid_delay() {
        return Err(SynthesisError::InvalidDuration(delay.0));
    }
    let delay_samples = delay.get_num_samples(sample_rate);

    // An earlier, longer string can outlast a later one.
    let mut num_samples = 0;
    for (i, sound) in sounds.iter().enumerate() {
        let end = i
            .checked_mul(delay_samples)
            .and_then(|offset| offset.checked_add(sound.len()))
            .filter(|end| *end <= Waveform::MAX_LEN)
            .ok_or(SynthesisError::InvalidDuration(delay.0))?;
        num_samples = num_samples.max(end);
    }

    let mut samples = vec![0.0; num_samples];
    for (i, sound) in sounds.iter().enumerate() {
        let offset = i * delay_samples;
        samples[offset..offset + sound.len()]
            .iter_mut()
            .zip(sound.iter())
            .for_each(|(dst, src)| *dst += src);
    }
    Ok(samples.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize, start: f64) -> Waveform {
        (0..len).map(|i| start + i as f64).collect()
    }

    #[test]
    fn nothing_to_mix() {
        let w = overlay(&[], Seconds(0.02), SampleRate::DEFAULT).unwrap();
        assert!(w.is_empty());
    }

    #[test]
    fn single_string_ignores_delay() {
        let w0 = ramp(100, 0.0);
        for delay in [0.0, 0.02, 10.0] {
            let w = overlay(&[w0.clone()], Seconds(delay), SampleRate::DEFAULT).unwrap();
            assert_eq!(w, w0);
        }
    }

    #[test]
    fn two_strings_add_where_they_overlap() {
        // One second at 10 Hz makes the delay easy to reason about.
        let sr = SampleRate(10);
        let w0 = ramp(8, 1.0);
        let w1 = ramp(6, 100.0);
        let w = overlay(&[w0.clone(), w1.clone()], Seconds(0.3), sr).unwrap();
        assert_eq!(w.len(), 3 + 6);
        assert_eq!(&w[0..3], &w0[0..3]);
        for i in 0..6 {
            let expected = w1[i] + w0.get(i + 3).copied().unwrap_or_default();
            assert_eq!(w[3 + i], expected);
        }
    }

    #[test]
    fn earlier_longer_string_sets_length() {
        let sr = SampleRate(10);
        let w0 = ramp(50, 0.0);
        let w1 = ramp(5, 0.0);
        let w2 = ramp(5, 0.0);
        let w = overlay(&[w0.clone(), w1, w2], Seconds(1.0), sr).unwrap();
        assert_eq!(w.len(), 50);
        assert_eq!(w[49], w0[49]);
    }

    #[test]
    fn simultaneous_strum_sums() {
        let w = overlay(
            &[Waveform::from(vec![0.75, 0.5]), Waveform::from(vec![0.75])],
            Seconds::zero(),
            SampleRate::DEFAULT,
        )
        .unwrap();
        // Not renormalized.
        assert_eq!(w.samples(), &[1.5, 0.5]);
    }

    #[test]
    fn order_matters() {
        let sr = SampleRate(10);
        let a = ramp(3, 1.0);
        let b = ramp(1, 10.0);
        let ab = overlay(&[a.clone(), b.clone()], Seconds(0.5), sr).unwrap();
        let ba = overlay(&[b, a], Seconds(0.5), sr).unwrap();
        assert_ne!(ab, ba);
        assert_eq!(ab.len(), 6);
        assert_eq!(ba.len(), 8);
    }

    #[test]
    fn bad_delay_is_rejected() {
        assert_eq!(
            overlay(&[ramp(3, 0.0)], Seconds(-0.5), SampleRate::DEFAULT),
            Err(SynthesisError::InvalidDuration(-0.5))
        );
    }

    #[test]
    fn oversized_strum_is_rejected() {
        let w = ramp(3, 0.0);
        assert_eq!(
            overlay(&[w.clone(), w.clone()], Seconds(1e15), SampleRate::DEFAULT),
            Err(SynthesisError::InvalidDuration(1e15))
        );
        let alone = overlay(&[w.clone()], Seconds(1e15), SampleRate::DEFAULT).unwrap();
        assert_eq!(alone, w);
    }
}
