// Copyright (c) 2024 Mike Tsao

use float_cmp::approx_eq;
use more_asserts::{assert_ge, assert_le};
use plectrum::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn guitar_downstroke_mainline() {
    init_logging();
    let synthesizer = Synthesizer::new(PluckedStringInstrument::guitar());
    let g_major: Chord = "320003".parse().unwrap();
    let velocity = Velocity::down(Seconds(0.03)).unwrap();
    let vibration = Seconds(0.25);

    let strum = synthesizer
        .strum_strings(&g_major, velocity, Some(vibration))
        .unwrap();

    let delay_samples = Seconds(0.03).get_num_samples(synthesizer.sample_rate());
    let string_samples = vibration.get_num_samples(synthesizer.sample_rate());
    assert_eq!(strum.len(), 5 * delay_samples + string_samples);

    // Before the second string enters, only the first one sounds.
    let first = synthesizer
        .vibrate(FrequencyHz(82.41).transposed(3.0), vibration, 0.5)
        .unwrap();
    assert_eq!(&strum[..delay_samples], &first[..delay_samples]);

    // Each string peaks at 1.0 and the mix isn't renormalized.
    assert_ge!(strum.peak(), 1.0);
    assert_le!(strum.peak(), 6.0);
}

#[test]
fn each_string_is_normalized_and_centered() {
    init_logging();
    let synthesizer = Synthesizer::new(PluckedStringInstrument::ukulele());
    for pitch in synthesizer
        .instrument()
        .downstroke(&"0003".parse().unwrap())
    {
        let w = synthesizer
            .vibrate(pitch.frequency, Seconds(0.1), 0.5)
            .unwrap();
        assert_eq!(w.len(), 4410);
        assert!(approx_eq!(f64, w.peak(), 1.0, ulps = 2));
        assert!(approx_eq!(f64, w.mean(), 0.0, epsilon = 1e-9));
    }
}

#[test]
fn repeated_requests_are_bit_identical() {
    init_logging();
    let a = Synthesizer::new(PluckedStringInstrument::guitar());
    let b = Synthesizer::new(PluckedStringInstrument::guitar());
    let chord: Chord = "x02210".parse().unwrap();
    let velocity = Velocity::up(Seconds(0.01)).unwrap();

    let from_a = a.strum_strings(&chord, velocity, Some(Seconds(0.2))).unwrap();
    let again = a.strum_strings(&chord, velocity, Some(Seconds(0.2))).unwrap();
    let from_b = b.strum_strings(&chord, velocity, Some(Seconds(0.2))).unwrap();
    assert!(from_a.shares_samples_with(&again));
    assert_eq!(from_a, from_b);
    assert!(from_a
        .iter()
        .zip(from_b.iter())
        .all(|(x, y)| x.to_bits() == y.to_bits()));
}

#[test]
fn different_seeds_sound_different() {
    init_logging();
    let a = Synthesizer::new(PluckedStringInstrument::guitar());
    let b = Synthesizer::new_with(
        Box::new(PluckedStringInstrument::guitar()),
        Box::new(WhiteNoise::new_with_seed(99)),
        SampleRate::DEFAULT,
    );
    let wa = a.vibrate(FrequencyHz(196.0), Seconds(0.05), 0.5).unwrap();
    let wb = b.vibrate(FrequencyHz(196.0), Seconds(0.05), 0.5).unwrap();
    assert_eq!(wa.len(), wb.len());
    assert_ne!(wa, wb);
}

#[test]
fn sample_rate_changes_lengths() {
    init_logging();
    let synthesizer =
        Synthesizer::new_with_sample_rate(PluckedStringInstrument::guitar(), SampleRate(48000));
    let w = synthesizer
        .vibrate(FrequencyHz(220.0), Seconds(0.01), 0.5)
        .unwrap();
    assert_eq!(w.len(), 480);
}

#[test]
fn instrument_from_json_drives_synthesis() {
    init_logging();
    let instrument: PluckedStringInstrument = serde_json::from_str(
        r#"{ "tuning": [196.0, 293.66, 440.0, 659.26], "vibration": 0.1, "damping": 0.495 }"#,
    )
    .unwrap();
    let synthesizer = Synthesizer::new(instrument);
    let strum = synthesizer
        .strum_strings(
            &"0230".parse().unwrap(),
            Velocity::down(Seconds::zero()).unwrap(),
            None,
        )
        .unwrap();
    assert_eq!(strum.len(), 4410);
    assert_eq!(synthesizer.cached_vibration_count(), 4);
}

#[test]
fn invalid_requests_fail_loudly() {
    init_logging();
    let synthesizer = Synthesizer::new(PluckedStringInstrument::guitar());
    assert!(matches!(
        synthesizer.vibrate(FrequencyHz(220.0), Seconds(0.01), 0.75),
        Err(SynthesisError::InvalidDamping(_))
    ));
    assert!(matches!(
        synthesizer.strum_strings(
            &"000000".parse().unwrap(),
            Velocity::default(),
            Some(Seconds(-1.0))
        ),
        Err(SynthesisError::InvalidDuration(_))
    ));
    assert!(Velocity::up(Seconds(-0.01)).is_err());
}
