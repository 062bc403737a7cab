// Copyright (c) 2024 Mike Tsao

//! Post-processing applied to freshly synthesized strings.

use kahan::KahanSum;

/// Subtracts the mean so the result is centered on zero. An empty input
/// produces an empty output.
pub fn remove_dc(samples: &[f64]) -> Vec<f64> {
    if samples.is_empty() {
        return Vec::default();
    }
    // Long decays sum many tiny values, so the plain sum drifts.
    let mut sum = KahanSum::new();
    for sample in samples {
        sum += *sample;
    }
    let mean = sum.sum() / samples.len() as f64;
    samples.iter().map(|s| s - mean).collect()
}

/// Scales the samples so the loudest one has magnitude 1.0. Silence (and an
/// empty input) comes back unchanged.
pub fn normalize(samples: &[f64]) -> Vec<f64> {
    let peak = samples.iter().fold(0.0f64, |peak, s| peak.max(s.abs()));
    if peak == 0.0 {
        return samples.to_vec();
    }
    samples.iter().map(|s| s / peak).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn dc_removal_centers_signal() {
        let centered = remove_dc(&[1.0, 2.0, 3.0, 6.0]);
        assert_eq!(centered, vec![-2.0, -1.0, 0.0, 3.0]);

        let biased: Vec<f64> = (0..1000).map(|i| 0.25 + (i as f64 * 0.1).sin()).collect();
        let centered = remove_dc(&biased);
        let mean = centered.iter().sum::<f64>() / centered.len() as f64;
        assert!(approx_eq!(f64, mean, 0.0, epsilon = 1e-12));
    }

    #[test]
    fn normalization_sets_peak_to_unity() {
        let normalized = normalize(&[0.25, -0.5, 0.125]);
        assert_eq!(normalized, vec![0.5, -1.0, 0.25]);
    }

    #[test]
    fn degenerate_inputs_pass_through() {
        assert!(remove_dc(&[]).is_empty());
        assert!(normalize(&[]).is_empty());
        assert_eq!(normalize(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert_eq!(remove_dc(&[0.7]), vec![0.0]);
    }
}
