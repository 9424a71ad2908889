//! Length and amplitude normalization of a sample pair
//!
//! Both sequences are truncated to the shorter length (head alignment, no time
//! shifting) and then each is scaled independently to unit peak amplitude.
//!
//! # Example
//!
//! ```
//! use reverso_dsp::preprocessing::normalization::prepare_pair;
//!
//! let (a, b) = prepare_pair(&[0.0, 0.5, 0.25, 0.1], &[2.0, -4.0], 0.10);
//! assert_eq!(a, vec![0.0, 1.0]);
//! assert_eq!(b, vec![0.5, -1.0]);
//! ```

use super::noise_gate::{filter_noise, peak_amplitude};

/// Truncate both sequences to their first `min(len(a), len(b))` samples
pub fn truncate_to_shortest<'a>(a: &'a [f32], b: &'a [f32]) -> (&'a [f32], &'a [f32]) {
    let len = a.len().min(b.len());
    (&a[..len], &b[..len])
}

/// Scale samples so the peak absolute value is 1.0
///
/// A silent (all-zero) sequence is returned unchanged.
pub fn normalize_peak(samples: &[f32]) -> Vec<f32> {
    let peak = peak_amplitude(samples);
    if peak > 0.0 {
        samples.iter().map(|&x| x / peak).collect()
    } else {
        samples.to_vec()
    }
}

/// Gate, truncate and peak-normalize two extracted sequences together
///
/// The returned pair always has equal length, and each side has peak
/// absolute value <= 1.0.
pub fn prepare_pair(
    original: &[f32],
    comparison: &[f32],
    threshold_ratio: f32,
) -> (Vec<f32>, Vec<f32>) {
    let gated_original = filter_noise(original, threshold_ratio);
    let gated_comparison = filter_noise(comparison, threshold_ratio);

    let (a, b) = truncate_to_shortest(&gated_original, &gated_comparison);

    log::debug!(
        "Prepared pair: {} / {} samples aligned to {}",
        original.len(),
        comparison.len(),
        a.len()
    );

    (normalize_peak(a), normalize_peak(b))
}
