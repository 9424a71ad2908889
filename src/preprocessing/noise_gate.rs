//! Peak-relative noise gate
//!
//! Zeroes every sample whose magnitude is at or below a fraction of the peak
//! magnitude, so near-silent regions do not dominate correlation.
//!
//! # Example
//!
//! ```
//! use reverso_dsp::preprocessing::noise_gate::filter_noise;
//!
//! let gated = filter_noise(&[0.01, 0.5, -0.02, 1.0, 0.03], 0.10);
//! assert_eq!(gated, vec![0.0, 0.5, 0.0, 1.0, 0.0]);
//! ```

/// Peak absolute amplitude, 0.0 for empty input
pub fn peak_amplitude(samples: &[f32]) -> f32 {
    samples.iter().map(|&x| x.abs()).fold(0.0f32, f32::max)
}

/// Gate samples relative to the peak
///
/// `threshold = peak * threshold_ratio`; samples with `|s| <= threshold` become
/// 0.0, the rest pass through unchanged. Output length equals input length.
/// All-zero input stays all-zero (`|0| <= 0`).
pub fn filter_noise(samples: &[f32], threshold_ratio: f32) -> Vec<f32> {
    let threshold = peak_amplitude(samples) * threshold_ratio;
    samples
        .iter()
        .map(|&s| if s.abs() <= threshold { 0.0 } else { s })
        .collect()
}
