//! Windowed RMS energy
//!
//! Coarse loudness contour: one root-mean-square value per non-overlapping
//! block. The final block may be short and is averaged over its real length.
//!
//! # Example
//!
//! ```
//! use reverso_dsp::features::rms::rms_windows;
//!
//! let contour = rms_windows(&[1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0], 4);
//! assert_eq!(contour, vec![1.0, 2.0]);
//! ```

/// Compute RMS of each consecutive `window`-sample block
///
/// Output length is `ceil(len / window)`. A `window` of 0 yields an empty
/// contour, which makes the scorer fall back to envelope-only scoring.
pub fn rms_windows(samples: &[f32], window: usize) -> Vec<f32> {
    if window == 0 {
        return Vec::new();
    }

    samples
        .chunks(window)
        .map(|block| {
            let sum_sq: f64 = block.iter().map(|&x| (x as f64) * (x as f64)).sum();
            (sum_sq / block.len() as f64).sqrt() as f32
        })
        .collect()
}
