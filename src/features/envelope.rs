//! Amplitude envelope extraction
//!
//! Centered moving average of absolute amplitude. The result is a smoothed
//! loudness-shape curve that follows syllable and word boundaries rather
//! than sample-level detail.
//!
//! Algorithm:
//! 1. `half = window / 2`
//! 2. For each index `i`, average `|x[j]|` over `j` in `[max(0, i - half), min(len, i + half))`
//! 3. Windows shrink at the edges; the divisor is the number of samples actually averaged
//!
//! A running prefix sum keeps this O(len) regardless of window size.
//!
//! # Example
//!
//! ```
//! use reverso_dsp::features::envelope::extract_envelope;
//!
//! let envelope = extract_envelope(&[1.0, -1.0, 1.0, -1.0], 4);
//! assert_eq!(envelope, vec![1.0, 1.0, 1.0, 1.0]);
//! ```

/// Compute the moving-average-of-absolute-value envelope
///
/// # Arguments
///
/// * `samples` - Normalized mono samples
/// * `window` - Nominal window size in samples (typically 75)
///
/// # Returns
///
/// Envelope with the same length as `samples`. A window below 2 (half-width
/// of zero) degenerates to the plain absolute value.
pub fn extract_envelope(samples: &[f32], window: usize) -> Vec<f32> {
    let len = samples.len();
    let half = window / 2;

    if half == 0 {
        return samples.iter().map(|x| x.abs()).collect();
    }

    // prefix[k] = sum of |x[j]| for j < k
    let mut prefix = Vec::with_capacity(len + 1);
    prefix.push(0.0f64);
    let mut running = 0.0f64;
    for &x in samples {
        running += x.abs() as f64;
        prefix.push(running);
    }

    (0..len)
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half).min(len);
            let count = end - start;
            ((prefix[end] - prefix[start]) / count as f64) as f32
        })
        .collect()
}
