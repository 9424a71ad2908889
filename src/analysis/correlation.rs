//! Pearson correlation
//!
//! Normalized covariance between two equal-length sequences, in `[-1, 1]`.
//! Unlike a raw dot product, the coefficient is independent of scale and
//! length, so envelope and RMS correlations are directly comparable.
//!
//! Degenerate inputs (empty, mismatched lengths, or zero variance on either
//! side) yield 0.0 instead of NaN.
//!
//! # Example
//!
//! ```
//! use reverso_dsp::analysis::correlation::pearson_correlation;
//!
//! let r = pearson_correlation(&[1.0, 2.0, 3.0, 4.0, 5.0], &[5.0, 4.0, 3.0, 2.0, 1.0]);
//! assert!((r + 1.0).abs() < 1e-9);
//! ```

/// Arithmetic mean, 0.0 for empty input
pub fn mean(values: &[f32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Pearson correlation coefficient of `x` and `y`
///
/// Algorithm:
/// 1. Center each sequence on its own mean
/// 2. Covariance numerator: dot product of the centered sequences
/// 3. Variance numerators: sum of squares of each centered sequence
/// 4. `r = cov / (sqrt(ss_x) * sqrt(ss_y))`, clamped to `[-1, 1]`
///
/// # Returns
///
/// Coefficient in `[-1, 1]`, or 0.0 when the inputs are empty, differ in
/// length, or either side has zero variance.
pub fn pearson_correlation(x: &[f32], y: &[f32]) -> f64 {
    if x.is_empty() || x.len() != y.len() {
        if x.len() != y.len() {
            log::warn!(
                "Correlation on mismatched lengths ({} vs {}), returning 0",
                x.len(),
                y.len()
            );
        }
        return 0.0;
    }

    if is_constant(x) || is_constant(y) {
        return 0.0;
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut covariance = 0.0f64;
    let mut sum_sq_x = 0.0f64;
    let mut sum_sq_y = 0.0f64;

    for (&a, &b) in x.iter().zip(y.iter()) {
        let dx = a as f64 - mean_x;
        let dy = b as f64 - mean_y;
        covariance += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    // Underflow on subnormal input still lands here as a zero denominator
    let denominator = sum_sq_x.sqrt() * sum_sq_y.sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }

    (covariance / denominator).clamp(-1.0, 1.0)
}

/// True when every element equals the first (zero standard deviation)
///
/// Checked on the raw samples: centering on a rounded mean can leave a
/// constant sequence with a tiny nonzero spread.
fn is_constant(values: &[f32]) -> bool {
    values.iter().all(|&v| v == values[0])
}
