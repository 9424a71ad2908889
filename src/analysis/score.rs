//! Score combination and response curve
//!
//! Blends the envelope and RMS correlation strengths, then applies a concave
//! power curve so mid-range matches read as encouraging percentages while
//! poor matches stay near zero.

use crate::config::SimilarityConfig;

/// Weighted blend of envelope and RMS correlation strengths, clamped to `[0, 1]`
///
/// When `rms_score` is `None` (RMS contour unavailable) the envelope score is
/// used alone. Non-finite inputs produce 0.0.
pub fn combine_scores(envelope_score: f64, rms_score: Option<f64>, config: &SimilarityConfig) -> f64 {
    let combined = match rms_score {
        Some(rms) => envelope_score * config.envelope_weight + rms * config.rms_weight,
        None => envelope_score,
    };

    if !combined.is_finite() {
        return 0.0;
    }
    combined.clamp(0.0, 1.0)
}

/// Concave response curve `combined ^ exponent`
///
/// Non-decreasing in `combined` for any positive exponent. Input is clamped
/// to `[0, 1]` first.
pub fn response_curve(combined: f64, exponent: f64) -> f64 {
    if !combined.is_finite() {
        return 0.0;
    }
    combined.clamp(0.0, 1.0).powf(exponent)
}

/// Convert a unit-range score to a percentage in `[0, 100]`
pub fn scale_to_percent(scaled: f64) -> f64 {
    if !scaled.is_finite() {
        return 0.0;
    }
    (scaled * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_blend() {
        let config = SimilarityConfig::default();
        let combined = combine_scores(0.8, Some(0.4), &config);
        assert!((combined - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_envelope_only_fallback() {
        let config = SimilarityConfig::default();
        assert_eq!(combine_scores(0.6, None, &config), 0.6);
    }

    #[test]
    fn test_combined_is_clamped() {
        let config = SimilarityConfig {
            envelope_weight: 1.0,
            rms_weight: 1.0,
            ..Default::default()
        };
        assert_eq!(combine_scores(0.9, Some(0.9), &config), 1.0);
        assert_eq!(combine_scores(f64::NAN, Some(0.5), &config), 0.0);
    }

    #[test]
    fn test_response_curve_endpoints_and_lift() {
        assert_eq!(response_curve(0.0, 0.45), 0.0);
        assert_eq!(response_curve(1.0, 0.45), 1.0);
        // 0.5 ^ 0.45 ~= 0.732
        let lifted = response_curve(0.5, 0.45);
        assert!((lifted - 0.7320).abs() < 1e-3);
    }

    #[test]
    fn test_response_curve_is_monotonic() {
        let mut previous = response_curve(0.0, 0.45);
        for step in 1..=1000 {
            let c = step as f64 / 1000.0;
            let current = response_curve(c, 0.45);
            assert!(current >= previous, "curve decreased at c={}", c);
            previous = current;
        }
    }

    #[test]
    fn test_scale_to_percent_bounds() {
        assert_eq!(scale_to_percent(1.0), 100.0);
        assert_eq!(scale_to_percent(1.2), 100.0);
        assert_eq!(scale_to_percent(-0.1), 0.0);
        assert_eq!(scale_to_percent(f64::INFINITY), 0.0);
    }
}
