//! Configuration parameters for similarity scoring

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;

/// Similarity scoring configuration
///
/// All tuning constants of the pipeline live here so they can be swept in
/// tests or retuned without touching algorithm code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    // Extraction
    /// Keep every Nth frame of the first channel (default: 20)
    pub downsample_factor: usize,

    // Preprocessing
    /// Noise gate threshold as a fraction of peak amplitude (default: 0.10)
    /// Samples with |s| <= peak * ratio are zeroed
    pub noise_threshold_ratio: f32,

    // Features
    /// Centered moving-average window for the envelope, in samples (default: 75)
    pub envelope_window: usize,

    /// Non-overlapping RMS window, in samples (default: 125)
    pub rms_window: usize,

    // Score combination
    /// Weight of the envelope correlation (default: 0.75)
    pub envelope_weight: f64,

    /// Weight of the RMS correlation (default: 0.25)
    pub rms_weight: f64,

    /// Exponent of the response curve applied to the combined score (default: 0.45)
    /// Values below 1.0 lift mid-range correlations
    pub response_exponent: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            downsample_factor: 20,
            noise_threshold_ratio: 0.10,
            envelope_window: 75,
            rms_window: 125,
            envelope_weight: 0.75,
            rms_weight: 0.25,
            response_exponent: 0.45,
        }
    }
}

impl SimilarityConfig {
    /// Check that every field is in a usable range
    ///
    /// # Errors
    ///
    /// Returns `SimilarityError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<(), SimilarityError> {
        if self.downsample_factor == 0 {
            return Err(SimilarityError::InvalidConfig(
                "downsample_factor must be > 0".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.noise_threshold_ratio) {
            return Err(SimilarityError::InvalidConfig(format!(
                "noise_threshold_ratio must be in [0, 1], got {}",
                self.noise_threshold_ratio
            )));
        }

        if self.envelope_window == 0 {
            return Err(SimilarityError::InvalidConfig(
                "envelope_window must be > 0".to_string(),
            ));
        }

        if self.rms_window == 0 {
            return Err(SimilarityError::InvalidConfig(
                "rms_window must be > 0".to_string(),
            ));
        }

        for (name, weight) in [
            ("envelope_weight", self.envelope_weight),
            ("rms_weight", self.rms_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SimilarityError::InvalidConfig(format!(
                    "{} must be finite and >= 0, got {}",
                    name, weight
                )));
            }
        }

        if !self.response_exponent.is_finite() || self.response_exponent <= 0.0 {
            return Err(SimilarityError::InvalidConfig(format!(
                "response_exponent must be finite and > 0, got {}",
                self.response_exponent
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tuned_constants() {
        let config = SimilarityConfig::default();
        assert_eq!(config.downsample_factor, 20);
        assert_eq!(config.noise_threshold_ratio, 0.10);
        assert_eq!(config.envelope_window, 75);
        assert_eq!(config.rms_window, 125);
        assert_eq!(config.envelope_weight, 0.75);
        assert_eq!(config.rms_weight, 0.25);
        assert_eq!(config.response_exponent, 0.45);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_windows() {
        let config = SimilarityConfig {
            rms_window: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimilarityError::InvalidConfig(_))
        ));

        let config = SimilarityConfig {
            downsample_factor: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_exponent_and_weights() {
        let config = SimilarityConfig {
            response_exponent: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimilarityConfig {
            rms_weight: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimilarityConfig {
            noise_threshold_ratio: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimilarityConfig =
            serde_json::from_str(r#"{"envelope_window": 50}"#).unwrap();
        assert_eq!(config.envelope_window, 50);
        assert_eq!(config.rms_window, 125);
    }
}
