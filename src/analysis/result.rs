//! Similarity result types

use serde::{Deserialize, Serialize};

/// Coarse grade of a similarity score, for caller feedback copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    /// Below 40
    Poor,
    /// 40 to below 70
    Fair,
    /// 70 to below 90
    Good,
    /// 90 and above
    Excellent,
}

impl ScoreBand {
    /// Band for a score in `[0, 100]`
    ///
    /// # Example
    ///
    /// ```
    /// use reverso_dsp::analysis::result::ScoreBand;
    ///
    /// assert_eq!(ScoreBand::from_score(12.0), ScoreBand::Poor);
    /// assert_eq!(ScoreBand::from_score(70.0), ScoreBand::Good);
    /// assert_eq!(ScoreBand::from_score(100.0), ScoreBand::Excellent);
    /// ```
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ScoreBand::Excellent
        } else if score >= 70.0 {
            ScoreBand::Good
        } else if score >= 40.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    /// Lowercase label (e.g. "excellent")
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Poor => "poor",
            ScoreBand::Fair => "fair",
            ScoreBand::Good => "good",
            ScoreBand::Excellent => "excellent",
        }
    }
}

/// Conditions worth surfacing alongside a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreFlag {
    /// One or both inputs had no samples
    EmptyInput,
    /// Inputs differed in length and were truncated to the shorter
    LengthMismatch,
    /// One side was silent after gating (zero variance)
    SilentAfterGate,
    /// RMS contours were unavailable; envelope-only scoring
    RmsSkipped,
    /// Configuration failed validation; score forced to 0
    InvalidConfig,
}

/// Scoring metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreMetadata {
    /// Crate version that produced the score
    pub algorithm_version: String,

    /// Wall-clock time spent in the numeric pipeline
    pub processing_time_ms: f32,

    /// Flags raised while scoring
    pub flags: Vec<ScoreFlag>,
}

impl Default for ScoreMetadata {
    fn default() -> Self {
        Self {
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            processing_time_ms: 0.0,
            flags: vec![],
        }
    }
}

/// Complete similarity result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// Final similarity in `[0, 100]`
    pub score: f64,

    /// |pearson| of the envelopes, in `[0, 1]`
    pub envelope_score: f64,

    /// |pearson| of the RMS contours, `None` when RMS was skipped
    pub rms_score: Option<f64>,

    /// Weighted blend before the response curve, in `[0, 1]`
    pub combined: f64,

    /// Blend after the response curve, in `[0, 1]`
    pub scaled: f64,

    /// Number of samples compared after truncation
    pub aligned_length: usize,

    /// Scoring metadata
    pub metadata: ScoreMetadata,
}

impl SimilarityReport {
    /// Fail-soft result: every score component is 0
    pub fn zero() -> Self {
        Self {
            score: 0.0,
            envelope_score: 0.0,
            rms_score: None,
            combined: 0.0,
            scaled: 0.0,
            aligned_length: 0,
            metadata: ScoreMetadata::default(),
        }
    }

    /// Zero result carrying one flag
    pub fn zero_with_flag(flag: ScoreFlag) -> Self {
        let mut report = Self::zero();
        report.metadata.flags.push(flag);
        report
    }

    /// Coarse grade of the score
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    /// True if `flag` was raised while scoring
    pub fn has_flag(&self, flag: ScoreFlag) -> bool {
        self.metadata.flags.contains(&flag)
    }
}
