//! Observability hook for intermediate pipeline values
//!
//! The scorer reports named numeric intermediates to a [`TraceSink`] instead
//! of printing them, so tests and callers can inspect stage outputs.

/// Sample count of the extracted original sequence
pub const ORIGINAL_SAMPLES: &str = "original_samples";
/// Sample count of the extracted comparison sequence
pub const COMPARISON_SAMPLES: &str = "comparison_samples";
/// Length both sequences were truncated to
pub const ALIGNED_LENGTH: &str = "aligned_length";
/// |pearson| of the two envelopes
pub const ENVELOPE_SCORE: &str = "envelope_score";
/// |pearson| of the two RMS contours (absent when RMS was skipped)
pub const RMS_SCORE: &str = "rms_score";
/// Blended score in `[0, 1]`
pub const COMBINED: &str = "combined";
/// Combined score after the response curve
pub const SCALED: &str = "scaled";
/// Final percentage
pub const SCORE: &str = "score";

/// Receiver of named intermediate values
pub trait TraceSink {
    /// Record one value
    fn record(&mut self, name: &'static str, value: f64);
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTrace;

impl TraceSink for NoopTrace {
    fn record(&mut self, _name: &'static str, _value: f64) {}
}

/// Sink that keeps every value in recording order
#[derive(Debug, Clone, Default)]
pub struct RecordingTrace {
    values: Vec<(&'static str, f64)>,
}

impl RecordingTrace {
    /// Empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent value recorded under `name`
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .rev()
            .find(|(n, _)| *n == name)
            .map(|&(_, v)| v)
    }

    /// All values in recording order
    pub fn values(&self) -> &[(&'static str, f64)] {
        &self.values
    }
}

impl TraceSink for RecordingTrace {
    fn record(&mut self, name: &'static str, value: f64) {
        self.values.push((name, value));
    }
}
