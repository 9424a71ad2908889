//! # Reverso DSP
//!
//! Similarity scoring for reverse-singing attempts: given an original
//! recording and a player's (re-reversed) imitation, produce a 0-100 score of
//! how closely their loudness shapes match.
//!
//! ## Quick Start
//!
//! ```
//! use reverso_dsp::{similarity, SimilarityConfig};
//!
//! let original: Vec<f32> = (0..4000).map(|i| (i as f32 * 0.01).sin()).collect();
//! let score = similarity(&original, &original, &SimilarityConfig::default());
//! assert!(score >= 95.0);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Audio Source -> Extraction -> Noise Gate -> Truncate + Peak Normalize
//!              -> Envelope / RMS -> Pearson -> Blend -> Response Curve -> Score
//! ```
//!
//! Every numeric stage is total: empty or silent input degrades to a zero
//! score instead of an error. Only decoding can fail, and the fail-soft entry
//! points map that failure to 0.0 as well.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod preprocessing;
pub mod runner;

// Re-export main types
pub use analysis::result::{ScoreBand, ScoreFlag, ScoreMetadata, SimilarityReport};
pub use analysis::trace::{NoopTrace, RecordingTrace, TraceSink};
pub use config::SimilarityConfig;
pub use error::SimilarityError;
pub use io::sample_buffer::SampleBuffer;
pub use io::source::{AudioSource, EncodedSource, FileSource, MemorySource};
pub use runner::{score_attempts, score_files, score_sources, try_score_files, try_score_sources};

use analysis::correlation::pearson_correlation;
use analysis::score::{combine_scores, response_curve, scale_to_percent};
use analysis::trace;
use features::envelope::extract_envelope;
use features::rms::rms_windows;
use preprocessing::noise_gate::peak_amplitude;
use preprocessing::normalization::prepare_pair;

/// Similarity score of two extracted sample sequences
///
/// Fail-soft: returns 0.0 for empty or silent input and for an invalid config.
///
/// # Arguments
///
/// * `original` - Extracted (downsampled, mono) samples of the original recording
/// * `comparison` - Extracted samples of the attempt
/// * `config` - Scoring configuration
///
/// # Returns
///
/// Score in `[0.0, 100.0]`
pub fn similarity(original: &[f32], comparison: &[f32], config: &SimilarityConfig) -> f64 {
    analyze_similarity(original, comparison, config).score
}

/// Score two extracted sequences and return every intermediate value
///
/// # Example
///
/// ```
/// use reverso_dsp::{analyze_similarity, SimilarityConfig};
///
/// let report = analyze_similarity(&[], &[0.5; 10], &SimilarityConfig::default());
/// assert_eq!(report.score, 0.0);
/// ```
pub fn analyze_similarity(
    original: &[f32],
    comparison: &[f32],
    config: &SimilarityConfig,
) -> SimilarityReport {
    analyze_similarity_traced(original, comparison, config, &mut NoopTrace)
}

/// Score two extracted sequences, reporting intermediates to `sink`
///
/// Algorithm:
/// 1. Return 0 if either sequence is empty
/// 2. Gate noise, truncate to equal length, peak-normalize each side
/// 3. `envelope_score = |pearson(envelope(a), envelope(b))|`
/// 4. `rms_score = |pearson(rms(a), rms(b))|`, skipped when the contours are empty
/// 5. `combined = envelope_weight * envelope_score + rms_weight * rms_score`, clamped to `[0, 1]`
/// 6. `score = 100 * combined ^ response_exponent`, clamped to `[0, 100]`
///
/// Direction of correlation is discarded; only strength counts.
pub fn analyze_similarity_traced(
    original: &[f32],
    comparison: &[f32],
    config: &SimilarityConfig,
    sink: &mut dyn TraceSink,
) -> SimilarityReport {
    use std::time::Instant;
    let start_time = Instant::now();

    sink.record(trace::ORIGINAL_SAMPLES, original.len() as f64);
    sink.record(trace::COMPARISON_SAMPLES, comparison.len() as f64);

    if let Err(e) = config.validate() {
        log::warn!("Refusing to score with invalid config: {}", e);
        sink.record(trace::SCORE, 0.0);
        return SimilarityReport::zero_with_flag(ScoreFlag::InvalidConfig);
    }

    if original.is_empty() || comparison.is_empty() {
        log::warn!(
            "Empty input ({} / {} samples), similarity is 0",
            original.len(),
            comparison.len()
        );
        sink.record(trace::SCORE, 0.0);
        return SimilarityReport::zero_with_flag(ScoreFlag::EmptyInput);
    }

    let mut flags = Vec::new();
    if original.len() != comparison.len() {
        flags.push(ScoreFlag::LengthMismatch);
    }

    // Gate, truncate, normalize
    let (a, b) = prepare_pair(original, comparison, config.noise_threshold_ratio);
    let aligned_length = a.len();
    sink.record(trace::ALIGNED_LENGTH, aligned_length as f64);

    if peak_amplitude(&a) == 0.0 || peak_amplitude(&b) == 0.0 {
        flags.push(ScoreFlag::SilentAfterGate);
    }

    // Shape: envelope correlation
    let envelope_a = extract_envelope(&a, config.envelope_window);
    let envelope_b = extract_envelope(&b, config.envelope_window);
    let envelope_score = pearson_correlation(&envelope_a, &envelope_b).abs();
    sink.record(trace::ENVELOPE_SCORE, envelope_score);

    // Loudness: RMS contour correlation on the normalized (pre-envelope) signal
    let rms_a = rms_windows(&a, config.rms_window);
    let rms_b = rms_windows(&b, config.rms_window);
    let rms_score = if rms_a.is_empty() || rms_a.len() != rms_b.len() {
        log::debug!(
            "RMS contours unavailable ({} vs {} windows), envelope-only scoring",
            rms_a.len(),
            rms_b.len()
        );
        flags.push(ScoreFlag::RmsSkipped);
        None
    } else {
        let score = pearson_correlation(&rms_a, &rms_b).abs();
        sink.record(trace::RMS_SCORE, score);
        Some(score)
    };

    let combined = combine_scores(envelope_score, rms_score, config);
    let scaled = response_curve(combined, config.response_exponent);
    let score = scale_to_percent(scaled);

    sink.record(trace::COMBINED, combined);
    sink.record(trace::SCALED, scaled);
    sink.record(trace::SCORE, score);

    log::debug!(
        "Similarity: envelope={:.3}, rms={:?}, combined={:.3}, scaled={:.3}, score={:.1}",
        envelope_score,
        rms_score,
        combined,
        scaled,
        score
    );

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    SimilarityReport {
        score,
        envelope_score,
        rms_score,
        combined,
        scaled,
        aligned_length,
        metadata: ScoreMetadata {
            processing_time_ms,
            flags,
            ..Default::default()
        },
    }
}
