//! Source-level scoring entry points
//!
//! These wrap extraction around [`analyze_similarity`](crate::analyze_similarity):
//!
//! - `try_score_sources` / `score_sources`: synchronous, for callers already on a
//!   worker thread
//! - `try_score_files` / `score_files`: async, decoding and scoring on Tokio's
//!   blocking pool so an executor thread is never held by I/O
//! - `score_attempts`: one original against many attempts, in parallel with Rayon
//!
//! The `try_` forms return a tagged result. The others are fail-soft: any
//! failure is logged and reported as a score of 0.0.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analysis::result::SimilarityReport;
use crate::config::SimilarityConfig;
use crate::error::SimilarityError;
use crate::io::extractor::extract_samples;
use crate::io::sample_buffer::SampleBuffer;
use crate::io::source::{AudioSource, FileSource};

/// Extract both sources and score them
///
/// # Errors
///
/// Returns `SimilarityError::InvalidConfig` for an invalid config, and the
/// extraction error of whichever source fails to decode first.
pub fn try_score_sources(
    original: &dyn AudioSource,
    comparison: &dyn AudioSource,
    config: &SimilarityConfig,
) -> Result<SimilarityReport, SimilarityError> {
    config.validate()?;

    let original_buffer = extract_samples(original, config.downsample_factor)?;
    let comparison_buffer = extract_samples(comparison, config.downsample_factor)?;

    Ok(score_buffers(&original_buffer, &comparison_buffer, config))
}

/// Fail-soft form of [`try_score_sources`]: 0.0 on any failure
pub fn score_sources(
    original: &dyn AudioSource,
    comparison: &dyn AudioSource,
    config: &SimilarityConfig,
) -> f64 {
    match try_score_sources(original, comparison, config) {
        Ok(report) => report.score,
        Err(e) => {
            log::warn!(
                "Scoring {} against {} failed, reporting 0: {}",
                original.describe(),
                comparison.describe(),
                e
            );
            0.0
        }
    }
}

/// Decode two audio files and score them off the async executor
///
/// Both files are decoded concurrently on Tokio's blocking pool. Dropping the
/// returned future discards the result; no partial result is produced.
///
/// Must be awaited inside a Tokio runtime.
///
/// # Errors
///
/// Returns `SimilarityError::DecodeError` / `EmptyAudio` from extraction,
/// `InvalidConfig` for an invalid config, and `TaskFailed` if a blocking
/// task panics or is cancelled.
///
/// # Example
///
/// ```no_run
/// use reverso_dsp::{try_score_files, SimilarityConfig};
///
/// # async fn run() -> Result<(), reverso_dsp::SimilarityError> {
/// let report = try_score_files("original.wav", "attempt.wav", SimilarityConfig::default()).await?;
/// println!("{:.1}% ({})", report.score, report.band().label());
/// # Ok(())
/// # }
/// ```
pub async fn try_score_files<P, Q>(
    original: P,
    comparison: Q,
    config: SimilarityConfig,
) -> Result<SimilarityReport, SimilarityError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    config.validate()?;

    let original = spawn_extraction(original.as_ref().to_path_buf(), config.downsample_factor);
    let comparison = spawn_extraction(comparison.as_ref().to_path_buf(), config.downsample_factor);

    let original_buffer = join_task(original.await)?;
    let comparison_buffer = join_task(comparison.await)?;

    let report = tokio::task::spawn_blocking(move || {
        score_buffers(&original_buffer, &comparison_buffer, &config)
    })
    .await
    .map_err(|e| SimilarityError::TaskFailed(e.to_string()))?;

    Ok(report)
}

/// Fail-soft form of [`try_score_files`]: 0.0 on any failure
pub async fn score_files<P, Q>(original: P, comparison: Q, config: SimilarityConfig) -> f64
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let label = format!(
        "{} vs {}",
        original.as_ref().display(),
        comparison.as_ref().display()
    );

    match try_score_files(original, comparison, config).await {
        Ok(report) => report.score,
        Err(e) => {
            log::warn!("Scoring {} failed, reporting 0: {}", label, e);
            0.0
        }
    }
}

/// Score several extracted attempts against one extracted original
///
/// Attempts are scored in parallel on the Rayon pool; output order matches
/// `attempts`. Each score is independent of the others.
pub fn score_attempts(
    original: &[f32],
    attempts: &[Vec<f32>],
    config: &SimilarityConfig,
) -> Vec<f64> {
    log::debug!("Scoring {} attempts in parallel", attempts.len());

    attempts
        .par_iter()
        .map(|attempt| crate::similarity(original, attempt, config))
        .collect()
}

fn score_buffers(
    original: &SampleBuffer,
    comparison: &SampleBuffer,
    config: &SimilarityConfig,
) -> SimilarityReport {
    if original.sample_rate() != comparison.sample_rate() {
        log::debug!(
            "Sample rates differ ({} vs {} Hz after downsampling); comparing by index",
            original.sample_rate(),
            comparison.sample_rate()
        );
    }
    crate::analyze_similarity(original.samples(), comparison.samples(), config)
}

fn spawn_extraction(
    path: PathBuf,
    downsample_factor: usize,
) -> tokio::task::JoinHandle<Result<SampleBuffer, SimilarityError>> {
    tokio::task::spawn_blocking(move || {
        let source = FileSource::new(path);
        extract_samples(&source, downsample_factor)
    })
}

fn join_task<T>(
    joined: Result<Result<T, SimilarityError>, tokio::task::JoinError>,
) -> Result<T, SimilarityError> {
    joined
        .map_err(|e| SimilarityError::TaskFailed(e.to_string()))
        .and_then(|extracted| extracted)
}
