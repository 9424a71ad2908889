//! Sample extraction: first channel, every Nth frame
//!
//! The scorer only needs the coarse amplitude shape, so long recordings are
//! decimated by a large factor (no anti-alias filter) to bound compute cost.

use super::decoder::DecodedAudio;
use super::sample_buffer::SampleBuffer;
use super::source::AudioSource;
use crate::error::SimilarityError;

/// Keep every `factor`-th frame of channel 0, starting at frame 0
///
/// Output length is `ceil(frames / factor)`. A `factor` of 0 is treated as 1.
/// A factor wider than `u32` leaves an effective rate of 0 Hz.
pub fn downsample_first_channel(audio: &DecodedAudio, factor: usize) -> SampleBuffer {
    let factor = factor.max(1);
    let samples: Vec<f32> = audio
        .channel(0)
        .map(|chan| chan.iter().step_by(factor).copied().collect())
        .unwrap_or_default();

    let sample_rate = u32::try_from(factor).map_or(0, |f| audio.sample_rate / f);
    SampleBuffer::new(samples, sample_rate)
}

/// Decode `source` and extract its downsampled first channel
///
/// # Errors
///
/// Returns `SimilarityError::DecodeError` if decoding fails, and
/// `SimilarityError::EmptyAudio` if extraction yields no samples.
pub fn extract_samples(
    source: &dyn AudioSource,
    downsample_factor: usize,
) -> Result<SampleBuffer, SimilarityError> {
    let audio = source.decode()?;
    let buffer = downsample_first_channel(&audio, downsample_factor);

    log::debug!(
        "Extracted {} samples from {} ({} frames, factor {})",
        buffer.len(),
        source.describe(),
        audio.frames(),
        downsample_factor
    );

    if buffer.is_empty() {
        return Err(SimilarityError::EmptyAudio(source.describe()));
    }

    Ok(buffer)
}
