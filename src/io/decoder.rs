//! Audio decoding using Symphonia
//!
//! Decodes any container Symphonia is built with (wav, mp3, flac, aac/m4a)
//! into planar `f32` channels in `[-1.0, 1.0]`.
//!
//! # Example
//!
//! ```no_run
//! use reverso_dsp::io::decoder::decode_file;
//!
//! let decoded = decode_file("take_01.m4a")?;
//! println!("{} frames at {} Hz", decoded.frames(), decoded.sample_rate);
//! # Ok::<(), reverso_dsp::SimilarityError>(())
//! ```

use std::fs::File;
use std::io::Cursor;
use std::path::Path;

use symphonia::core::audio::{AudioBuffer, AudioBufferRef, Signal};
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::conv::IntoSample;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSource, MediaSourceStream};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::sample::Sample;

use crate::error::SimilarityError;

/// Fully decoded PCM audio, one plane per channel
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Per-channel samples; every plane has the same length
    pub channel_samples: Vec<Vec<f32>>,
}

impl DecodedAudio {
    /// Wrap already-decoded planar samples
    pub fn new(sample_rate: u32, channel_samples: Vec<Vec<f32>>) -> Self {
        Self {
            sample_rate,
            channel_samples,
        }
    }

    /// Number of channels
    pub fn channels(&self) -> usize {
        self.channel_samples.len()
    }

    /// Total frame count (samples per channel)
    pub fn frames(&self) -> usize {
        self.channel_samples.first().map_or(0, Vec::len)
    }

    /// Samples of one channel, if present
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channel_samples.get(index).map(Vec::as_slice)
    }
}

/// Decode an audio file from disk
///
/// The file extension, when present, is passed to the format probe as a hint.
///
/// # Errors
///
/// Returns `SimilarityError::DecodeError` if the file cannot be opened, has no
/// decodable audio track, or decodes to zero frames.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<DecodedAudio, SimilarityError> {
    let path = path.as_ref();
    log::debug!("Decoding audio file: {}", path.display());

    let file = File::open(path)?;
    let extension = path.extension().and_then(|e| e.to_str());
    decode_media(Box::new(file), extension)
}

/// Decode an encoded audio container held in memory
///
/// # Errors
///
/// Same as [`decode_file`].
pub fn decode_bytes(
    bytes: Vec<u8>,
    extension: Option<&str>,
) -> Result<DecodedAudio, SimilarityError> {
    log::debug!("Decoding {} bytes of in-memory audio", bytes.len());
    decode_media(Box::new(Cursor::new(bytes)), extension)
}

fn decode_media(
    source: Box<dyn MediaSource>,
    extension: Option<&str>,
) -> Result<DecodedAudio, SimilarityError> {
    let mss = MediaSourceStream::new(source, Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext);
    }

    let meta_opts: MetadataOptions = Default::default();
    let fmt_opts: FormatOptions = Default::default();

    let probed = symphonia::default::get_probe().format(&hint, mss, &fmt_opts, &meta_opts)?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| SimilarityError::DecodeError("No supported audio tracks found".to_string()))?;

    let track_id = track.id;
    let mut sample_rate = track.codec_params.sample_rate.unwrap_or(0);
    let mut decoder =
        symphonia::default::get_codecs().make(&track.codec_params, &DecoderOptions::default())?;

    let mut planes: Vec<Vec<f32>> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                if sample_rate == 0 {
                    sample_rate = spec.rate;
                }
                if planes.is_empty() {
                    planes = vec![Vec::new(); spec.channels.count()];
                }
                append_planes(decoded, &mut planes);
            }
            Err(SymphoniaError::DecodeError(msg)) => {
                // Corrupt packets are skipped rather than failing the whole source
                log::warn!("Skipping undecodable packet: {}", msg);
                continue;
            }
            Err(e) => return Err(e.into()),
        }
    }

    let decoded = DecodedAudio::new(sample_rate, planes);
    if decoded.frames() == 0 {
        return Err(SimilarityError::DecodeError(
            "Source decoded to zero frames".to_string(),
        ));
    }

    log::debug!(
        "Decoded {} frames, {} channel(s) at {} Hz",
        decoded.frames(),
        decoded.channels(),
        decoded.sample_rate
    );

    Ok(decoded)
}

fn append_planes(decoded: AudioBufferRef<'_>, planes: &mut [Vec<f32>]) {
    match decoded {
        AudioBufferRef::U8(buf) => extend_planes(&*buf, planes),
        AudioBufferRef::U16(buf) => extend_planes(&*buf, planes),
        AudioBufferRef::U24(buf) => extend_planes(&*buf, planes),
        AudioBufferRef::U32(buf) => extend_planes(&*buf, planes),
        AudioBufferRef::S8(buf) => extend_planes(&*buf, planes),
        AudioBufferRef::S16(buf) => extend_planes(&*buf, planes),
        AudioBufferRef::S24(buf) => extend_planes(&*buf, planes),
        AudioBufferRef::S32(buf) => extend_planes(&*buf, planes),
        AudioBufferRef::F32(buf) => extend_planes(&*buf, planes),
        AudioBufferRef::F64(buf) => extend_planes(&*buf, planes),
    }
}

fn extend_planes<S>(buf: &AudioBuffer<S>, planes: &mut [Vec<f32>])
where
    S: Sample + IntoSample<f32>,
{
    let channels = buf.spec().channels.count().min(planes.len());
    for (ch, plane) in planes.iter_mut().enumerate().take(channels) {
        plane.extend(buf.chan(ch).iter().map(|&s| s.into_sample()));
    }
}
