//! Audio sources the scorer can pull PCM from

use std::path::{Path, PathBuf};

use super::decoder::{decode_bytes, decode_file, DecodedAudio};
use crate::error::SimilarityError;

/// Anything that can be resolved to decoded PCM audio
///
/// The scorer owns only the downsampling policy; container parsing and
/// codec work happen behind this trait.
pub trait AudioSource {
    /// Short human-readable label for logs
    fn describe(&self) -> String;

    /// Decode the source to planar PCM
    ///
    /// # Errors
    ///
    /// Returns `SimilarityError::DecodeError` when the source cannot be read.
    fn decode(&self) -> Result<DecodedAudio, SimilarityError>;
}

/// Audio file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source backed by the file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AudioSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn decode(&self) -> Result<DecodedAudio, SimilarityError> {
        decode_file(&self.path)
    }
}

/// Encoded container bytes held in memory (e.g. a recording not yet flushed to disk)
#[derive(Debug, Clone)]
pub struct EncodedSource {
    bytes: Vec<u8>,
    extension: Option<String>,
}

impl EncodedSource {
    /// Source over `bytes`, with an optional extension hint such as `"wav"`
    pub fn new(bytes: Vec<u8>, extension: Option<&str>) -> Self {
        Self {
            bytes,
            extension: extension.map(str::to_string),
        }
    }
}

impl AudioSource for EncodedSource {
    fn describe(&self) -> String {
        format!(
            "<{} bytes {}>",
            self.bytes.len(),
            self.extension.as_deref().unwrap_or("unknown")
        )
    }

    fn decode(&self) -> Result<DecodedAudio, SimilarityError> {
        decode_bytes(self.bytes.clone(), self.extension.as_deref())
    }
}

/// Already-decoded PCM, for callers that capture audio themselves
#[derive(Debug, Clone)]
pub struct MemorySource {
    audio: DecodedAudio,
}

impl MemorySource {
    /// Source over decoded planar audio
    pub fn new(audio: DecodedAudio) -> Self {
        Self { audio }
    }

    /// Single-channel source
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self::new(DecodedAudio::new(sample_rate, vec![samples]))
    }
}

impl AudioSource for MemorySource {
    fn describe(&self) -> String {
        format!(
            "<memory {} frames x {} ch>",
            self.audio.frames(),
            self.audio.channels()
        )
    }

    fn decode(&self) -> Result<DecodedAudio, SimilarityError> {
        if self.audio.frames() == 0 {
            return Err(SimilarityError::DecodeError(
                "Memory source has zero frames".to_string(),
            ));
        }
        Ok(self.audio.clone())
    }
}
