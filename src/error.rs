//! Error types for the similarity engine

use std::fmt;

/// Errors that can occur while extracting or scoring audio
///
/// Only the extraction boundary and configuration validation produce errors.
/// Every numeric stage after extraction is total.
#[derive(Debug, Clone, PartialEq)]
pub enum SimilarityError {
    /// Source audio could not be opened or decoded
    DecodeError(String),

    /// Source decoded, but yielded no usable samples
    EmptyAudio(String),

    /// Configuration values out of range
    InvalidConfig(String),

    /// Background scoring task was cancelled or panicked
    TaskFailed(String),
}

impl fmt::Display for SimilarityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            SimilarityError::EmptyAudio(msg) => write!(f, "Empty audio: {}", msg),
            SimilarityError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            SimilarityError::TaskFailed(msg) => write!(f, "Task failed: {}", msg),
        }
    }
}

impl std::error::Error for SimilarityError {}

impl From<symphonia::core::errors::Error> for SimilarityError {
    fn from(err: symphonia::core::errors::Error) -> Self {
        SimilarityError::DecodeError(err.to_string())
    }
}

impl From<std::io::Error> for SimilarityError {
    fn from(err: std::io::Error) -> Self {
        SimilarityError::DecodeError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = SimilarityError::DecodeError("bad header".to_string());
        assert_eq!(err.to_string(), "Decode error: bad header");

        let err = SimilarityError::InvalidConfig("rms_window must be > 0".to_string());
        assert_eq!(err.to_string(), "Invalid config: rms_window must be > 0");
    }

    #[test]
    fn test_io_error_maps_to_decode_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.wav");
        let err: SimilarityError = io.into();
        assert!(matches!(err, SimilarityError::DecodeError(_)));
    }
}
