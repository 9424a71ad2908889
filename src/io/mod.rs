//! Audio I/O modules
//!
//! Decoding with Symphonia, the `AudioSource` collaborator seam, and
//! extraction of the downsampled first channel the scorer works on.

pub mod decoder;
pub mod extractor;
pub mod sample_buffer;
pub mod source;
