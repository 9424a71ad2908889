//! Feature extraction modules
//!
//! Two descriptors are computed from each normalized sequence:
//! - Envelope (centered moving average of |x|): waveform shape
//! - Windowed RMS: coarse loudness contour

pub mod envelope;
pub mod rms;
