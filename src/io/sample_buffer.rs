//! Mono sample buffer produced by extraction

/// One channel of decoded (and possibly downsampled) audio
///
/// Each pipeline stage reads a buffer and produces a new one; buffers are
/// never shared between scoring runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleBuffer {
    /// Samples in time order
    samples: Vec<f32>,
    /// Effective sample rate in Hz (after downsampling)
    sample_rate: u32,
}

impl SampleBuffer {
    /// Create a buffer from samples at the given effective sample rate
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Samples in time order
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Effective sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds, 0.0 when the sample rate is unknown
    pub fn duration_seconds(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Take ownership of the samples
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}
