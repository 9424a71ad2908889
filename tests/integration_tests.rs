//! Integration tests for the similarity engine

use reverso_dsp::{
    score_files, score_sources, similarity, try_score_files, EncodedSource, FileSource,
    ScoreBand, SimilarityConfig, SimilarityError,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SAMPLE_RATE: u32 = 44100;

/// Spoken-phrase stand-in: 440 Hz carrier gated into syllables of varying loudness
fn syllables(seconds: f32, pattern: &[f32]) -> Vec<f32> {
    let len = (seconds * SAMPLE_RATE as f32) as usize;
    let syllable_len = len / pattern.len().max(1);
    (0..len)
        .map(|i| {
            let level = pattern[(i / syllable_len.max(1)).min(pattern.len() - 1)];
            let t = i as f32 / SAMPLE_RATE as f32;
            level * (2.0 * std::f32::consts::PI * 440.0 * t).sin()
        })
        .collect()
}

/// Write mono samples as a 16-bit PCM WAV file
fn write_wav(path: &Path, samples: &[f32]) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("create wav");
    for &s in samples {
        writer
            .write_sample((s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)
            .expect("write sample");
    }
    writer.finalize().expect("finalize wav");
}

fn fixture(dir: &TempDir, name: &str, samples: &[f32]) -> PathBuf {
    let path = dir.path().join(name);
    write_wav(&path, samples);
    path
}

const PHRASE: [f32; 8] = [0.9, 0.1, 0.6, 0.0, 1.0, 0.3, 0.8, 0.05];
const OTHER_PHRASE: [f32; 8] = [0.05, 0.8, 0.0, 1.0, 0.1, 0.9, 0.0, 0.6];

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_identical_files_score_near_100() {
        let dir = TempDir::new().unwrap();
        let original = fixture(&dir, "original.wav", &syllables(2.0, &PHRASE));

        let report = try_score_files(&original, &original, SimilarityConfig::default())
            .await
            .expect("scoring should succeed");

        assert!(report.score >= 95.0, "self score {:.2}", report.score);
        assert_eq!(report.band(), ScoreBand::Excellent);
        // 2 s at 44.1 kHz, every 20th frame
        assert_eq!(report.aligned_length, 4410);
    }

    #[tokio::test]
    async fn test_quieter_imitation_still_matches() {
        let dir = TempDir::new().unwrap();
        let original = fixture(&dir, "original.wav", &syllables(2.0, &PHRASE));
        let quiet: Vec<f32> = syllables(2.0, &PHRASE).iter().map(|s| s * 0.3).collect();
        let attempt = fixture(&dir, "attempt.wav", &quiet);

        let score = score_files(&original, &attempt, SimilarityConfig::default()).await;
        assert!(score >= 95.0, "gain change should not matter, got {:.2}", score);
    }

    #[tokio::test]
    async fn test_different_phrase_scores_lower() {
        let dir = TempDir::new().unwrap();
        let original = fixture(&dir, "original.wav", &syllables(2.0, &PHRASE));
        let other = fixture(&dir, "other.wav", &syllables(2.0, &OTHER_PHRASE));

        let config = SimilarityConfig::default();
        let same = score_files(&original, &original, config.clone()).await;
        let different = score_files(&original, &other, config).await;

        assert!((0.0..=100.0).contains(&different));
        assert!(different < same, "{:.2} should be < {:.2}", different, same);
    }

    #[tokio::test]
    async fn test_length_mismatch_does_not_error() {
        let dir = TempDir::new().unwrap();
        let original = fixture(&dir, "original.wav", &syllables(2.0, &PHRASE));
        let shorter = fixture(&dir, "shorter.wav", &syllables(1.5, &PHRASE));

        let report = try_score_files(&original, &shorter, SimilarityConfig::default())
            .await
            .expect("length mismatch is not an error");
        assert_eq!(report.aligned_length, 3308);
        assert!((0.0..=100.0).contains(&report.score));
    }

    #[tokio::test]
    async fn test_silent_attempt_scores_zero() {
        let dir = TempDir::new().unwrap();
        let original = fixture(&dir, "original.wav", &syllables(1.0, &PHRASE));
        let silent = fixture(&dir, "silent.wav", &vec![0.0; SAMPLE_RATE as usize]);

        let score = score_files(&original, &silent, SimilarityConfig::default()).await;
        assert_eq!(score, 0.0);
    }

    #[tokio::test]
    async fn test_undecodable_file_is_tagged_and_fail_soft() {
        let dir = TempDir::new().unwrap();
        let original = fixture(&dir, "original.wav", &syllables(1.0, &PHRASE));
        let broken = dir.path().join("broken.wav");
        std::fs::write(&broken, b"this is not audio").unwrap();

        let result = try_score_files(&original, &broken, SimilarityConfig::default()).await;
        assert!(matches!(result, Err(SimilarityError::DecodeError(_))));

        let score = score_files(&original, &broken, SimilarityConfig::default()).await;
        assert_eq!(score, 0.0);
    }

    #[tokio::test]
    async fn test_files_are_symmetric() {
        let dir = TempDir::new().unwrap();
        let a = fixture(&dir, "a.wav", &syllables(2.0, &PHRASE));
        let b = fixture(&dir, "b.wav", &syllables(1.8, &OTHER_PHRASE));

        let config = SimilarityConfig::default();
        let ab = score_files(&a, &b, config.clone()).await;
        let ba = score_files(&b, &a, config).await;
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_sync_sources_from_disk_and_memory() {
        let dir = TempDir::new().unwrap();
        let samples = syllables(1.0, &PHRASE);
        let path = fixture(&dir, "take.wav", &samples);
        let bytes = std::fs::read(&path).unwrap();

        let from_disk = FileSource::new(&path);
        let from_memory = EncodedSource::new(bytes, Some("wav"));

        let score = score_sources(&from_disk, &from_memory, &SimilarityConfig::default());
        assert!(score >= 95.0, "same take from disk and memory: {:.2}", score);
    }

    #[test]
    fn test_empty_sequences_score_zero() {
        assert_eq!(similarity(&[], &[], &SimilarityConfig::default()), 0.0);
    }

    #[test]
    fn test_tuning_sweep_stays_bounded() {
        let original: Vec<f32> = syllables(1.0, &PHRASE).into_iter().step_by(20).collect();
        let attempt: Vec<f32> = syllables(1.0, &OTHER_PHRASE).into_iter().step_by(20).collect();

        for envelope_window in [5, 25, 75, 150] {
            for rms_window in [25, 125, 500] {
                for exponent in [0.25, 0.45, 1.0, 2.0] {
                    let config = SimilarityConfig {
                        envelope_window,
                        rms_window,
                        response_exponent: exponent,
                        ..Default::default()
                    };
                    let score = similarity(&original, &attempt, &config);
                    assert!(
                        (0.0..=100.0).contains(&score),
                        "score {} out of range for {:?}",
                        score,
                        config
                    );
                    let self_score = similarity(&original, &original, &config);
                    assert!(self_score >= 95.0, "self score {} for {:?}", self_score, config);
                }
            }
        }
    }
}
