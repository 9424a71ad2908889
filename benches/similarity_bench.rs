//! Performance benchmarks for similarity scoring

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reverso_dsp::features::envelope::extract_envelope;
use reverso_dsp::{similarity, SimilarityConfig};

fn phrase(len: usize, seed: f32) -> Vec<f32> {
    (0..len)
        .map(|i| {
            let t = i as f32;
            ((t * 0.004 + seed).sin() * 0.5 + 0.5) * (t * 0.9).sin()
        })
        .collect()
}

fn bench_similarity(c: &mut Criterion) {
    // 30 seconds at 44.1 kHz after 20x downsampling
    let original = phrase(44100 * 30 / 20, 0.0);
    let attempt = phrase(44100 * 28 / 20, 1.3);
    let config = SimilarityConfig::default();

    c.bench_function("similarity_30s", |b| {
        b.iter(|| similarity(black_box(&original), black_box(&attempt), black_box(&config)));
    });
}

fn bench_envelope(c: &mut Criterion) {
    let samples = phrase(44100 * 30 / 20, 0.0);

    c.bench_function("envelope_window_75", |b| {
        b.iter(|| extract_envelope(black_box(&samples), black_box(75)));
    });
}

criterion_group!(benches, bench_similarity, bench_envelope);
criterion_main!(benches);
