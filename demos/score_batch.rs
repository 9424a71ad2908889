//! Example: Score many attempts against one original in parallel
//!
//! Usage:
//!   cargo run --release --example score_batch -- [--jobs N] <original> <attempt1> <attempt2> ...
//!
//! Notes:
//! - Decoding and scoring are parallel across attempts; each score is independent.
//! - Default workers: (available CPU threads - 1), keeping one core free for the system.
//! - Undecodable attempts are reported and scored 0.

use rayon::prelude::*;
use reverso_dsp::io::extractor::extract_samples;
use reverso_dsp::{score_attempts, FileSource, SimilarityConfig};
use std::env;
use std::time::Instant;

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism().map(|v| v.get()).unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut jobs: Option<usize> = None;
    let mut paths: Vec<String> = Vec::new();

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--jobs" => {
                let v = args
                    .first()
                    .ok_or("--jobs requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
                jobs = Some(std::cmp::max(1, v));
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: score_batch [--jobs N] <original> <attempt1> <attempt2> ...\n\
                     \n\
                     --jobs N   Parallel workers (default: CPU-1)\n"
                );
                return Ok(());
            }
            _ => paths.push(a),
        }
    }

    if paths.len() < 2 {
        eprintln!("ERROR: Provide an original and at least one attempt. Use --help for usage.");
        std::process::exit(2);
    }

    let jobs = jobs.unwrap_or_else(default_jobs);
    let config = SimilarityConfig::default();
    let original_path = paths.remove(0);
    eprintln!("Batch: {} attempts, jobs={}", paths.len(), jobs);

    let t0 = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;

    let original = extract_samples(&FileSource::new(&original_path), config.downsample_factor)?;

    let (attempts, scores) = pool.install(|| {
        let attempts: Vec<Vec<f32>> = paths
            .par_iter()
            .map(|path| {
                match extract_samples(&FileSource::new(path), config.downsample_factor) {
                    Ok(buffer) => buffer.into_samples(),
                    Err(e) => {
                        eprintln!("WARN: {}: {}", path, e);
                        Vec::new()
                    }
                }
            })
            .collect();
        let scores = score_attempts(original.samples(), &attempts, &config);
        (attempts, scores)
    });

    for ((path, attempt), score) in paths.iter().zip(&attempts).zip(&scores) {
        println!("{:>6.1}  {:>7} samples  {}", score, attempt.len(), path);
    }

    let best = scores
        .iter()
        .copied()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    if let Some((idx, score)) = best {
        eprintln!("Best: {} ({:.1})", paths[idx], score);
    }
    eprintln!("Done in {:.2} s", t0.elapsed().as_secs_f32());

    Ok(())
}
