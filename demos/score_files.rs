//! Example: Score an attempt against an original recording
//!
//! Usage:
//!   cargo run --example score_files -- [--json] [--config tuning.json] <original> <attempt>
//!
//! The attempt is expected to be already re-reversed so both files play in
//! the same direction.

use reverso_dsp::{try_score_files, SimilarityConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut config = SimilarityConfig::default();
    let mut paths: Vec<String> = Vec::new();

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--config" => {
                let path = args.first().ok_or("--config requires a path")?.clone();
                args.remove(0);
                let text = std::fs::read_to_string(&path)?;
                config = serde_json::from_str(&text)?;
                config.validate()?;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: score_files [--json] [--config tuning.json] <original> <attempt>\n\
                     \n\
                     --json     Emit the full report as JSON\n\
                     --config   JSON file overriding tuning constants\n"
                );
                return Ok(());
            }
            _ => paths.push(a),
        }
    }

    if paths.len() != 2 {
        eprintln!("ERROR: Provide exactly two audio file paths. Use --help for usage.");
        std::process::exit(2);
    }

    let report = try_score_files(&paths[0], &paths[1], config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Similarity Results:");
        println!("  Score: {:.1} ({})", report.score, report.band().label());
        println!("  Envelope correlation: {:.3}", report.envelope_score);
        match report.rms_score {
            Some(rms) => println!("  RMS correlation: {:.3}", rms),
            None => println!("  RMS correlation: skipped"),
        }
        println!("  Compared samples: {}", report.aligned_length);
        println!("  Processing time: {:.2} ms", report.metadata.processing_time_ms);
        if !report.metadata.flags.is_empty() {
            println!("  Flags: {:?}", report.metadata.flags);
        }
    }

    Ok(())
}
