//! Benchmark command implementation.

use clap::Parser;

use super::VocabArgs;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    #[command(flatten)]
    pub vocab: VocabArgs,

    /// Source file to translate, split on whitespace
    #[arg(short, long)]
    pub input: String,

    /// Number of iterations to run
    #[arg(short = 'n', long, default_value_t = 10)]
    pub iterations: usize,
}

use anyhow::Result as AnyhowResult;
use std::fs;
use std::time::{Duration, Instant};

/// Mean duration of one iteration. Zero iterations yield zero.
fn per_iteration(elapsed: Duration, iterations: usize) -> Duration {
    if iterations == 0 {
        return Duration::ZERO;
    }
    let nanos = elapsed.as_nanos() / iterations as u128;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    anyhow::ensure!(cmd.iterations > 0, "iterations must be positive");

    let translator = cmd.vocab.translator()?;

    let text = fs::read_to_string(&cmd.input)?;
    let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();

    println!("Benchmarking translation...");
    println!("  Mode: {}", translator.mode());
    println!("  Tokens: {}", tokens.len());
    println!("  Iterations: {}", cmd.iterations);
    println!();

    // The first pass fills the segmentation cache
    let start = Instant::now();
    let mut ids = 0;
    for token in &tokens {
        ids += translator.translate(token, false)?.len();
    }
    let cold = start.elapsed();

    let start = Instant::now();
    for _ in 0..cmd.iterations {
        for token in &tokens {
            translator.translate(token, false)?;
        }
    }
    let warm = per_iteration(start.elapsed(), cmd.iterations);

    let per_token = |d: std::time::Duration| d.as_nanos() as f64 / tokens.len().max(1) as f64;

    println!("Results:");
    println!("  Ids produced: {}", ids);
    println!("  Cold pass: {:.3}ms ({:.0}ns/token)", cold.as_secs_f64() * 1e3, per_token(cold));
    println!("  Warm pass: {:.3}ms ({:.0}ns/token)", warm.as_secs_f64() * 1e3, per_token(warm));

    if let Some(stats) = translator.cache_stats() {
        println!("  Cache entries: {}", stats.entries);
        if let Some(rate) = stats.hit_rate {
            println!("  Cache hit rate: {:.1}%", rate * 100.0);
        }
    }

    Ok(())
}
