//! subtok CLI - Command-line interface for the code token vocabulary.
//!
//! This is the main entry point for the `subtok` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{BenchmarkCommand, InfoCommand, SegmentCommand, TranslateCommand};

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser)]
#[command(name = "subtok")]
#[command(about = "Subword vocabulary for source code tokens", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate code tokens to vocabulary ids
    Translate(TranslateCommand),
    /// Show the BPE subwords of code tokens
    Segment(SegmentCommand),
    /// Print vocabulary statistics
    Info(InfoCommand),
    /// Benchmark translation of a source file
    Benchmark(BenchmarkCommand),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Translate(cmd) => commands::translate::run(cmd)?,
        Commands::Segment(cmd) => commands::segment::run(cmd)?,
        Commands::Info(cmd) => commands::info::run(cmd)?,
        Commands::Benchmark(cmd) => commands::benchmark::run(cmd)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_default_log_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
