//! Segment command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Segment command arguments.
#[derive(Parser)]
pub struct SegmentCommand {
    /// Vocabulary file, one subword per line
    #[arg(short, long)]
    pub vocab: PathBuf,

    /// End-of-word marker
    #[arg(long, default_value_t = '#')]
    pub marker: char,

    /// Tokens to segment ("-" reads stdin)
    #[arg(required = true)]
    pub tokens: Vec<String>,
}

use anyhow::Result as AnyhowResult;
use subtok_tokenizer::{CodeMode, Translator};

pub fn run(cmd: SegmentCommand) -> AnyhowResult<()> {
    let translator = Translator::builder(&cmd.vocab)
        .mode(CodeMode::Bpe)
        .terminal_marker(cmd.marker)
        .build()?;

    for token in super::read_tokens(cmd.tokens)? {
        let pieces = translator.segment(&token)?;
        let pieces: Vec<&str> = pieces.iter().map(|p| p.as_str()).collect();
        println!("{}\t{}", token, pieces.join(" "));
    }

    Ok(())
}
