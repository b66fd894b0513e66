//! Translate command implementation.

use clap::Parser;

use super::VocabArgs;

/// Translate command arguments.
#[derive(Parser)]
pub struct TranslateCommand {
    #[command(flatten)]
    pub vocab: VocabArgs,

    /// Tokens are already single BPE subwords
    #[arg(short, long, default_value_t = false)]
    pub subtokenized: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Tokens to translate ("-" reads stdin)
    #[arg(required = true)]
    pub tokens: Vec<String>,
}

use anyhow::Result as AnyhowResult;
use tracing::debug;

pub fn run(cmd: TranslateCommand) -> AnyhowResult<()> {
    let translator = cmd.vocab.translator()?;
    let tokens = super::read_tokens(cmd.tokens)?;
    debug!(tokens = tokens.len(), mode = %translator.mode(), "translating");

    let translated = translator.translate_batch(&tokens, cmd.subtokenized)?;

    // One line of space-separated ids per token
    let output: Vec<String> = translated
        .iter()
        .map(|ids| {
            ids.iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    let output = output.join("\n");

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            println!("Translated {} tokens to {}", tokens.len(), path);
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
