//! CLI commands for the subtok vocabulary.

pub mod benchmark;
pub mod info;
pub mod segment;
pub mod translate;

pub use benchmark::BenchmarkCommand;
pub use info::InfoCommand;
pub use segment::SegmentCommand;
pub use translate::TranslateCommand;

use anyhow::Result as AnyhowResult;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use subtok_tokenizer::{CodeMode, Translator, VocabularyConfig};

/// Arguments shared by every command that needs a translator.
#[derive(Args)]
pub struct VocabArgs {
    /// Vocabulary file, one subword per line
    #[arg(short, long, required_unless_present = "config")]
    pub vocab: Option<PathBuf>,

    /// Code representation: single, BPE or ULM
    #[arg(short, long, default_value = "BPE")]
    pub mode: String,

    /// Pre-trained unigram model (required for ULM)
    #[arg(long)]
    pub ulm: Option<PathBuf>,

    /// JSON configuration file (overrides the other options)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl VocabArgs {
    /// Build the translator these arguments describe.
    pub fn translator(&self) -> AnyhowResult<Translator> {
        if let Some(config) = &self.config {
            return Ok(Translator::from_config_file(config)?);
        }

        let mode: CodeMode = self.mode.parse()?;
        let vocab = self
            .vocab
            .clone()
            .ok_or_else(|| anyhow::anyhow!("--vocab is required without --config"))?;
        let config = VocabularyConfig {
            ulm_model: self.ulm.clone(),
            ..VocabularyConfig::new(vocab, mode)
        };
        Ok(Translator::new(config)?)
    }
}

/// Use the given tokens, or whitespace-separated tokens from stdin for `-`.
pub fn read_tokens(tokens: Vec<String>) -> AnyhowResult<Vec<String>> {
    if tokens.len() == 1 && tokens[0] == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer.split_whitespace().map(str::to_string).collect());
    }
    Ok(tokens)
}
