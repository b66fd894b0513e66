//! Main translator implementation.
//!
//! This module provides the high-level `Translator` that turns raw code
//! tokens into vocabulary ids under one of the code representation modes.

pub mod config;
pub mod mode;
pub mod strategy;

pub use config::VocabularyConfig;
pub use mode::CodeMode;
pub use strategy::Strategy;

use crate::io::VocabularyLoader;
use crate::ulm::UlmSegmenter;
use compact_str::CompactString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use strategy::{BpeStrategy, SingleStrategy, UlmStrategy};
use subtok_core::{CacheStats, Result, TokenizerError, Vocabulary};
use tracing::info;

/// Builder for creating a translator.
#[derive(Clone)]
pub struct TranslatorBuilder {
    config: VocabularyConfig,
}

impl TranslatorBuilder {
    /// Create a builder for the given vocabulary file, in BPE mode.
    pub fn new(vocab_path: impl Into<PathBuf>) -> Self {
        Self {
            config: VocabularyConfig::new(vocab_path, CodeMode::default()),
        }
    }

    /// Set the code representation mode.
    pub fn mode(mut self, mode: CodeMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set the pre-trained unigram model.
    pub fn ulm_model(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.ulm_model = Some(path.into());
        self
    }

    /// Set the end-of-word marker.
    pub fn terminal_marker(mut self, marker: char) -> Self {
        self.config.terminal_marker = marker;
        self
    }

    /// Set the padding sentinel spelling.
    pub fn pad_token(mut self, token: impl Into<String>) -> Self {
        self.config.pad_token = token.into();
        self
    }

    /// Build the translator.
    pub fn build(self) -> Result<Translator> {
        Translator::new(self.config)
    }
}

/// Code token translator.
///
/// Owns the vocabulary for its mode and, in BPE mode, the segmentation
/// memo. It is `Send + Sync`, so one instance can serve parallel callers.
#[derive(Debug)]
pub struct Translator {
    /// Configuration
    config: VocabularyConfig,
    /// Mode-specific state
    strategy: Strategy,
    /// Number of ids, padding included
    vocab_size: usize,
}

impl Translator {
    /// Create a new translator with the given configuration.
    ///
    /// Fails when the configuration is incomplete or a file cannot be read.
    pub fn new(config: VocabularyConfig) -> Result<Self> {
        config.validate()?;

        let (strategy, vocab_size) = match config.mode {
            CodeMode::Single => {
                let vocab = Self::load_vocab(&config)?;
                let size = vocab.len();
                (Strategy::Single(SingleStrategy::new(vocab)), size)
            }
            CodeMode::Bpe => {
                let vocab = Self::load_vocab(&config)?;
                let size = vocab.len();
                let bpe = BpeStrategy::new(vocab, config.terminal_marker);
                (Strategy::Bpe(bpe), size)
            }
            CodeMode::Ulm => {
                let model_path = config.ulm_model.as_deref().ok_or_else(|| {
                    TokenizerError::Configuration(
                        "Need to define a model path for using ULM code representation"
                            .to_string(),
                    )
                })?;
                let model = UlmSegmenter::from_file(model_path)?;
                let size = VocabularyLoader::count_lines(&config.vocab_path)? + 1;
                (Strategy::Ulm(UlmStrategy::new(model)), size)
            }
        };

        info!(
            mode = %config.mode,
            vocab = %config.vocab_path.display(),
            vocab_size,
            "translator ready"
        );

        Ok(Self {
            config,
            strategy,
            vocab_size,
        })
    }

    fn load_vocab(config: &VocabularyConfig) -> Result<Arc<Vocabulary>> {
        let vocab = VocabularyLoader::load(&config.vocab_path, &config.pad_token)?;
        Ok(Arc::new(vocab))
    }

    /// Create a translator builder.
    pub fn builder(vocab_path: impl Into<PathBuf>) -> TranslatorBuilder {
        TranslatorBuilder::new(vocab_path)
    }

    /// Create a translator from a JSON configuration file.
    pub fn from_config_file(path: &Path) -> Result<Self> {
        Self::new(VocabularyConfig::from_json_file(path)?)
    }

    /// Translate a raw code token to ids.
    ///
    /// # Arguments
    /// * `token` - The raw token
    /// * `is_subtokenized` - In BPE mode, the token is already a single
    ///   subword and is looked up without segmentation
    ///
    /// Unknown words and subwords become the padding id; they never fail.
    pub fn translate(&self, token: &str, is_subtokenized: bool) -> Result<Vec<u32>> {
        self.strategy.translate(token, is_subtokenized)
    }

    /// Translate a batch of tokens (parallelized).
    pub fn translate_batch(
        &self,
        tokens: &[String],
        is_subtokenized: bool,
    ) -> Result<Vec<Vec<u32>>> {
        use rayon::prelude::*;

        tokens
            .par_iter()
            .map(|token| self.translate(token, is_subtokenized))
            .collect()
    }

    /// Segment a token into BPE subwords.
    ///
    /// Only available in BPE mode.
    pub fn segment(&self, token: &str) -> Result<Vec<CompactString>> {
        match &self.strategy {
            Strategy::Bpe(bpe) => Ok(bpe.segment(token)),
            _ => Err(TokenizerError::UnsupportedMode(format!(
                "segmentation needs BPE, translator is in {} mode",
                self.config.mode
            ))),
        }
    }

    /// Look up a single vocabulary entry, falling back to the padding id.
    ///
    /// Not available in ULM mode, whose ids come from the external model.
    pub fn lookup(&self, token: &str) -> Result<u32> {
        self.vocabulary().map(|vocab| vocab.lookup(token)).ok_or_else(|| {
            TokenizerError::UnsupportedMode(format!(
                "lookup needs an in-process vocabulary, translator is in {} mode",
                self.config.mode
            ))
        })
    }

    /// Number of ids, padding included.
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// The active mode.
    pub fn mode(&self) -> CodeMode {
        self.config.mode
    }

    /// The configuration this translator was built from.
    pub fn config(&self) -> &VocabularyConfig {
        &self.config
    }

    /// The in-process vocabulary, absent in ULM mode.
    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.strategy.vocab()
    }

    /// Segmentation cache statistics, in BPE mode.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        match &self.strategy {
            Strategy::Bpe(bpe) => Some(bpe.cache_stats()),
            _ => None,
        }
    }
}
