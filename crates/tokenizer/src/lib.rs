//! subtok-tokenizer - Code token translation front-end
//!
//! This crate turns raw source-code tokens into vocabulary ids for a
//! downstream sequence model. The code representation is picked once, at
//! construction:
//!
//! - `single`: whole words after stripping quotes and splitting snake_case
//! - `BPE`: greedy longest-match subwords from a pre-built vocabulary
//! - `ULM`: ids from an external, pre-trained unigram model
//!
//! Unknown words never fail: they map to the padding id 0.
//!
//! # Example
//!
//! ```no_run
//! use subtok_tokenizer::{CodeMode, Translator};
//!
//! let translator = Translator::builder("vocab.txt")
//!     .mode(CodeMode::Bpe)
//!     .build()?;
//!
//! let ids = translator.translate("get_value", false)?;
//! println!("{:?} of {}", ids, translator.vocab_size());
//! # Ok::<(), subtok_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use subtok_core::{CacheStats, Result, TokenizerError, Vocabulary, PAD_ID};

// Translator API
pub mod tokenizer;
pub use tokenizer::{CodeMode, Translator, TranslatorBuilder, VocabularyConfig};

// IO
pub mod io;
pub use io::VocabularyLoader;

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::Splitter;

// External unigram model
pub mod ulm;
pub use ulm::UlmSegmenter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
