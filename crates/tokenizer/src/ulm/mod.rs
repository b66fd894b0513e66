//! Unigram language model segmentation.
//!
//! The ULM representation has no algorithm of its own here: a pre-trained
//! model is loaded into the HuggingFace `tokenizers` runtime and ids come
//! straight from it.

use std::path::Path;
use subtok_core::{Result, TokenizerError};
use tokenizers::Tokenizer as HfTokenizer;
use tracing::debug;

/// Wrapper around an externally trained subword model.
pub struct UlmSegmenter {
    model: HfTokenizer,
}

impl UlmSegmenter {
    /// Load a serialized model (`tokenizer.json` layout).
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TokenizerError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "ULM model not found"),
            ));
        }

        let model = HfTokenizer::from_file(path).map_err(|e| {
            TokenizerError::Configuration(format!(
                "Failed to load ULM model {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!(
            path = %path.display(),
            vocab_size = model.get_vocab_size(true),
            "loaded ULM model"
        );
        Ok(Self { model })
    }

    /// Encode a raw token to model ids.
    pub fn encode(&self, token: &str) -> Result<Vec<u32>> {
        let encoding = self
            .model
            .encode(token, false)
            .map_err(|e| TokenizerError::Ulm(e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }

    /// Encode a raw token to model pieces.
    pub fn pieces(&self, token: &str) -> Result<Vec<String>> {
        let encoding = self
            .model
            .encode(token, false)
            .map_err(|e| TokenizerError::Ulm(e.to_string()))?;
        Ok(encoding.get_tokens().to_vec())
    }

    /// Number of entries in the model's own vocabulary.
    pub fn model_vocab_size(&self) -> usize {
        self.model.get_vocab_size(true)
    }
}

impl std::fmt::Debug for UlmSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UlmSegmenter")
            .field("vocab_size", &self.model_vocab_size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A tiny unigram model in `tokenizer.json` layout.
    const UNIGRAM_JSON: &str = r#"{
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [],
        "normalizer": null,
        "pre_tokenizer": null,
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "Unigram",
            "unk_id": 0,
            "vocab": [
                ["<unk>", 0.0],
                ["get", -1.0],
                ["_", -2.0],
                ["name", -1.5],
                ["g", -5.0],
                ["e", -5.0],
                ["t", -5.0],
                ["n", -5.0],
                ["a", -5.0],
                ["m", -5.0]
            ],
            "byte_fallback": false
        }
    }"#;

    fn write_model(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("subtok_test_ulm");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, UNIGRAM_JSON).unwrap();
        path
    }

    #[test]
    fn test_encode_with_unigram_model() {
        let path = write_model("unigram_encode.json");
        let ulm = UlmSegmenter::from_file(&path).unwrap();

        assert_eq!(ulm.encode("get_name").unwrap(), vec![1, 2, 3]);
        assert_eq!(ulm.pieces("get_name").unwrap(), vec!["get", "_", "name"]);
        assert_eq!(ulm.model_vocab_size(), 10);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_model() {
        let err = UlmSegmenter::from_file(Path::new("/nonexistent/ulm.json")).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_malformed_model() {
        let dir = std::env::temp_dir().join("subtok_test_ulm");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = UlmSegmenter::from_file(&path).unwrap_err();
        assert!(matches!(err, TokenizerError::Configuration(_)));

        std::fs::remove_file(path).ok();
    }
}
