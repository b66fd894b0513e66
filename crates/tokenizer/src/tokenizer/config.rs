//! Translator configuration.

use super::mode::CodeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use subtok_core::{Result, TokenizerError, DEFAULT_PAD_TOKEN, DEFAULT_TERMINAL_MARKER};

/// Configuration for building a [`super::Translator`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabularyConfig {
    /// Vocabulary file, one subword per line
    pub vocab_path: PathBuf,
    /// Code representation mode
    pub mode: CodeMode,
    /// Pre-trained unigram model, required for [`CodeMode::Ulm`]
    pub ulm_model: Option<PathBuf>,
    /// End-of-word marker used by BPE segmentation
    pub terminal_marker: char,
    /// Spelling of the padding sentinel at id 0
    pub pad_token: String,
}

/// On-disk layout. The mode stays a plain string so that an unknown one
/// surfaces as [`TokenizerError::UnsupportedMode`] rather than a JSON error.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SerializedConfig {
    vocab_path: PathBuf,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    ulm_model: Option<PathBuf>,
    #[serde(default = "default_terminal_marker")]
    terminal_marker: char,
    #[serde(default = "default_pad_token")]
    pad_token: String,
}

fn default_terminal_marker() -> char {
    DEFAULT_TERMINAL_MARKER
}

fn default_pad_token() -> String {
    DEFAULT_PAD_TOKEN.to_string()
}

impl VocabularyConfig {
    /// Create a configuration with default marker and sentinel.
    pub fn new(vocab_path: impl Into<PathBuf>, mode: CodeMode) -> Self {
        Self {
            vocab_path: vocab_path.into(),
            mode,
            ulm_model: None,
            terminal_marker: DEFAULT_TERMINAL_MARKER,
            pad_token: default_pad_token(),
        }
    }

    /// Check the configuration before any file is touched.
    pub fn validate(&self) -> Result<()> {
        if self.mode.needs_model() && self.ulm_model.is_none() {
            return Err(TokenizerError::Configuration(
                "Need to define a model path for using ULM code representation".to_string(),
            ));
        }
        if self.terminal_marker.is_whitespace() {
            return Err(TokenizerError::Configuration(format!(
                "Terminal marker {:?} must not be whitespace",
                self.terminal_marker
            )));
        }
        if self.pad_token.is_empty() {
            return Err(TokenizerError::Configuration(
                "Padding token must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: SerializedConfig = serde_json::from_str(json)?;
        let mode = match raw.mode {
            Some(mode) => mode.parse()?,
            None => CodeMode::default(),
        };

        Ok(Self {
            vocab_path: raw.vocab_path,
            mode,
            ulm_model: raw.ulm_model,
            terminal_marker: raw.terminal_marker,
            pad_token: raw.pad_token,
        })
    }

    /// Load a configuration from a JSON file.
    ///
    /// Relative paths inside the file are resolved against the directory
    /// holding it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| TokenizerError::io(path, e))?;
        let mut config = Self::from_json_str(&json)?;

        if let Some(base) = path.parent() {
            config.vocab_path = resolve(base, &config.vocab_path);
            config.ulm_model = config.ulm_model.map(|model| resolve(base, &model));
        }

        Ok(config)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_json() {
        let config = VocabularyConfig::from_json_str(r#"{"vocab_path": "vocab.txt"}"#).unwrap();

        assert_eq!(config.vocab_path, PathBuf::from("vocab.txt"));
        assert_eq!(config.mode, CodeMode::Bpe);
        assert_eq!(config.ulm_model, None);
        assert_eq!(config.terminal_marker, '#');
        assert_eq!(config.pad_token, "<PAD>");
    }

    #[test]
    fn test_mode_from_json() {
        let config =
            VocabularyConfig::from_json_str(r#"{"vocab_path": "v.txt", "mode": "single"}"#)
                .unwrap();
        assert_eq!(config.mode, CodeMode::Single);

        let config = VocabularyConfig::from_json_str(r#"{"vocab_path": "v.txt", "mode": "ulm"}"#)
            .unwrap();
        assert_eq!(config.mode, CodeMode::Ulm);

        let err = VocabularyConfig::from_json_str(r#"{"vocab_path": "v.txt", "mode": "char"}"#)
            .unwrap_err();
        assert!(matches!(err, TokenizerError::UnsupportedMode(ref m) if m == "char"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = VocabularyConfig::from_json_str(r#"{"vocab_path": "v.txt", "vocab": 1}"#)
            .unwrap_err();
        assert!(matches!(err, TokenizerError::Json(_)));
    }

    #[test]
    fn test_ulm_requires_model() {
        let config = VocabularyConfig::new("vocab.txt", CodeMode::Ulm);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, TokenizerError::Configuration(_)));

        let config = VocabularyConfig {
            ulm_model: Some("ulm.json".into()),
            ..config
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_whitespace_marker_rejected() {
        let config = VocabularyConfig {
            terminal_marker: ' ',
            ..VocabularyConfig::new("vocab.txt", CodeMode::Bpe)
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_relative_paths_resolved() {
        let dir = std::env::temp_dir().join("subtok_test_config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(
            &path,
            r#"{"vocab_path": "vocab.txt", "mode": "ULM", "ulm_model": "/models/ulm.json"}"#,
        )
        .unwrap();

        let config = VocabularyConfig::from_json_file(&path).unwrap();
        assert_eq!(config.vocab_path, dir.join("vocab.txt"));
        assert_eq!(config.ulm_model, Some(PathBuf::from("/models/ulm.json")));

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_config_file() {
        let err = VocabularyConfig::from_json_file(Path::new("/nonexistent/subtok.json"))
            .unwrap_err();
        assert!(err.is_configuration());
    }
}
