//! Error types for the subtok library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
///
/// Unknown subwords are deliberately absent: lookups fall back to the
/// padding id instead of failing.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Unrecognized code representation mode
    #[error("Unsupported mode of code representation: {0}")]
    UnsupportedMode(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reported by the external unigram segmenter
    #[error("ULM error: {0}")]
    Ulm(String),
}

impl TokenizerError {
    /// Create an I/O error tagged with the offending path.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }

    /// Whether this error means the component could not be set up.
    ///
    /// Missing files count as configuration failures.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Io { .. } | Self::Json(_)
        )
    }
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_configuration() {
        let err = TokenizerError::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.is_configuration());
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_unsupported_mode_is_not_configuration() {
        let err = TokenizerError::UnsupportedMode("wordpiece".to_string());
        assert!(!err.is_configuration());
        assert_eq!(
            err.to_string(),
            "Unsupported mode of code representation: wordpiece"
        );
    }
}
