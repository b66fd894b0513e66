//! Code representation modes.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use subtok_core::TokenizerError;

/// How raw code tokens are turned into vocabulary entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum CodeMode {
    /// Whole words after cleanup and snake_case splitting
    Single,
    /// Greedy longest-match subwords
    #[default]
    Bpe,
    /// External unigram language model segmentation
    Ulm,
}

impl CodeMode {
    /// Canonical spelling, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeMode::Single => "single",
            CodeMode::Bpe => "BPE",
            CodeMode::Ulm => "ULM",
        }
    }

    /// Whether this mode needs the external segmenter model.
    pub fn needs_model(&self) -> bool {
        matches!(self, CodeMode::Ulm)
    }
}

impl fmt::Display for CodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeMode {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(CodeMode::Single),
            "bpe" => Ok(CodeMode::Bpe),
            "ulm" => Ok(CodeMode::Ulm),
            _ => Err(TokenizerError::UnsupportedMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for CodeMode {
    type Error = TokenizerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CodeMode> for String {
    fn from(mode: CodeMode) -> Self {
        mode.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("single".parse::<CodeMode>().unwrap(), CodeMode::Single);
        assert_eq!("BPE".parse::<CodeMode>().unwrap(), CodeMode::Bpe);
        assert_eq!("bpe".parse::<CodeMode>().unwrap(), CodeMode::Bpe);
        assert_eq!("ULM".parse::<CodeMode>().unwrap(), CodeMode::Ulm);
    }

    #[test]
    fn test_unsupported_mode() {
        let err = "wordpiece".parse::<CodeMode>().unwrap_err();
        assert!(matches!(err, TokenizerError::UnsupportedMode(ref m) if m == "wordpiece"));
    }

    #[test]
    fn test_display_roundtrip() {
        for mode in [CodeMode::Single, CodeMode::Bpe, CodeMode::Ulm] {
            assert_eq!(mode.to_string().parse::<CodeMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_needs_model() {
        assert!(CodeMode::Ulm.needs_model());
        assert!(!CodeMode::Bpe.needs_model());
        assert!(!CodeMode::Single.needs_model());
    }
}
