//! Python wrapper for CodeMode enum

use pyo3::prelude::*;
use subtok_tokenizer::CodeMode;

/// Python wrapper for CodeMode
#[pyclass(name = "CodeMode")]
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct PyCodeMode {
    pub(crate) inner: CodeMode,
}

#[pymethods]
impl PyCodeMode {
    /// Whole words after cleanup
    #[staticmethod]
    fn single() -> Self {
        Self {
            inner: CodeMode::Single,
        }
    }

    /// Greedy BPE subwords
    #[staticmethod]
    fn bpe() -> Self {
        Self {
            inner: CodeMode::Bpe,
        }
    }

    /// External unigram model
    #[staticmethod]
    fn ulm() -> Self {
        Self {
            inner: CodeMode::Ulm,
        }
    }

    fn __repr__(&self) -> String {
        format!("CodeMode.{}", self.inner)
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    /// Hash support for using in sets/dicts
    fn __hash__(&self) -> u64 {
        match self.inner {
            CodeMode::Single => 0,
            CodeMode::Bpe => 1,
            CodeMode::Ulm => 2,
        }
    }

    /// Equality comparison
    fn __eq__(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl From<CodeMode> for PyCodeMode {
    fn from(inner: CodeMode) -> Self {
        Self { inner }
    }
}
