//! PyO3 wrapper for the Translator struct
//!
//! Exposed to Python as `Vocabulary`, the name the training pipeline uses.

use pyo3::prelude::*;
use std::path::PathBuf;
use subtok_tokenizer::{CodeMode, Translator, VocabularyConfig};

use crate::code_mode::PyCodeMode;
use crate::error::IntoPyErr;

/// Python wrapper for the subtok Translator
#[pyclass(name = "Vocabulary")]
pub struct PyVocabulary {
    inner: Translator,
}

#[pymethods]
impl PyVocabulary {
    /// Load a vocabulary file for the given code representation
    #[new]
    #[pyo3(signature = (vocab_path, code_mode, ulm_model=None))]
    fn new(vocab_path: PathBuf, code_mode: &str, ulm_model: Option<PathBuf>) -> PyResult<Self> {
        let mode: CodeMode = code_mode.parse().map_err(IntoPyErr::into_py_err)?;
        let config = VocabularyConfig {
            ulm_model,
            ..VocabularyConfig::new(vocab_path, mode)
        };
        let inner = Translator::new(config).map_err(|e| e.into_py_err())?;
        Ok(PyVocabulary { inner })
    }

    /// Load from a JSON configuration file
    #[staticmethod]
    fn from_config(path: PathBuf) -> PyResult<Self> {
        let inner = Translator::from_config_file(&path).map_err(|e| e.into_py_err())?;
        Ok(PyVocabulary { inner })
    }

    /// Translate a raw code token to ids
    #[pyo3(signature = (token, is_subtokenized=false))]
    fn translate(&self, token: &str, is_subtokenized: bool) -> PyResult<Vec<u32>> {
        self.inner
            .translate(token, is_subtokenized)
            .map_err(|e| e.into_py_err())
    }

    /// Translate a batch of tokens, releasing the GIL
    #[pyo3(signature = (tokens, is_subtokenized=false))]
    fn translate_batch(
        &self,
        py: Python<'_>,
        tokens: Vec<String>,
        is_subtokenized: bool,
    ) -> PyResult<Vec<Vec<u32>>> {
        let inner = &self.inner;
        py.allow_threads(|| inner.translate_batch(&tokens, is_subtokenized))
            .map_err(|e| e.into_py_err())
    }

    /// Segment a token into BPE subwords
    fn tokenize(&self, token: &str) -> PyResult<Vec<String>> {
        let pieces = self.inner.segment(token).map_err(|e| e.into_py_err())?;
        Ok(pieces.into_iter().map(String::from).collect())
    }

    /// Look up one subword, unknown ones map to 0
    fn lookup(&self, token: &str) -> PyResult<u32> {
        self.inner.lookup(token).map_err(|e| e.into_py_err())
    }

    /// Number of ids, padding included
    #[getter]
    fn vocab_dim(&self) -> usize {
        self.inner.vocab_size()
    }

    /// Active code representation
    #[getter]
    fn code_mode(&self) -> PyCodeMode {
        self.inner.mode().into()
    }

    fn __len__(&self) -> usize {
        self.inner.vocab_size()
    }

    fn __repr__(&self) -> String {
        format!(
            "Vocabulary(code_mode={}, vocab_dim={})",
            self.inner.mode(),
            self.inner.vocab_size()
        )
    }
}
