//! Error handling for Python bindings

use pyo3::{create_exception, exceptions::PyRuntimeError, PyErr};
use subtok_tokenizer::TokenizerError as RustTokenizerError;

/// Custom Python exception for tokenizer errors
create_exception!(
    subtok,
    TokenizerError,
    PyRuntimeError,
    "Error while building or using a vocabulary"
);

/// Convert a Rust TokenizerError to a Python exception
pub trait IntoPyErr {
    fn into_py_err(self) -> PyErr;
}

impl IntoPyErr for RustTokenizerError {
    fn into_py_err(self) -> PyErr {
        TokenizerError::new_err(self.to_string())
    }
}
