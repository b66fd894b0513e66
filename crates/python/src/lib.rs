//! Python bindings for subtok
//!
//! This module exposes the code token vocabulary to the Python training
//! pipeline.

use pyo3::prelude::*;

mod code_mode;
mod error;
mod vocabulary;

use code_mode::PyCodeMode;
use vocabulary::PyVocabulary;

/// subtok: subword vocabulary for source code tokens
#[pymodule]
fn subtok(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyVocabulary>()?;
    m.add_class::<PyCodeMode>()?;
    m.add("TokenizerError", m.py().get_type_bound::<error::TokenizerError>())?;

    // Add version info
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
