// Pascal Core - class and interface extraction for Delphi/Pascal sources
//
// Line-oriented pattern matching over the interface section of each unit,
// with parent resolution across every unit a parser has seen. The Python
// extension module is built with the `python` feature.

pub mod error;

// Declaration model, matchers and the Pascal parser
pub mod extractors;

// File loading helpers
pub mod utils;

// PyO3 bindings layer
#[cfg(feature = "python")]
pub mod bindings;

pub use error::{PascalError, Result};
pub use extractors::base::{
    Declaration, DeclarationForest, DeclarationId, DeclarationKind, DeclarationRecord,
    LineMatcher,
};
pub use extractors::pascal::{patterns::PatternConfig, PascalParser, Roots};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Pascal Core Python module
///
/// Provides Delphi/Pascal class and interface extraction.
#[cfg(feature = "python")]
#[pymodule]
fn pascal_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Add Python functions
    m.add_function(wrap_pyfunction!(bindings::extract_files, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::is_pascal_source, m)?)?;

    // Add Python classes
    m.add_class::<bindings::PyPascalParser>()?;
    m.add_class::<bindings::PyDeclaration>()?;

    Ok(())
}
