// API Functions - PyO3-exposed functions for Python
//
// One-shot helpers for callers that don't need to keep a parser around.

use super::PyDeclaration;
use crate::extractors::pascal::PascalParser;
use crate::utils::source::{is_pascal_source as is_pascal_path, load_sources};
use pyo3::prelude::*;
use std::path::Path;

/// Extract declarations from Pascal files on disk
///
/// Unreadable files are logged and skipped. Files are scanned in parallel and
/// resolved together, so parents declared in any of them are linked.
///
/// Args:
///     paths (list[str]): Paths of the units to parse
///
/// Returns:
///     list[Declaration]: Every declaration, including synthesized parents
#[pyfunction]
#[pyo3(signature = (paths))]
pub fn extract_files(py: Python<'_>, paths: Vec<String>) -> PyResult<Vec<PyDeclaration>> {
    // Release GIL for file reading and parallel scanning
    let parser = py.detach(move || {
        let sources = load_sources(&paths);
        let mut parser = PascalParser::new();
        parser.parse_batch(&sources);
        parser
    });

    parser
        .forest()
        .records()
        .iter()
        .map(PyDeclaration::from_record)
        .collect()
}

/// Check whether a path has a Pascal/Delphi source extension
///
/// Args:
///     file_path (str): File path (e.g., "src/Unit1.pas")
///
/// Returns:
///     bool: True for .pas, .pp, .dpr, .dpk, .lpr and .inc files
#[pyfunction]
#[pyo3(signature = (file_path))]
pub fn is_pascal_source(file_path: &str) -> bool {
    is_pascal_path(Path::new(file_path))
}
