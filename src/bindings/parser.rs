// PyPascalParser - PyO3 wrapper for PascalParser
//
// Keeps the parser's forest alive across calls so Python can parse units one
// at a time and still get cross-unit parent resolution.

use super::PyDeclaration;
use crate::extractors::pascal::{patterns::PatternConfig, PascalParser, Roots};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

/// Python-accessible Pascal parser
#[pyclass(name = "Parser")]
pub struct PyPascalParser {
    inner: PascalParser,
}

impl PyPascalParser {
    fn root_snapshots(&self, roots: &Roots) -> PyResult<HashMap<String, PyDeclaration>> {
        let forest = self.inner.forest();
        roots
            .iter()
            .filter_map(|(name, &id)| forest.record(id).map(|record| (name, record)))
            .map(|(name, record)| Ok((name.clone(), PyDeclaration::from_record(&record)?)))
            .collect()
    }
}

#[pymethods]
impl PyPascalParser {
    /// Create a parser
    ///
    /// Args:
    ///     config_json (str | None): JSON object overriding any of the
    ///         `documentation`, `implementation`, `class_declaration`,
    ///         `class_name`, `class_parent`, `interface_list`,
    ///         `interface_declaration` and `interface_parent` patterns
    ///
    /// Raises:
    ///     ValueError: If the configuration or a pattern is invalid
    #[new]
    #[pyo3(signature = (config_json=None))]
    fn new(config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => PatternConfig::from_json(json)
                .map_err(|e| PyValueError::new_err(e.to_string()))?,
            None => PatternConfig::default(),
        };
        let inner =
            PascalParser::with_config(&config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyPascalParser { inner })
    }

    /// Parse one unit and return the roots of everything parsed so far
    ///
    /// Args:
    ///     filename (str): Label stored as each declaration's filename
    ///     content (str): Unit source text
    ///
    /// Returns:
    ///     dict[str, Declaration]: Root declarations keyed by namespace
    fn parse(&mut self, filename: &str, content: &str) -> PyResult<HashMap<String, PyDeclaration>> {
        let roots = self.inner.parse(filename, content).clone();
        self.root_snapshots(&roots)
    }

    /// Parse several units, scanning them in parallel, then resolve once
    ///
    /// Args:
    ///     files (list[tuple[str, str]]): (filename, content) pairs
    fn parse_batch(
        &mut self,
        py: Python<'_>,
        files: Vec<(String, String)>,
    ) -> PyResult<HashMap<String, PyDeclaration>> {
        let inner = &mut self.inner;
        // Release GIL for parallel scanning
        let roots = py.detach(move || inner.parse_batch(&files).clone());
        self.root_snapshots(&roots)
    }

    /// Read and parse a unit from disk
    fn parse_file(&mut self, path: &str) -> PyResult<HashMap<String, PyDeclaration>> {
        let roots = self.inner.parse_file(std::path::Path::new(path))?.clone();
        self.root_snapshots(&roots)
    }

    #[getter]
    fn roots(&self) -> PyResult<HashMap<String, PyDeclaration>> {
        self.root_snapshots(self.inner.roots())
    }

    /// Every declaration, including synthesized parents, in discovery order
    #[getter]
    fn declarations(&self) -> PyResult<Vec<PyDeclaration>> {
        self.inner
            .forest()
            .records()
            .iter()
            .map(PyDeclaration::from_record)
            .collect()
    }

    /// JSON array of every declaration
    fn to_json(&self) -> PyResult<String> {
        self.inner
            .forest()
            .to_json()
            .map_err(|e| PyValueError::new_err(format!("Serialization failed: {}", e)))
    }

    fn __len__(&self) -> usize {
        self.inner.declarations().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Parser(declarations={}, roots={})",
            self.inner.declarations().len(),
            self.inner.roots().len()
        )
    }
}
