// PyDeclaration - PyO3 wrapper for a declaration record
//
// Holds an owned snapshot of one declaration. Parent and children are
// exposed as namespaces, matching the shallow JSON view.

use crate::extractors::base::DeclarationRecord;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Python-accessible Declaration snapshot
///
/// Represents a class or interface extracted from a Pascal unit.
/// All fields are read-only from Python.
#[pyclass(name = "Declaration")]
#[derive(Clone)]
pub struct PyDeclaration {
    namespace: String,
    kind: String,
    documentation: Option<String>,
    filename: Option<String>,
    line_number: Option<usize>,
    parent_namespace: Option<String>,
    parent: Option<String>,
    children: Vec<String>,
    interfaces: Option<Vec<String>>,
    guid: Option<String>,
    json: String,
}

impl PyDeclaration {
    /// Snapshot a record, rendering its JSON once up front
    pub fn from_record(record: &DeclarationRecord<'_>) -> PyResult<Self> {
        let json = record
            .to_json()
            .map_err(|e| PyValueError::new_err(format!("Serialization failed: {}", e)))?;

        Ok(PyDeclaration {
            namespace: record.namespace.to_string(),
            kind: record.kind.to_string(),
            documentation: record.documentation.map(str::to_string),
            filename: record.filename.map(str::to_string),
            line_number: record.line_number,
            parent_namespace: record.parent_namespace.map(str::to_string),
            parent: record.parent.map(str::to_string),
            children: record.children.iter().map(|c| c.to_string()).collect(),
            interfaces: record.interfaces.map(|list| list.to_vec()),
            guid: record.guid.flatten().map(str::to_string),
            json,
        })
    }
}

#[pymethods]
impl PyDeclaration {
    #[getter]
    fn namespace(&self) -> String {
        self.namespace.clone()
    }

    #[getter]
    fn kind(&self) -> String {
        self.kind.clone()
    }

    #[getter]
    fn documentation(&self) -> Option<String> {
        self.documentation.clone()
    }

    #[getter]
    fn filename(&self) -> Option<String> {
        self.filename.clone()
    }

    #[getter]
    fn line_number(&self) -> Option<usize> {
        self.line_number
    }

    #[getter]
    fn parent_namespace(&self) -> Option<String> {
        self.parent_namespace.clone()
    }

    #[getter]
    fn parent(&self) -> Option<String> {
        self.parent.clone()
    }

    #[getter]
    fn children(&self) -> Vec<String> {
        self.children.clone()
    }

    /// Interface names for classes, None for interfaces
    #[getter]
    fn interfaces(&self) -> Option<Vec<String>> {
        self.interfaces.clone()
    }

    #[getter]
    fn guid(&self) -> Option<String> {
        self.guid.clone()
    }

    fn to_json(&self) -> String {
        self.json.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "Declaration(namespace='{}', kind='{}', parent={:?})",
            self.namespace, self.kind, self.parent_namespace
        )
    }
}
