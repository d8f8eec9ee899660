//! Pascal/Delphi declaration extractor.
//!
//! `PascalParser` scans source line by line, recognizes class and interface
//! declarations in the interface section, attaches the `///` block directly
//! above each one, and keeps every declaration it has ever seen in a
//! `DeclarationForest`. Each `parse` call appends to that forest and resolves
//! parent names across everything parsed so far, so a class declared in one
//! unit can be the parent of a class in another.
//!
//! Scanning stops for good at the first line containing `implementation`.
//! Lines that don't have a recognized shape are silently skipped.

pub mod matchers;
pub mod patterns;
pub mod scanner;


use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::error::Result;
use crate::extractors::base::{Declaration, DeclarationForest, DeclarationId};
use crate::utils::source::read_source;
use matchers::PascalMatchers;
use patterns::PatternConfig;
use scanner::scan_lines;

static DEFAULT_MATCHERS: LazyLock<PascalMatchers> = LazyLock::new(|| {
    PascalMatchers::from_config(&PatternConfig::default()).expect("default patterns compile")
});

/// Root declarations keyed by namespace
pub type Roots = BTreeMap<String, DeclarationId>;

/// Extracts class and interface declarations from Pascal sources
#[derive(Debug, Clone)]
pub struct PascalParser {
    matchers: PascalMatchers,
    forest: DeclarationForest,
}

impl Default for PascalParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PascalParser {
    /// Parser with the built-in Delphi patterns
    pub fn new() -> Self {
        Self {
            matchers: DEFAULT_MATCHERS.clone(),
            forest: DeclarationForest::new(),
        }
    }

    /// Parser with custom patterns; invalid patterns are rejected here
    pub fn with_config(config: &PatternConfig) -> Result<Self> {
        Ok(Self {
            matchers: PascalMatchers::from_config(config)?,
            forest: DeclarationForest::new(),
        })
    }

    /// Extract declarations from one file and re-resolve the whole forest
    pub fn parse(&mut self, filename: &str, content: &str) -> &Roots {
        let declarations = self.scan(filename, content);
        debug!(
            "Extracted {} declarations from {}",
            declarations.len(),
            filename
        );
        for declaration in declarations {
            self.forest.push(declaration);
        }
        self.forest.resolve()
    }

    /// Extract declarations from several files, then resolve once.
    ///
    /// Files are scanned in parallel and appended in input order. Because
    /// resolution runs after every file is in the forest, a parent declared
    /// in a later file links to its real declaration instead of a placeholder.
    pub fn parse_batch<S>(&mut self, files: &[(S, S)]) -> &Roots
    where
        S: AsRef<str> + Sync,
    {
        let parser = &*self;
        let scanned: Vec<Vec<Declaration>> = files
            .par_iter()
            .map(|(filename, content)| parser.scan(filename.as_ref(), content.as_ref()))
            .collect();

        let total: usize = scanned.iter().map(Vec::len).sum();
        debug!("Extracted {} declarations from {} files", total, files.len());

        for declaration in scanned.into_iter().flatten() {
            self.forest.push(declaration);
        }
        self.forest.resolve()
    }

    /// Read a file from disk and parse it, labelled with its path
    pub fn parse_file(&mut self, path: &Path) -> anyhow::Result<&Roots> {
        let content = read_source(path)?;
        let label = path.to_string_lossy().into_owned();
        Ok(self.parse(&label, &content))
    }

    /// Scan one file without touching the forest
    pub fn scan(&self, filename: &str, content: &str) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        let mut docs = String::new();

        for line in scan_lines(content) {
            if self.matchers.implementation.detect(line.text) {
                debug!(
                    "Reached implementation section of {} at line {}",
                    filename, line.index
                );
                break;
            }

            if let Some(declaration) = self.matchers.declaration(line.text) {
                trace!(
                    "{}:{} {} {}",
                    filename,
                    line.index,
                    declaration.kind,
                    declaration.namespace
                );
                let documentation = (!docs.is_empty()).then(|| docs.clone());
                declarations.push(declaration.with_provenance(
                    filename,
                    line.index,
                    documentation,
                ));
            }

            // Only an unbroken run of doc lines reaches the next declaration.
            // Every doc line, the first included, is preceded by a newline.
            match self.matchers.documentation.capture(line.text) {
                Some(text) => {
                    docs.push('\n');
                    docs.push_str(text);
                }
                None => docs.clear(),
            }
        }

        declarations
    }

    /// Re-run resolution without new input
    pub fn resolve(&mut self) -> &Roots {
        self.forest.resolve()
    }

    /// Roots from the most recent resolution
    pub fn roots(&self) -> &Roots {
        self.forest.roots()
    }

    /// Root declarations with their namespaces
    pub fn root_declarations(&self) -> impl Iterator<Item = (&str, &Declaration)> {
        self.forest
            .roots()
            .iter()
            .filter_map(|(name, &id)| self.forest.get(id).map(|decl| (name.as_str(), decl)))
    }

    /// Every declaration, scanned and synthesized, in discovery order
    pub fn declarations(&self) -> &[Declaration] {
        self.forest.declarations()
    }

    /// Namespace to declaration map from the most recent resolution
    pub fn declarations_by_namespace(&self) -> &HashMap<String, DeclarationId> {
        self.forest.by_namespace()
    }

    pub fn get(&self, id: DeclarationId) -> Option<&Declaration> {
        self.forest.get(id)
    }

    pub fn lookup(&self, namespace: &str) -> Option<&Declaration> {
        self.forest.lookup(namespace)
    }

    pub fn forest(&self) -> &DeclarationForest {
        &self.forest
    }
}
