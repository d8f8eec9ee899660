// Declaration types for Pascal extraction
//
// A declaration is one matched `= class` or `= interface` line, or a
// placeholder synthesized for a parent that was referenced but never declared.
// Declarations live in a `DeclarationForest` arena; parent and child links
// are arena ids, never ownership.

use serde::{Deserialize, Serialize};

/// Index of a declaration inside its owning forest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclarationId(pub(crate) usize);

impl DeclarationId {
    /// Position of the declaration in the forest's flat sequence
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for DeclarationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Variant-specific data for a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeclarationKind {
    /// `TFoo = class(TParent, IBar, IBaz)`
    Class {
        /// Raw interface names in declaration order. Never resolved.
        interfaces: Vec<String>,
    },
    /// `IFoo = interface(IParent)`
    Interface {
        /// Interface GUID. Nothing populates it yet.
        guid: Option<String>,
    },
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Class { .. } => "class",
            DeclarationKind::Interface { .. } => "interface",
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A class or interface declaration extracted from Pascal source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declared identifier, e.g. `TFoo`
    pub namespace: String,
    /// Contiguous `///` block directly above the declaration
    pub documentation: Option<String>,
    /// Source label the declaration came from (absent for placeholders)
    pub filename: Option<String>,
    /// Zero-based line index (absent for placeholders)
    pub line_number: Option<usize>,
    /// Parent name as written in the source, before resolution
    pub parent_namespace: Option<String>,
    pub kind: DeclarationKind,
    parent: Option<DeclarationId>,
    children: Vec<DeclarationId>,
}

impl Declaration {
    fn new(namespace: String, parent_namespace: Option<String>, kind: DeclarationKind) -> Self {
        Self {
            namespace,
            documentation: None,
            filename: None,
            line_number: None,
            parent_namespace: parent_namespace.filter(|name| !name.is_empty()),
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create an unresolved class declaration
    pub fn class(
        namespace: impl Into<String>,
        parent_namespace: Option<String>,
        interfaces: Vec<String>,
    ) -> Self {
        Self::new(
            namespace.into(),
            parent_namespace,
            DeclarationKind::Class { interfaces },
        )
    }

    /// Create an unresolved interface declaration
    pub fn interface(namespace: impl Into<String>, parent_namespace: Option<String>) -> Self {
        Self::new(
            namespace.into(),
            parent_namespace,
            DeclarationKind::Interface { guid: None },
        )
    }

    /// Class stand-in for a parent that is referenced but never declared
    pub fn placeholder(namespace: impl Into<String>) -> Self {
        Self::class(namespace, None, Vec::new())
    }

    /// Attach source provenance and the documentation block
    pub fn with_provenance(
        mut self,
        filename: impl Into<String>,
        line_number: usize,
        documentation: Option<String>,
    ) -> Self {
        self.filename = Some(filename.into());
        self.line_number = Some(line_number);
        self.documentation = documentation.filter(|doc| !doc.is_empty());
        self
    }

    /// Resolved parent, set once during forest resolution
    pub fn parent(&self) -> Option<DeclarationId> {
        self.parent
    }

    /// Declarations whose resolved parent is this one, in resolution order
    pub fn children(&self) -> &[DeclarationId] {
        &self.children
    }

    /// Implemented interface names; empty for interfaces
    pub fn interfaces(&self) -> &[String] {
        match &self.kind {
            DeclarationKind::Class { interfaces } => interfaces,
            DeclarationKind::Interface { .. } => &[],
        }
    }

    pub fn guid(&self) -> Option<&str> {
        match &self.kind {
            DeclarationKind::Interface { guid } => guid.as_deref(),
            DeclarationKind::Class { .. } => None,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self.kind, DeclarationKind::Class { .. })
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.kind, DeclarationKind::Interface { .. })
    }

    /// True for declarations synthesized during resolution
    pub fn is_placeholder(&self) -> bool {
        self.filename.is_none() && self.line_number.is_none()
    }

    /// True when the declaration names a parent that resolution must link
    pub(crate) fn needs_parent(&self) -> bool {
        self.parent.is_none() && self.parent_namespace.is_some()
    }

    pub(crate) fn set_parent(&mut self, parent: DeclarationId) {
        debug_assert!(self.parent.is_none(), "parent is only set once");
        if self.parent.is_none() {
            self.parent = Some(parent);
        }
    }

    pub(crate) fn add_child(&mut self, child: DeclarationId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_parent_namespace_is_absent() {
        let decl = Declaration::class("TFoo", Some(String::new()), Vec::new());
        assert_eq!(decl.parent_namespace, None);
        assert!(!decl.needs_parent());
    }

    #[test]
    fn test_placeholder_has_no_provenance() {
        let decl = Declaration::placeholder("TObject");
        assert!(decl.is_class());
        assert!(decl.is_placeholder());
        assert_eq!(decl.parent_namespace, None);
        assert!(decl.interfaces().is_empty());
    }

    #[test]
    fn test_provenance_drops_empty_documentation() {
        let decl =
            Declaration::interface("IFoo", None).with_provenance("a.pas", 3, Some(String::new()));
        assert_eq!(decl.filename.as_deref(), Some("a.pas"));
        assert_eq!(decl.line_number, Some(3));
        assert_eq!(decl.documentation, None);
        assert!(!decl.is_placeholder());
        assert_eq!(decl.guid(), None);
        assert_eq!(decl.kind.to_string(), "interface");
    }

    #[test]
    fn test_add_child_is_idempotent() {
        let mut decl = Declaration::placeholder("TObject");
        decl.add_child(DeclarationId(1));
        decl.add_child(DeclarationId(1));
        decl.add_child(DeclarationId(2));
        assert_eq!(decl.children(), &[DeclarationId(1), DeclarationId(2)]);
    }
}
