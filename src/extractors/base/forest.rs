// DeclarationForest - arena and parent resolution for Pascal declarations
//
// Owns every declaration extracted by a parser, in discovery order. Parent
// and child links are `DeclarationId` indices into this arena, so the
// bidirectional links never form ownership cycles.

use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::types::{Declaration, DeclarationId};

/// Arena of declarations plus the derived identity and root maps
#[derive(Debug, Clone, Default)]
pub struct DeclarationForest {
    declarations: Vec<Declaration>,
    by_namespace: HashMap<String, DeclarationId>,
    roots: BTreeMap<String, DeclarationId>,
}

impl DeclarationForest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Append a declaration. Links are not touched until `resolve`.
    pub fn push(&mut self, declaration: Declaration) -> DeclarationId {
        let id = DeclarationId(self.declarations.len());
        self.declarations.push(declaration);
        id
    }

    pub fn get(&self, id: DeclarationId) -> Option<&Declaration> {
        self.declarations.get(id.0)
    }

    /// Flat declaration sequence, including synthesized placeholders
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeclarationId, &Declaration)> {
        self.declarations
            .iter()
            .enumerate()
            .map(|(index, decl)| (DeclarationId(index), decl))
    }

    /// Namespace to declaration map as of the last resolution
    pub fn by_namespace(&self) -> &HashMap<String, DeclarationId> {
        &self.by_namespace
    }

    /// Look up a declaration by namespace (last resolution's identity map)
    pub fn lookup(&self, namespace: &str) -> Option<&Declaration> {
        self.by_namespace
            .get(namespace)
            .and_then(|&id| self.get(id))
    }

    /// Root declarations keyed by namespace, as of the last resolution
    pub fn roots(&self) -> &BTreeMap<String, DeclarationId> {
        &self.roots
    }

    /// Link every unresolved `parent_namespace` and recompute the roots.
    ///
    /// The identity map is rebuilt from the whole arena with later
    /// declarations winning a shared namespace. Unknown parents become class
    /// placeholders appended to the arena. Declarations whose parent is
    /// already linked are skipped, so calling this again without new input
    /// leaves every link and the root map unchanged.
    pub fn resolve(&mut self) -> &BTreeMap<String, DeclarationId> {
        self.by_namespace = self
            .iter()
            .map(|(id, decl)| (decl.namespace.clone(), id))
            .collect();

        // Placeholders appended below never name a parent, so only the
        // declarations present at the start of the pass need visiting.
        let existing = self.declarations.len();
        let mut linked = 0usize;
        let mut synthesized = 0usize;

        for index in 0..existing {
            if !self.declarations[index].needs_parent() {
                continue;
            }
            let Some(parent_name) = self.declarations[index].parent_namespace.clone() else {
                continue;
            };

            let known = self.by_namespace.get(&parent_name).copied();
            let parent = match known {
                Some(id) => id,
                None => {
                    let id = self.push(Declaration::placeholder(parent_name.clone()));
                    debug!("Synthesized placeholder {} for undeclared parent", parent_name);
                    self.by_namespace.insert(parent_name, id);
                    synthesized += 1;
                    id
                }
            };

            let child = DeclarationId(index);
            self.declarations[index].set_parent(parent);
            self.declarations[parent.0].add_child(child);
            linked += 1;
        }

        self.roots = self
            .iter()
            .filter(|(_, decl)| decl.parent().is_none())
            .map(|(id, decl)| (decl.namespace.clone(), id))
            .collect();

        debug!(
            "Resolved {} parent links ({} placeholders), {} roots over {} declarations",
            linked,
            synthesized,
            self.roots.len(),
            self.declarations.len()
        );
        &self.roots
    }
}
