// Forest navigation methods for DeclarationForest
//
// Parent chains and subtrees over the resolved links. A declaration may name
// itself (or a cycle of names) as its parent, so every walk tracks visits.

use std::collections::HashSet;

use super::forest::DeclarationForest;
use super::types::DeclarationId;

impl DeclarationForest {
    /// Parent chain from the immediate parent up to the root
    pub fn ancestors(&self, id: DeclarationId) -> Vec<DeclarationId> {
        let mut chain = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut current = self.get(id).and_then(|decl| decl.parent());

        while let Some(parent) = current {
            if !seen.insert(parent) {
                break;
            }
            chain.push(parent);
            current = self.get(parent).and_then(|decl| decl.parent());
        }
        chain
    }

    /// Every declaration below `id`, depth-first in child order
    pub fn descendants(&self, id: DeclarationId) -> Vec<DeclarationId> {
        let mut found = Vec::new();
        let mut seen = HashSet::from([id]);
        self.collect_descendants(id, &mut seen, &mut found);
        found
    }

    fn collect_descendants(
        &self,
        id: DeclarationId,
        seen: &mut HashSet<DeclarationId>,
        found: &mut Vec<DeclarationId>,
    ) {
        let Some(decl) = self.get(id) else {
            return;
        };
        for &child in decl.children() {
            if seen.insert(child) {
                found.push(child);
                self.collect_descendants(child, seen, found);
            }
        }
    }

    /// Nesting depth below the root (roots are 0)
    pub fn depth(&self, id: DeclarationId) -> usize {
        self.ancestors(id).len()
    }
}

#[cfg(test)]
mod tests {
    use crate::extractors::base::{Declaration, DeclarationForest};

    fn forest(pairs: &[(&str, Option<&str>)]) -> DeclarationForest {
        let mut forest = DeclarationForest::new();
        for (name, parent) in pairs {
            forest.push(Declaration::class(*name, parent.map(str::to_string), Vec::new()));
        }
        forest.resolve();
        forest
    }

    fn names(
        forest: &DeclarationForest,
        ids: Vec<crate::extractors::base::DeclarationId>,
    ) -> Vec<&str> {
        ids.into_iter()
            .map(|id| forest.get(id).unwrap().namespace.as_str())
            .collect()
    }

    #[test]
    fn test_ancestors_walk_to_root() {
        let forest = forest(&[("TC", Some("TB")), ("TB", Some("TA")), ("TA", None)]);
        let c = forest.by_namespace()["TC"];
        assert_eq!(names(&forest, forest.ancestors(c)), vec!["TB", "TA"]);
        assert_eq!(forest.depth(c), 2);
    }

    #[test]
    fn test_descendants_depth_first() {
        let forest = forest(&[
            ("TB", Some("TA")),
            ("TD", Some("TB")),
            ("TC", Some("TA")),
            ("TA", None),
        ]);
        let a = forest.by_namespace()["TA"];
        assert_eq!(names(&forest, forest.descendants(a)), vec!["TB", "TD", "TC"]);
    }

    #[test]
    fn test_cycles_terminate() {
        let forest = forest(&[("TX", Some("TY")), ("TY", Some("TX"))]);
        let x = forest.by_namespace()["TX"];
        assert_eq!(names(&forest, forest.ancestors(x)), vec!["TY"]);
        assert_eq!(names(&forest, forest.descendants(x)), vec!["TY"]);
        assert!(forest.roots().is_empty());
    }
}
