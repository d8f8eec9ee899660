// Shallow serialization views of declarations
//
// Records flatten a declaration's scalar fields. Relationship fields are
// rendered as the target's namespace, never as nested declarations.

use serde::Serialize;
use std::collections::BTreeMap;

use super::forest::DeclarationForest;
use super::types::{Declaration, DeclarationId, DeclarationKind};

/// Serializable snapshot of one declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclarationRecord<'a> {
    pub namespace: &'a str,
    pub kind: &'static str,
    pub documentation: Option<&'a str>,
    pub filename: Option<&'a str>,
    pub line_number: Option<usize>,
    pub parent_namespace: Option<&'a str>,
    pub parent: Option<&'a str>,
    pub children: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<Option<&'a str>>,
}

impl<'a> DeclarationRecord<'a> {
    fn new(forest: &'a DeclarationForest, decl: &'a Declaration) -> Self {
        let name_of = move |id: DeclarationId| forest.get(id).map(|d| d.namespace.as_str());
        let (interfaces, guid) = match &decl.kind {
            DeclarationKind::Class { interfaces } => (Some(interfaces.as_slice()), None),
            DeclarationKind::Interface { guid } => (None, Some(guid.as_deref())),
        };

        Self {
            namespace: &decl.namespace,
            kind: decl.kind.as_str(),
            documentation: decl.documentation.as_deref(),
            filename: decl.filename.as_deref(),
            line_number: decl.line_number,
            parent_namespace: decl.parent_namespace.as_deref(),
            parent: decl.parent().and_then(name_of),
            children: decl.children().iter().filter_map(|&id| name_of(id)).collect(),
            interfaces,
            guid,
        }
    }

    /// JSON object of the record
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Flat key/value rendering; absent values become empty strings
    pub fn to_fields(&self) -> BTreeMap<&'static str, String> {
        let text = |value: Option<&str>| value.unwrap_or_default().to_string();

        let mut fields = BTreeMap::new();
        fields.insert("namespace", self.namespace.to_string());
        fields.insert("kind", self.kind.to_string());
        fields.insert("documentation", text(self.documentation));
        fields.insert("filename", text(self.filename));
        fields.insert(
            "line_number",
            self.line_number.map(|n| n.to_string()).unwrap_or_default(),
        );
        fields.insert("parent_namespace", text(self.parent_namespace));
        fields.insert("parent", text(self.parent));
        fields.insert("children", self.children.join(","));
        if let Some(interfaces) = self.interfaces {
            fields.insert("interfaces", interfaces.join(","));
        }
        if let Some(guid) = self.guid {
            fields.insert("guid", text(guid));
        }
        fields
    }

    /// Multi-line human readable summary
    pub fn describe(&self) -> String {
        format!(
            "{}\n    - parent: {}\n    - interfaces: {}\n    - docs: {}\n    - filename: {}\n    - line no: {}\n",
            self.namespace,
            self.parent_namespace.unwrap_or_default(),
            self.interfaces.map(|list| list.join(",")).unwrap_or_default(),
            self.documentation.unwrap_or_default(),
            self.filename.unwrap_or_default(),
            self.line_number.map(|n| n.to_string()).unwrap_or_default(),
        )
    }
}

impl DeclarationForest {
    /// Record view of one declaration
    pub fn record(&self, id: DeclarationId) -> Option<DeclarationRecord<'_>> {
        self.get(id).map(|decl| DeclarationRecord::new(self, decl))
    }

    /// Record views of every declaration, in arena order
    pub fn records(&self) -> Vec<DeclarationRecord<'_>> {
        self.declarations()
            .iter()
            .map(|decl| DeclarationRecord::new(self, decl))
            .collect()
    }

    /// JSON array of every declaration record
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> DeclarationForest {
        let mut forest = DeclarationForest::new();
        forest.push(
            Declaration::class(
                "TFoo",
                Some("TObject".to_string()),
                vec!["IBar".to_string(), "IBaz".to_string()],
            )
            .with_provenance("foo.pas", 4, Some("/// Foo".to_string())),
        );
        forest.push(Declaration::interface("IBar", None).with_provenance("foo.pas", 1, None));
        forest.resolve();
        forest
    }

    #[test]
    fn test_class_record_json() {
        let forest = sample();
        let foo = forest.by_namespace()["TFoo"];
        let value: serde_json::Value =
            serde_json::from_str(&forest.record(foo).unwrap().to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "namespace": "TFoo",
                "kind": "class",
                "documentation": "/// Foo",
                "filename": "foo.pas",
                "line_number": 4,
                "parent_namespace": "TObject",
                "parent": "TObject",
                "children": [],
                "interfaces": ["IBar", "IBaz"],
            })
        );
    }

    #[test]
    fn test_placeholder_and_interface_records() {
        let forest = sample();
        let object = forest.record(forest.by_namespace()["TObject"]).unwrap();
        assert_eq!(object.filename, None);
        assert_eq!(object.children, vec!["TFoo"]);

        let bar = forest.record(forest.by_namespace()["IBar"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&bar.to_json().unwrap()).unwrap();
        assert_eq!(value["kind"], "interface");
        assert!(value["guid"].is_null());
        assert!(value.get("interfaces").is_none());
    }

    #[test]
    fn test_to_fields_flattens_values() {
        let forest = sample();
        let fields = forest.record(forest.by_namespace()["TFoo"]).unwrap().to_fields();
        assert_eq!(fields["interfaces"], "IBar,IBaz");
        assert_eq!(fields["line_number"], "4");
        assert_eq!(fields["parent"], "TObject");
        assert!(!fields.contains_key("guid"));

        let fields = forest.record(forest.by_namespace()["TObject"]).unwrap().to_fields();
        assert_eq!(fields["filename"], "");
        assert_eq!(fields["children"], "TFoo");
    }

    #[test]
    fn test_describe_lists_interfaces() {
        let forest = sample();
        let text = forest.record(forest.by_namespace()["TFoo"]).unwrap().describe();
        assert!(text.starts_with("TFoo\n"));
        assert!(text.contains("- parent: TObject"));
        assert!(text.contains("- interfaces: IBar,IBaz"));
        assert!(text.contains("- line no: 4"));
    }

    #[test]
    fn test_forest_json_is_an_array() {
        let forest = sample();
        let value: serde_json::Value = serde_json::from_str(&forest.to_json().unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
    }
}
