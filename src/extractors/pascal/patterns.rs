//! Pattern configuration for the Pascal extractor.
//!
//! Every matcher is driven by a regular expression held here. The defaults
//! recognize Delphi `type` section declarations; callers may load an
//! alternative set from JSON. Bad patterns are rejected when the parser is
//! built, never while scanning.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Documentation line: the whole line, when it carries a `///` marker
pub const DOCUMENTATION_PATTERN: &str = r"(.*///.*)";

/// Start of the implementation section (case-sensitive substring)
pub const IMPLEMENTATION_PATTERN: &str = r"(.*implementation.*)";

/// Any `<not "=">= class ...` line
pub const CLASS_DECLARATION_PATTERN: &str = r"([^=]+= *class.*)";

/// Identifier before the leftmost `= class`
pub const CLASS_NAME_PATTERN: &str = r"(\w+) *= *class";

/// First identifier inside the parenthesis after `= class (`
pub const CLASS_PARENT_PATTERN: &str = r"= *class *\( *(\w+)";

/// Everything inside the parenthesis after its first comma
pub const INTERFACE_LIST_PATTERN: &str = r"= *class *\([^,]+, *([^)]+) *\)";

/// Interface name and whatever follows `= interface`
pub const INTERFACE_DECLARATION_PATTERN: &str =
    r"(?P<name>\w+) *= *interface *(?P<remainder>.*)";

/// Ancestor of an interface, searched in the declaration remainder
pub const INTERFACE_PARENT_PATTERN: &str = r"= *interface *\( *(\w+) *\)";

/// Regular expressions used by `PascalParser`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Single capture group: the documentation text
    pub documentation: String,
    /// Single capture group: non-empty when scanning must stop
    pub implementation: String,
    /// Single capture group: gate for class declaration lines
    pub class_declaration: String,
    /// Single capture group: class name
    pub class_name: String,
    /// Single capture group: first ancestor of a class
    pub class_parent: String,
    /// Single capture group: raw interface list of a class
    pub interface_list: String,
    /// Named groups `name` and `remainder`
    pub interface_declaration: String,
    /// Single capture group, searched in the interface `remainder`
    pub interface_parent: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            documentation: DOCUMENTATION_PATTERN.to_string(),
            implementation: IMPLEMENTATION_PATTERN.to_string(),
            class_declaration: CLASS_DECLARATION_PATTERN.to_string(),
            class_name: CLASS_NAME_PATTERN.to_string(),
            class_parent: CLASS_PARENT_PATTERN.to_string(),
            interface_list: INTERFACE_LIST_PATTERN.to_string(),
            interface_declaration: INTERFACE_DECLARATION_PATTERN.to_string(),
            interface_parent: INTERFACE_PARENT_PATTERN.to_string(),
        }
    }
}

impl PatternConfig {
    /// Decode a JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PascalError;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PatternConfig::from_json(r#"{"documentation": "(.*//!.*)"}"#).unwrap();
        assert_eq!(config.documentation, "(.*//!.*)");
        assert_eq!(config.implementation, IMPLEMENTATION_PATTERN);
        assert_eq!(config.interface_list, INTERFACE_LIST_PATTERN);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = PatternConfig::from_json("{documentation").unwrap_err();
        assert!(matches!(err, PascalError::InvalidConfig(_)));
    }
}
