//! Specialized line matchers for Pascal declarations.
//!
//! Every matcher except the interface declaration is a single-capture
//! `LineMatcher`. The interface declaration captures a name and the
//! remainder of the line through named groups.

use regex::Regex;

use super::patterns::PatternConfig;
use crate::error::{PascalError, Result};
use crate::extractors::base::matcher::compile;
use crate::extractors::base::{Declaration, LineMatcher};

/// Matches `///` documentation lines
#[derive(Debug, Clone)]
pub struct DocumentationMatcher {
    inner: LineMatcher,
}

impl DocumentationMatcher {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            inner: LineMatcher::new("documentation", pattern)?,
        })
    }

    /// Documentation text carried by the line, if any
    pub fn capture<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.inner.capture(line).filter(|text| !text.is_empty())
    }
}

/// Detects the line that opens the implementation section
#[derive(Debug, Clone)]
pub struct ImplementationDetector {
    inner: LineMatcher,
}

impl ImplementationDetector {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            inner: LineMatcher::new("implementation", pattern)?,
        })
    }

    pub fn detect(&self, line: &str) -> bool {
        self.inner.is_match(line)
    }
}

/// Matches `TFoo = class(TParent, IBar, IBaz)` lines
///
/// Name, ancestor and interface list are independent searches over the same
/// line, so each finds its own leftmost `= class`.
#[derive(Debug, Clone)]
pub struct ClassMatcher {
    declaration: LineMatcher,
    name: LineMatcher,
    parent: LineMatcher,
    interfaces: LineMatcher,
}

impl ClassMatcher {
    pub fn new(config: &PatternConfig) -> Result<Self> {
        Ok(Self {
            declaration: LineMatcher::new("class_declaration", &config.class_declaration)?,
            name: LineMatcher::new("class_name", &config.class_name)?,
            parent: LineMatcher::new("class_parent", &config.class_parent)?,
            interfaces: LineMatcher::new("interface_list", &config.interface_list)?,
        })
    }

    /// Unresolved class declaration for the line, if it declares one
    pub fn parse(&self, line: &str) -> Option<Declaration> {
        if !self.declaration.is_match(line) {
            return None;
        }

        let name = self.name.capture(line).unwrap_or_default();
        let parent = self.parent.capture(line).map(str::to_string);
        let interfaces = self
            .interfaces
            .capture(line)
            .filter(|list| !list.is_empty())
            .map(split_interfaces)
            .unwrap_or_default();

        Some(Declaration::class(name, parent, interfaces))
    }
}

/// Matches `IFoo = interface(IParent)` lines
///
/// The ancestor is searched in the text after `= interface`, not in the
/// whole line, so an interface declared alone on its line has no parent.
#[derive(Debug, Clone)]
pub struct InterfaceMatcher {
    declaration: Regex,
    parent: LineMatcher,
}

impl InterfaceMatcher {
    pub fn new(config: &PatternConfig) -> Result<Self> {
        let declaration = compile("interface_declaration", &config.interface_declaration)?;
        require_groups("interface_declaration", &declaration, &["name", "remainder"])?;
        Ok(Self {
            declaration,
            parent: LineMatcher::new("interface_parent", &config.interface_parent)?,
        })
    }

    /// Unresolved interface declaration for the line, if it declares one
    pub fn parse(&self, line: &str) -> Option<Declaration> {
        let caps = self.declaration.captures(line)?;
        let name = caps.name("name")?.as_str();
        let parent = caps
            .name("remainder")
            .and_then(|remainder| self.parent.capture(remainder.as_str()))
            .map(str::to_string);
        Some(Declaration::interface(name, parent))
    }
}

/// All matchers a parser needs, compiled from one configuration
#[derive(Debug, Clone)]
pub struct PascalMatchers {
    pub documentation: DocumentationMatcher,
    pub implementation: ImplementationDetector,
    pub class: ClassMatcher,
    pub interface: InterfaceMatcher,
}

impl PascalMatchers {
    pub fn from_config(config: &PatternConfig) -> Result<Self> {
        Ok(Self {
            documentation: DocumentationMatcher::new(&config.documentation)?,
            implementation: ImplementationDetector::new(&config.implementation)?,
            class: ClassMatcher::new(config)?,
            interface: InterfaceMatcher::new(config)?,
        })
    }

    /// Class first, then interface
    pub fn declaration(&self, line: &str) -> Option<Declaration> {
        self.class
            .parse(line)
            .or_else(|| self.interface.parse(line))
    }
}

/// Split a raw interface list on commas, trimming each entry
pub fn split_interfaces(list: &str) -> Vec<String> {
    list.split(',').map(|name| name.trim().to_string()).collect()
}

fn require_groups(matcher: &'static str, regex: &Regex, groups: &[&'static str]) -> Result<()> {
    for &group in groups {
        if !regex.capture_names().flatten().any(|name| name == group) {
            return Err(PascalError::MissingCaptureGroup { matcher, group });
        }
    }
    Ok(())
}
