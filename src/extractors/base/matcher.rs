//! Single-capture line matcher.
//!
//! The leaf primitive every Pascal matcher is built from: one compiled
//! pattern with exactly one capture group, searched (not anchored) against a
//! single line.

use regex::Regex;

use crate::error::{PascalError, Result};

/// Wraps a pattern with exactly one capture group
#[derive(Debug, Clone)]
pub struct LineMatcher {
    name: &'static str,
    regex: Regex,
}

impl LineMatcher {
    /// Compile `pattern`, labelling errors with `name`
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        let regex = compile(name, pattern)?;
        // captures_len counts the implicit whole-match group
        let found = regex.captures_len() - 1;
        if found != 1 {
            return Err(PascalError::CaptureGroupCount {
                matcher: name,
                found,
            });
        }
        Ok(Self { name, regex })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// First capture of the first match, or `None` when the line doesn't match
    pub fn capture<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.regex
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// True when the line matches with a non-empty capture
    pub fn is_match(&self, line: &str) -> bool {
        self.capture(line).is_some_and(|text| !text.is_empty())
    }
}

/// Compile a pattern, mapping syntax errors to `PascalError::InvalidPattern`
pub(crate) fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| PascalError::InvalidPattern {
        matcher: name,
        source,
    })
}
