//! Error types for pattern construction.
//!
//! Matching a line never fails: a line either has a recognized shape or it
//! contributes nothing. The only fatal condition is a pattern that cannot be
//! compiled into a usable matcher, and that is reported before any scanning.

use thiserror::Error;

/// Errors raised while building matchers or loading a pattern configuration.
#[derive(Debug, Error)]
pub enum PascalError {
    /// The regular expression did not compile.
    #[error("invalid pattern for {matcher}: {source}")]
    InvalidPattern {
        matcher: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A single-capture matcher was given a pattern with the wrong group count.
    #[error("pattern for {matcher} must have exactly one capture group, found {found}")]
    CaptureGroupCount { matcher: &'static str, found: usize },

    /// A consolidated matcher pattern lacks one of its named groups.
    #[error("pattern for {matcher} is missing the named group `{group}`")]
    MissingCaptureGroup {
        matcher: &'static str,
        group: &'static str,
    },

    /// A pattern configuration document could not be decoded.
    #[error("invalid pattern configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PascalError>;
