// Pascal Core Utilities Module
//
// Helpers used around the extractor but outside the matching pipeline.

/// Source file loading (lossy decoding for ANSI-encoded units)
pub mod source;
