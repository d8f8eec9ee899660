//! Declaration extractors.
//!
//! # Architecture
//!
//! - `base` - declaration model, the single-capture `LineMatcher`, and the
//!   `DeclarationForest` arena that resolves parents into a forest
//! - `pascal` - Delphi/Pascal matchers, line scanner and `PascalParser`

pub mod base;
pub mod pascal;

// Re-export the public API
pub use base::{Declaration, DeclarationForest, DeclarationId, DeclarationKind};
pub use pascal::PascalParser;
