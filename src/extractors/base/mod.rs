// Base types for Pascal declaration extraction
//
// Modular structure:
// - types.rs: Declaration, DeclarationKind, DeclarationId
// - matcher.rs: LineMatcher, the single-capture pattern primitive
// - forest.rs: DeclarationForest arena and parent resolution
// - traversal.rs: ancestor/descendant walks over the resolved forest
// - record.rs: shallow JSON and key/value views of declarations

pub mod forest;
pub mod matcher;
pub mod record;
pub mod traversal;
pub mod types;

// Re-export key types for external use
pub use forest::DeclarationForest;
pub use matcher::LineMatcher;
pub use record::DeclarationRecord;
pub use types::{Declaration, DeclarationId, DeclarationKind};
