// PyO3 Bindings Module
//
// Python bindings for the Pascal extractor, built with the `python` feature.

mod api;
mod declaration;
mod parser;

// Re-export for lib.rs
pub use api::{extract_files, is_pascal_source};
pub use declaration::PyDeclaration;
pub use parser::PyPascalParser;
