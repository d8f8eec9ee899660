//! Loading Pascal source files from disk.
//!
//! Delphi sources are often saved in an ANSI code page rather than UTF-8, so
//! invalid byte sequences are replaced instead of failing the whole file.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Check if a path has a Pascal/Delphi source extension
pub fn is_pascal_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| matches!(ext.as_str(), "pas" | "pp" | "dpr" | "dpk" | "lpr" | "inc"))
}

/// Read a source file, decoding invalid UTF-8 lossily
pub fn read_source(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read source file {}", path.display()))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            debug!("{} is not valid UTF-8, decoding lossily", path.display());
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Read every path into `(label, content)` pairs, skipping unreadable files
///
/// The label is the path as given, so it can be used as a filename label.
pub fn load_sources<P: AsRef<Path>>(paths: &[P]) -> Vec<(String, String)> {
    paths
        .iter()
        .filter_map(|path| {
            let path = path.as_ref();
            match read_source(path) {
                Ok(content) => Some((path.to_string_lossy().into_owned(), content)),
                Err(e) => {
                    warn!("Skipping {}: {:#}", path.display(), e);
                    None
                }
            }
        })
        .collect()
}
