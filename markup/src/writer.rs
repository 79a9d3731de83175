//! Writing the assembled document to disk.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use crate::config::MarkupConfig;
use crate::document::build_document;

/// Default output location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "test-fixtures/valid/sample-1mb.svg";

/// Generates the fixture at `path`, creating parent directories and
/// replacing any existing file. Returns the size reported by the filesystem.
///
/// Errors are returned as-is; a partially written file is left in place.
pub fn generate_file(path: &Path, config: &MarkupConfig) -> io::Result<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let bytes = build_document(config);

    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    file.flush()?;
    drop(file);

    let size = fs::metadata(path)?.len();
    tracing::debug!(path = %path.display(), size, "markup fixture written");
    Ok(size)
}
