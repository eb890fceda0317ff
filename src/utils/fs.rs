//! Filesystem helpers

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Replace `path` with `contents` without ever leaving a half-written file
///
/// The content goes to a temporary file in the same directory, which is then
/// renamed over the target. Parent directories are not created.
pub fn write_atomic(path: &Path, contents: &str) -> AppResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| AppError::io(dir, e))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|_| tmp.flush())
        .map_err(|e| AppError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| AppError::io(path, e.error))?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Read a UTF-8 file, reporting a missing file as [`AppError::FileNotFound`]
pub fn read_to_string(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))
}
