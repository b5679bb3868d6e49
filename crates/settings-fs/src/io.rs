//! Atomic I/O operations with file locking

use crate::{Error, Result};
use fs2::FileExt;
use serde::Serialize;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a half-written
/// file. An advisory lock is held on the temp file while writing.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    tracing::trace!(?path, bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read a file and parse it as a loose JSON tree.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|e| Error::json(path, e))
}

/// Serialize `value` as 2-space indented JSON and write it atomically.
///
/// A trailing newline is always appended.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value).map_err(|e| Error::json(path, e))?;
    content.push('\n');
    write_atomic(path, content.as_bytes())
}
