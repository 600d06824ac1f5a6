//! In-place file overwrite.
//!
//! The target is opened with create + truncate, written, and synced. Because
//! the path itself is opened:
//! - a symlink target is followed and the file it points to is updated,
//! - an existing file keeps its permissions and ownership,
//! - a writable file in a read-only directory can still be replaced,
//! - no sibling or temporary file is ever created.
//!
//! Content must be fully prepared before calling, so the only window for a
//! partial file is a failure of the write itself (disk full, I/O error).

use crate::error::{ReceiptError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Replace the contents of `path` with `content`, creating the file if needed.
///
/// The parent directory must already exist. The handle is closed before
/// returning on every path.
///
/// # Errors
///
/// [`ReceiptError::OutputWrite`] if the file cannot be created, written or
/// synced.
pub fn overwrite_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    let mut file = File::create(path)
        .map_err(|e| write_error(path, format!("failed to create file: {}", e)))?;

    file.write_all(content.as_bytes())
        .map_err(|e| write_error(path, format!("failed to write file: {}", e)))?;

    file.sync_all()
        .map_err(|e| write_error(path, format!("failed to sync file to disk: {}", e)))?;

    Ok(())
}

fn write_error(target: &Path, reason: String) -> ReceiptError {
    ReceiptError::OutputWrite {
        path: target.to_path_buf(),
        reason,
    }
}
