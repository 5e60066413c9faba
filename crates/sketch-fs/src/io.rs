//! Atomic and async I/O operations

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Acquires an advisory lock to prevent concurrent access.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Generate temp file path in same directory (ensures same filesystem)
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

    Ok(())
}

/// Async counterpart of [`write_atomic`], run on the blocking pool.
pub async fn write_file(path: &Path, content: impl Into<Vec<u8>>) -> Result<()> {
    let path = path.to_path_buf();
    let content = content.into();
    tokio::task::spawn_blocking(move || write_atomic(&path, &content)).await?
}

/// Read text content from a file.
pub async fn read_text(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(path, e))
}

/// Copy a file, creating the destination's parent directories.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io(parent, e))?;
    }
    tokio::fs::copy(from, to)
        .await
        .map_err(|e| Error::io(from, e))?;
    Ok(())
}

/// Recursively delete `path` if it exists.
///
/// Returns whether anything was removed.
pub async fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    if !tokio::fs::try_exists(path)
        .await
        .map_err(|e| Error::io(path, e))?
    {
        return Ok(false);
    }
    tokio::fs::remove_dir_all(path)
        .await
        .map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), "Removed directory");
    Ok(true)
}

/// List every regular file below `root`, depth first, sorted per directory.
pub async fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| Error::io(&dir, e))?;
        let mut children = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| Error::io(&dir, e))? {
            children.push(entry.path());
        }
        children.sort();

        for child in children.into_iter().rev() {
            let file_type = tokio::fs::metadata(&child)
                .await
                .map_err(|e| Error::io(&child, e))?;
            if file_type.is_dir() {
                pending.push(child);
            } else {
                files.push(child);
            }
        }
    }

    files.sort();
    Ok(files)
}
