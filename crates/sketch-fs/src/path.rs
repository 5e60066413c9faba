//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Git reports paths with forward slashes and markdown links need them too,
/// so containment checks and link rendering go through this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the file name without its extension.
    pub fn file_stem(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(idx) if idx > 0 => Some(&name[..idx]),
            _ => Some(name),
        }
    }

    /// Whether this path is `dir` itself or lies somewhere below it.
    ///
    /// Compares whole components, so `/a/bc` is not inside `/a/b`.
    pub fn is_within(&self, dir: &NormalizedPath) -> bool {
        let dir = dir.inner.trim_end_matches('/');
        match self.inner.strip_prefix(dir) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Express this path relative to `root`.
    ///
    /// The leading separator is stripped. Returns `None` when the path is
    /// not located under `root`.
    pub fn relative_to(&self, root: &NormalizedPath) -> Option<Self> {
        if !self.is_within(root) {
            return None;
        }
        let root = root.inner.trim_end_matches('/');
        let rest = self.inner[root.len()..].trim_start_matches('/');
        Some(Self {
            inner: rest.to_string(),
        })
    }
}

/// Resolve `path` to an absolute path.
///
/// Existing paths are canonicalized (without the `\\?\` prefix on Windows);
/// paths that do not exist yet are joined onto the current directory.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.exists() {
        return dunce::canonicalize(path);
    }
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
