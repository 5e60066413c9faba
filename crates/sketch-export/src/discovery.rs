//! Export tool discovery
//!
//! The configured tool path usually points inside an application bundle.
//! When it does not exist the tool is looked up on `PATH` by name instead.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Executable name searched on `PATH` when the configured tool is missing
pub const DEFAULT_TOOL_NAME: &str = "sketchtool";

/// Resolve the export tool.
///
/// Uses `configured` when it exists, otherwise the first executable named
/// `name` on `PATH`.
pub fn locate_tool(configured: &Path, name: &str) -> Result<PathBuf> {
    if configured.is_file() {
        tracing::debug!(tool = %configured.display(), "Using configured export tool");
        return Ok(configured.to_path_buf());
    }

    let found = std::env::var_os("PATH").and_then(|path| search_path(name, &path));
    match found {
        Some(tool) => {
            tracing::debug!(tool = %tool.display(), "Found export tool on PATH");
            Ok(tool)
        }
        None => Err(Error::ToolNotFound {
            configured: configured.to_path_buf(),
            name: name.to_string(),
        }),
    }
}

/// First executable called `name` in the directories of `path_var`.
fn search_path(name: &str, path_var: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
