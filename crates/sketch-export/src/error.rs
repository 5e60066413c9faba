//! Error types for export operations

use std::path::PathBuf;

/// Errors that can occur while running the export tool
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither the configured path nor `PATH` yields the tool
    #[error("Export tool not found: {configured} (also searched PATH for '{name}')")]
    ToolNotFound {
        /// The configured tool path
        configured: PathBuf,
        /// Executable name searched on PATH
        name: String,
    },

    /// Failed to spawn or wait on the tool
    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tool exited with non-zero status
    #[error("Export failed (exit code {code}): {stderr}")]
    CommandFailed {
        /// Exit code, or -1 when terminated by a signal
        code: i32,
        /// Captured stderr output
        stderr: String,
    },
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, Error>;
