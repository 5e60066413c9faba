//! Error types for sketch-git

use std::path::PathBuf;

/// Result type for sketch-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sketch-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] sketch_fs::Error),

    #[error("Not inside a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("Repository at {path} has no working directory")]
    BareRepository { path: PathBuf },

    #[error("Path {path} is outside the repository working directory")]
    OutsideRepository { path: PathBuf },
}
