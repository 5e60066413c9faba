//! Error types for sketch-docs

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot link {path}: not inside repository root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
}
