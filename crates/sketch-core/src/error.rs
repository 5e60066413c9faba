//! Error types for sketch-core

use std::path::PathBuf;

/// Result type for sketch-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the sync pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found at expected path
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// A required configuration key is absent
    #[error("Missing required configuration key: {key}")]
    MissingConfigKey { key: String },

    /// Source container or directory does not exist
    #[error("Source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// `generate` was asked to pack a directory that was never unpacked
    #[error("Unable to generate sketch file: could not find {path}")]
    UnpackedNotFound { path: PathBuf },

    /// A path has no parent directory or file name to derive the layout from
    #[error("Invalid sketch path: {path}")]
    InvalidLayout { path: PathBuf },

    /// A JSON file in the unpacked tree could not be parsed
    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // Transparent wrappers for component errors
    #[error(transparent)]
    Fs(#[from] sketch_fs::Error),

    #[error(transparent)]
    Archive(#[from] sketch_archive::Error),

    #[error(transparent)]
    Git(#[from] sketch_git::Error),

    #[error(transparent)]
    Export(#[from] sketch_export::Error),

    #[error(transparent)]
    Svg(#[from] sketch_svg::Error),

    #[error(transparent)]
    Docs(#[from] sketch_docs::Error),

    /// Blocking task panicked or was cancelled
    #[error(transparent)]
    Task(#[from] tokio::task::JoinError),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
