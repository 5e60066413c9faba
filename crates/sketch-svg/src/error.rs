//! Error types for sketch-svg

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] sketch_fs::Error),

    #[error("Malformed SVG: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed SVG attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Malformed SVG escape sequence: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("SVG is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Failed to serialize SVG: {0}")]
    Write(#[from] std::io::Error),

    #[error("Serialized SVG is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Cannot embed fonts: document has no root element")]
    NoRootElement,

    #[error("Failed to read font file {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
