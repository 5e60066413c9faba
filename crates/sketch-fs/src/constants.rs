//! Fixed names used by the sketch directory layout.

/// Well-known names inside a git-ready sketch directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchPath {
    /// The `previews` directory inside an unpacked tree
    Previews,
    /// The generated `README.md` next to the container
    Readme,
    /// Stem of the primary document descriptor (`document.json`)
    DocumentDescriptor,
    /// File extension of a design container
    ContainerExtension,
    /// File extension of exported vector images
    VectorExtension,
    /// Default configuration file at the repository root
    ConfigFile,
}

impl SketchPath {
    /// Get the string representation of the path.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Previews => "previews",
            Self::Readme => "README.md",
            Self::DocumentDescriptor => "document",
            Self::ContainerExtension => "sketch",
            Self::VectorExtension => "svg",
            Self::ConfigFile => "gitsketch.toml",
        }
    }
}
