//! The sync pipeline
//!
//! This module provides:
//! - **unpack**: replace the unpacked tree with the container's contents
//! - **export**: re-export artboards and post-process the SVGs
//! - **readme**: refresh the README image listing
//! - **workflow**: the `stage`, `import` and `generate` entry points

mod export;
mod readme;
mod unpack;
mod workflow;

use std::path::PathBuf;

use sketch_svg::SvgReport;

pub use export::{ExportedContent, export_content};
pub use readme::update_readme;
pub use unpack::unpack_container;
pub use workflow::{generate, import, stage};

/// What a `stage` or `import` run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Absolute path of the staged container
    pub container: PathBuf,
    /// JSON files rewritten by the normalizer
    pub normalized: usize,
    /// Exported artboards, in the order the tool reported them
    pub exported: Vec<PathBuf>,
    /// Post-processing result per exported SVG
    pub svgs: Vec<(PathBuf, SvgReport)>,
    /// README that was refreshed, if README generation is enabled
    pub readme: Option<PathBuf>,
    /// Recoverable problems, in the order they occurred
    pub warnings: Vec<String>,
}

impl SyncReport {
    fn new(container: PathBuf) -> Self {
        Self {
            container,
            ..Self::default()
        }
    }

    /// Log `message` and keep it for the final summary.
    fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{}", message);
        self.warnings.push(message);
    }
}
