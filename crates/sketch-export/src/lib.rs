//! Render export for git-sketch
//!
//! Drives the external export tool (`sketchtool`) that renders a design
//! document's artboards to files. It handles:
//!
//! - Locating the tool from configuration or `PATH`
//! - Building the `export` invocation from configured options
//! - Running it and collecting the `Exported <path>` lines it prints

pub mod discovery;
pub mod error;
pub mod subprocess;

pub use discovery::{DEFAULT_TOOL_NAME, locate_tool};
pub use error::{Error, Result};
pub use subprocess::{ExportCommand, ExportOutput, RESERVED_OPTION, parse_exported, run_export};
