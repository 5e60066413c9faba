//! Core orchestration layer for git-sketch
//!
//! Ties the component crates into the three workflows:
//!
//! - **stage**: unpack a container, normalize its JSON, export and
//!   post-process artboards, stage everything and refresh the README
//! - **import**: copy a container into its own directory, then stage it
//! - **generate**: pack an unpacked tree back into a container
//!
//! Every stage runs sequentially. A fatal error stops the run where it
//! happened; nothing is rolled back.

pub mod config;
pub mod context;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod sync;

pub use config::{Config, ExportConfig, FontsConfig};
pub use context::SyncContext;
pub use error::{Error, Result};
pub use layout::SketchLayout;
pub use normalize::{NormalizeReport, normalize_dir, normalize_json};
pub use sync::{SyncReport, export_content, generate, import, stage, unpack_container, update_readme};
