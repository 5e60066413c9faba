//! Git staging adapter for git-sketch
//!
//! The sync pipeline deletes and regenerates whole directories on every run.
//! This crate reports working-tree status and stages paths so that removed
//! files are recorded in history alongside added and modified ones.

pub mod error;
pub mod repository;
pub mod stage;
pub mod status;

pub use error::{Error, Result};
pub use repository::GitRepository;
pub use stage::{DeleteOutcome, VersionControl, delete_dir_and_stage, stage_path};
pub use status::FileStatus;
