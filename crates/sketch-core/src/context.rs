//! Shared state for one pipeline run.

use std::path::{Path, PathBuf};

use sketch_git::VersionControl;

use crate::Result;
use crate::config::Config;

/// Repository root, configuration and version control for one run.
///
/// Created once by the caller and passed by reference to every stage.
pub struct SyncContext<'a> {
    root: PathBuf,
    config: &'a Config,
    vcs: &'a dyn VersionControl,
}

impl<'a> SyncContext<'a> {
    /// `root` is made absolute; relative configured paths resolve against it.
    pub fn new(root: &Path, config: &'a Config, vcs: &'a dyn VersionControl) -> Result<Self> {
        let root = sketch_fs::path::absolutize(root).map_err(|e| sketch_fs::Error::io(root, e))?;
        Ok(Self { root, config, vcs })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    pub fn vcs(&self) -> &dyn VersionControl {
        self.vcs
    }

    /// Resolve a user-supplied path against the repository root.
    pub fn resolve(&self, path: &Path) -> Result<PathBuf> {
        let joined = self.root.join(path);
        let resolved =
            sketch_fs::path::absolutize(&joined).map_err(|e| sketch_fs::Error::io(&joined, e))?;
        Ok(resolved)
    }
}
