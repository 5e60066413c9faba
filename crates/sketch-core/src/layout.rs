//! Paths of a sketch directory.
//!
//! ```text
//! <name>/
//! ├── <name>.sketch       container
//! ├── <unpacked>/         unpacked tree
//! ├── <export.to>/        exported artboards
//! └── README.md
//! ```

use std::path::{Path, PathBuf};

use sketch_fs::SketchPath;

use crate::config::Config;
use crate::{Error, Result};

/// Every path the pipeline touches for one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchLayout {
    pub container: PathBuf,
    pub parent_dir: PathBuf,
    pub unpacked_dir: PathBuf,
    pub previews_dir: PathBuf,
    pub export_dir: PathBuf,
    pub readme: PathBuf,
}

impl SketchLayout {
    /// Layout around an existing or intended container file.
    pub fn from_container(container: &Path, config: &Config) -> Result<Self> {
        let parent_dir = container
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| Error::InvalidLayout {
                path: container.to_path_buf(),
            })?
            .to_path_buf();

        let unpacked_dir = parent_dir.join(&config.unpacked);
        Ok(Self {
            container: container.to_path_buf(),
            previews_dir: unpacked_dir.join(SketchPath::Previews.as_str()),
            unpacked_dir,
            export_dir: parent_dir.join(&config.export.to),
            readme: parent_dir.join(SketchPath::Readme.as_str()),
            parent_dir,
        })
    }

    /// Layout of a directory whose container is `<dir>/<dir name>.sketch`.
    pub fn from_directory(dir: &Path, config: &Config) -> Result<Self> {
        let name = dir.file_name().ok_or_else(|| Error::InvalidLayout {
            path: dir.to_path_buf(),
        })?;
        let mut file_name = name.to_os_string();
        file_name.push(".");
        file_name.push(SketchPath::ContainerExtension.as_str());
        Self::from_container(&dir.join(file_name), config)
    }

    /// File stem of the container.
    pub fn name(&self) -> Option<&str> {
        self.container.file_stem().and_then(|s| s.to_str())
    }

    /// Name of the directory holding the container.
    pub fn parent_name(&self) -> Option<&str> {
        self.parent_dir.file_name().and_then(|s| s.to_str())
    }

    /// Whether the container's stem matches its directory's name.
    pub fn is_consistent(&self) -> bool {
        self.name().is_some() && self.name() == self.parent_name()
    }
}
