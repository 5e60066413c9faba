//! Staging operations used by the sync pipeline.

use std::path::{Path, PathBuf};

use sketch_fs::NormalizedPath;

use crate::Result;
use crate::status::FileStatus;

/// The version-control operations the pipeline depends on.
pub trait VersionControl {
    /// Every changed path in the working copy.
    fn status(&self) -> Result<Vec<FileStatus>>;

    /// Mark `paths` for the next commit.
    ///
    /// With `include_deletions`, tracked files under `paths` that no longer
    /// exist are staged as removals too. Nothing to stage is not an error.
    fn stage(&self, paths: &[PathBuf], include_deletions: bool) -> Result<()>;
}

/// Result of [`delete_dir_and_stage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Nothing existed at the path
    NotFound,
    /// The directory was removed; `staged` lists the changes that were staged
    Deleted { staged: Vec<PathBuf> },
}

/// Stage a single path.
pub fn stage_path(vcs: &dyn VersionControl, path: &Path, include_deletions: bool) -> Result<()> {
    tracing::debug!(path = %path.display(), include_deletions, "Staging");
    vcs.stage(&[path.to_path_buf()], include_deletions)
}

/// Delete `dir` recursively and stage whatever the deletion changed.
///
/// A plain deletion is not always picked up by a later `git add`, so after
/// removing the directory the working-tree status is inspected and every
/// changed path located under `dir` is staged explicitly. When status shows
/// nothing under `dir`, staging is not invoked.
pub async fn delete_dir_and_stage(vcs: &dyn VersionControl, dir: &Path) -> Result<DeleteOutcome> {
    if !dir.exists() {
        tracing::debug!(path = %dir.display(), "Nothing to delete");
        return Ok(DeleteOutcome::NotFound);
    }

    // Resolve before deleting; canonicalization needs the path to exist.
    let resolved = sketch_fs::path::absolutize(dir).map_err(|e| sketch_fs::Error::io(dir, e))?;
    tracing::debug!(path = %resolved.display(), "Deleting");
    sketch_fs::io::remove_dir_if_exists(dir).await?;

    let root = NormalizedPath::new(&resolved);
    let changed: Vec<PathBuf> = vcs
        .status()?
        .into_iter()
        .filter(|entry| entry.is_changed_in_worktree())
        .filter(|entry| NormalizedPath::new(&entry.path).is_within(&root))
        .inspect(|entry| {
            tracing::debug!(path = %entry.path.display(), code = %entry.code(), "Deleted folder change")
        })
        .map(|entry| entry.path)
        .collect();

    if !changed.is_empty() {
        vcs.stage(&changed, true)?;
    }

    Ok(DeleteOutcome::Deleted { staged: changed })
}
