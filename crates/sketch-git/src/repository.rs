//! git2-backed implementation of [`VersionControl`].

use std::path::{Path, PathBuf};

use git2::{IndexAddOption, Repository, StatusOptions};
use sketch_fs::NormalizedPath;

use crate::stage::VersionControl;
use crate::status::FileStatus;
use crate::{Error, Result};

/// A git working copy opened through libgit2.
pub struct GitRepository {
    repo: Repository,
    workdir: PathBuf,
}

impl GitRepository {
    /// Open the repository containing `start`, searching parent directories.
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = Repository::discover(start).map_err(|_| Error::NotARepository {
            path: start.to_path_buf(),
        })?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| Error::BareRepository {
                path: repo.path().to_path_buf(),
            })?
            .to_path_buf();
        let workdir = dunce::canonicalize(&workdir)
            .map_err(|e| Error::Fs(sketch_fs::Error::io(&workdir, e)))?;

        tracing::debug!(workdir = %workdir.display(), "Opened git repository");
        Ok(Self { repo, workdir })
    }

    /// The canonical working directory of the repository.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Pathspec for `path` relative to the working directory.
    fn pathspec(&self, path: &Path) -> Result<String> {
        let absolute = canonicalize_lenient(path)?;
        let relative = NormalizedPath::new(&absolute)
            .relative_to(&NormalizedPath::new(&self.workdir))
            .ok_or(Error::OutsideRepository { path: absolute })?;

        if relative.as_str().is_empty() {
            Ok(".".to_string())
        } else {
            Ok(relative.as_str().to_string())
        }
    }
}

impl VersionControl for GitRepository {
    fn status(&self) -> Result<Vec<FileStatus>> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let entries = statuses
            .iter()
            .filter_map(|entry| {
                let path = entry.path()?;
                Some(FileStatus::from_git(self.workdir.join(path), entry.status()))
            })
            .collect();

        Ok(entries)
    }

    fn stage(&self, paths: &[PathBuf], include_deletions: bool) -> Result<()> {
        let specs = paths
            .iter()
            .map(|p| self.pathspec(p))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(?specs, include_deletions, "git add");

        let mut index = self.repo.index()?;
        index.add_all(specs.iter().map(String::as_str), IndexAddOption::DEFAULT, None)?;
        if include_deletions {
            index.update_all(specs.iter().map(String::as_str), None)?;
        }
        index.write()?;

        Ok(())
    }
}

/// Canonicalize `path`, tolerating missing trailing components.
///
/// Deleted directories still need a pathspec, so the deepest existing
/// ancestor is canonicalized and the missing components re-appended.
fn canonicalize_lenient(path: &Path) -> Result<PathBuf> {
    let absolute = sketch_fs::path::absolutize(path).map_err(|e| sketch_fs::Error::io(path, e))?;

    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(absolute),
        }
    }

    let mut resolved =
        dunce::canonicalize(existing).map_err(|e| sketch_fs::Error::io(existing, e))?;
    for name in missing.into_iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}
