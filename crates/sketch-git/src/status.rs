//! Working-tree status entries with porcelain-style codes.

use std::path::PathBuf;

use git2::Status;

/// One changed path as reported by `git status --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    /// Absolute path of the changed file
    pub path: PathBuf,
    /// Index (staged) state, `' '` when unmodified
    pub index: char,
    /// Working-tree state, `' '` when unmodified
    pub working_dir: char,
}

impl FileStatus {
    pub fn new(path: impl Into<PathBuf>, index: char, working_dir: char) -> Self {
        Self {
            path: path.into(),
            index,
            working_dir,
        }
    }

    /// Build an entry from a git2 status bit set.
    pub fn from_git(path: impl Into<PathBuf>, status: Status) -> Self {
        let (index, working_dir) = status_code(status);
        Self::new(path, index, working_dir)
    }

    /// The two-character porcelain code, e.g. `" D"` or `"??"`.
    pub fn code(&self) -> String {
        format!("{}{}", self.index, self.working_dir)
    }

    /// Whether the working tree differs from the index for this path.
    pub fn is_changed_in_worktree(&self) -> bool {
        self.working_dir != ' '
    }
}

/// Translate git2 status flags into `(index, worktree)` porcelain characters.
pub fn status_code(status: Status) -> (char, char) {
    if status.contains(Status::WT_NEW) {
        return ('?', '?');
    }

    let index = if status.contains(Status::INDEX_NEW) {
        'A'
    } else if status.contains(Status::INDEX_MODIFIED) {
        'M'
    } else if status.contains(Status::INDEX_DELETED) {
        'D'
    } else if status.contains(Status::INDEX_RENAMED) {
        'R'
    } else if status.contains(Status::INDEX_TYPECHANGE) {
        'T'
    } else {
        ' '
    };

    let working_dir = if status.contains(Status::WT_MODIFIED) {
        'M'
    } else if status.contains(Status::WT_DELETED) {
        'D'
    } else if status.contains(Status::WT_RENAMED) {
        'R'
    } else if status.contains(Status::WT_TYPECHANGE) {
        'T'
    } else {
        ' '
    };

    (index, working_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Status::WT_NEW, "??")]
    #[case(Status::WT_DELETED, " D")]
    #[case(Status::WT_MODIFIED, " M")]
    #[case(Status::INDEX_NEW, "A ")]
    #[case(Status::INDEX_MODIFIED | Status::WT_MODIFIED, "MM")]
    #[case(Status::INDEX_DELETED, "D ")]
    #[case(Status::CURRENT, "  ")]
    fn test_status_code(#[case] status: Status, #[case] expected: &str) {
        let entry = FileStatus::from_git("/repo/a.json", status);
        assert_eq!(entry.code(), expected);
    }

    #[test]
    fn test_changed_in_worktree() {
        assert!(FileStatus::new("/r/a", ' ', 'D').is_changed_in_worktree());
        assert!(FileStatus::new("/r/a", '?', '?').is_changed_in_worktree());
        assert!(!FileStatus::new("/r/a", 'M', ' ').is_changed_in_worktree());
    }
}
