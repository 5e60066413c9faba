//! [`TestRepo`] builder for git-sketch test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Entries of a small but realistic sketch container.
///
/// `document.json` carries a non-default `currentPageIndex` and compact
/// formatting so normalization has something to change.
pub fn sample_document() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        (
            "document.json",
            br#"{"currentPageIndex":3,"pages":[{"_ref":"pages/ABC"}],"do_objectID":"DOC"}"#.to_vec(),
        ),
        ("meta.json", br#"{"version":121,"app":"com.bohemiancoding.sketch3"}"#.to_vec()),
        ("user.json", br#"{"document":{"pageListHeight":110}}"#.to_vec()),
        (
            "pages/ABC.json",
            br#"{"name":"Page 1","layers":[{"name":"button","_class":"artboard"}]}"#.to_vec(),
        ),
        ("previews/preview.png", vec![0x89, b'P', b'N', b'G', 0, 1, 2, 3]),
    ]
}

/// A `gitsketch.toml` pointing at `tool`, with README generation on.
pub fn sample_config(tool: &Path) -> String {
    format!(
        r##"unpacked = ".sketch"
delete_previews = true
generate_readme = true

[export]
to = "exports"
tool = "{}"
type = "artboards"

[export.args]
background = "#FFFFFF"
formats = "svg"
trimmed = "NO"

[fonts]
embed_prefixes = ["Arial"]
ignore_prefixes = ["Arial ", "ArialNarrow-Italic"]
path = "assets/fonts"
extension = "ttf"
"##,
        tool.display().to_string().replace('\\', "/")
    )
}

/// A temporary repository directory with helper methods for test setup and
/// assertion.
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Initialise a git repository with one commit.
    pub fn init_git(&self) {
        crate::git::real_git_repo_with_commit(self.root());
    }

    /// Write `content` to `path` (relative to the root), creating parents.
    pub fn write_file(&self, path: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let full_path = self.root().join(path);
        fs::create_dir_all(full_path.parent().unwrap()).unwrap();
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Write `gitsketch.toml` at the root.
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("gitsketch.toml", content)
    }

    /// Build a zip container at `path` (relative to the root) from `entries`.
    pub fn create_container(&self, path: &str, entries: &[(&str, Vec<u8>)]) -> PathBuf {
        let staging = TempDir::new().unwrap();
        for (name, bytes) in entries {
            let file = staging.path().join(name);
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(file, bytes).unwrap();
        }

        let archive = self.root().join(path);
        sketch_archive::pack(staging.path(), &archive)
            .unwrap_or_else(|e| panic!("create_container: failed to pack {path}: {e}"));
        archive
    }

    /// Read the file at `path` (relative to the root).
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `path` (relative to the repo root) exists.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the repo root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
