//! A scriptable stand-in for `sketchtool`.
//!
//! The fake is a POSIX shell script: it records its arguments, copies the
//! configured payload files into the `--output=` directory and prints one
//! `Exported <name>` line per file, like the real tool.

use std::fs;
use std::path::{Path, PathBuf};

/// Builder for a fake export tool installed under a directory.
pub struct FakeSketchTool {
    dir: PathBuf,
    exports: Vec<(String, Vec<u8>)>,
    stderr: Option<String>,
    exit_code: i32,
}

/// An installed fake tool.
pub struct InstalledTool {
    /// Path of the executable script
    pub path: PathBuf,
    /// File the script writes its arguments to, one per line
    pub args_log: PathBuf,
}

impl InstalledTool {
    /// Arguments of the last invocation, or empty if never run.
    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(&self.args_log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl FakeSketchTool {
    /// Start a fake tool that will live in `dir`.
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            exports: Vec::new(),
            stderr: None,
            exit_code: 0,
        }
    }

    /// Produce a file named `name` with `content` on every export.
    pub fn export(mut self, name: &str, content: impl Into<Vec<u8>>) -> Self {
        self.exports.push((name.to_string(), content.into()));
        self
    }

    /// Exit with `code` after printing the export lines.
    pub fn exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    /// Print `message` on stderr before exiting.
    pub fn stderr(mut self, message: &str) -> Self {
        self.stderr = Some(message.to_string());
        self
    }

    /// Write the script and its payload files.
    pub fn install(self) -> InstalledTool {
        let payload = self.dir.join("payload");
        fs::create_dir_all(&payload).unwrap();

        let args_log = self.dir.join("sketchtool.args");
        let mut script = String::from("#!/bin/sh\nout=\"\"\n");
        script.push_str(&format!("printf '%s\\n' \"$@\" > '{}'\n", args_log.display()));
        script.push_str(
            "for arg in \"$@\"; do\n  case \"$arg\" in\n    --output=*) out=\"${arg#--output=}\" ;;\n  esac\ndone\n",
        );
        script.push_str("mkdir -p \"$out\"\n");

        for (name, content) in &self.exports {
            let source = payload.join(name);
            fs::create_dir_all(source.parent().unwrap()).unwrap();
            fs::write(&source, content).unwrap();
            script.push_str(&format!("cp '{}' \"$out/{}\"\n", source.display(), name));
            script.push_str(&format!("echo \"Exported {}\"\n", name));
        }
        if let Some(message) = &self.stderr {
            script.push_str(&format!("echo '{}' >&2\n", message));
        }
        script.push_str(&format!("exit {}\n", self.exit_code));

        let path = self.dir.join("sketchtool");
        fs::write(&path, script).unwrap();
        make_executable(&path);

        InstalledTool { path, args_log }
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
