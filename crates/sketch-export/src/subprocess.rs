//! Subprocess execution for the export tool
//!
//! Builds `<tool> export <type> <document> --output=<dir> [--key=value]*`,
//! runs it, and turns the `Exported <path>` lines on stdout into the list
//! of produced files.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Option key the command always sets itself
pub const RESERVED_OPTION: &str = "output";

static EXPORTED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Exported (.+)$").expect("Invalid exported line regex"));

/// One export invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportCommand {
    tool: PathBuf,
    export_type: String,
    document: PathBuf,
    output_dir: PathBuf,
    options: BTreeMap<String, String>,
    warnings: Vec<String>,
}

/// What a successful export produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOutput {
    /// Produced files in the order the tool reported them
    pub exported: Vec<PathBuf>,
    /// Recoverable problems noticed while building the command
    pub warnings: Vec<String>,
}

impl ExportCommand {
    pub fn new(
        tool: impl Into<PathBuf>,
        export_type: impl Into<String>,
        document: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            tool: tool.into(),
            export_type: export_type.into(),
            document: document.into(),
            output_dir: output_dir.into(),
            options: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Add a `--key=value` option.
    ///
    /// The reserved `output` key is dropped with a warning.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if key == RESERVED_OPTION {
            let message = format!(
                "Ignoring export option '{}': the output directory is set to {}",
                RESERVED_OPTION,
                self.output_dir.display()
            );
            tracing::warn!("{}", message);
            self.warnings.push(message);
        } else {
            self.options.insert(key, value.into());
        }
        self
    }

    /// Add several options, see [`ExportCommand::option`].
    pub fn options<I, K, V>(self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        options
            .into_iter()
            .fold(self, |cmd, (key, value)| cmd.option(key, value))
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Arguments passed to the tool, options in key order.
    pub fn args(&self) -> Vec<OsString> {
        let mut args = vec![
            OsString::from("export"),
            OsString::from(&self.export_type),
            self.document.clone().into_os_string(),
        ];

        let mut output = OsString::from("--output=");
        output.push(&self.output_dir);
        args.push(output);

        args.extend(
            self.options
                .iter()
                .map(|(key, value)| OsString::from(format!("--{}={}", key, value))),
        );
        args
    }
}

/// Run the export and collect the produced files.
///
/// A non-zero exit status fails with [`Error::CommandFailed`] carrying the
/// captured stderr.
pub async fn run_export(command: &ExportCommand) -> Result<ExportOutput> {
    let args = command.args();
    tracing::debug!(tool = %command.tool.display(), ?args, "Running export");

    let output = Command::new(&command.tool)
        .args(&args)
        .output()
        .await
        .map_err(|source| Error::Spawn {
            tool: command.tool.clone(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let code = output.status.code().unwrap_or(-1);
        return Err(Error::CommandFailed { code, stderr });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let exported = parse_exported(&stdout, &command.output_dir);
    tracing::info!(count = exported.len(), "Export finished");

    Ok(ExportOutput {
        exported,
        warnings: command.warnings.clone(),
    })
}

/// Paths named by `Exported <path>` lines, joined onto `output_dir`.
pub fn parse_exported(stdout: &str, output_dir: &Path) -> Vec<PathBuf> {
    stdout
        .lines()
        .filter_map(|line| EXPORTED_LINE.captures(line.trim_end()))
        .map(|caps| output_dir.join(&caps[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn command() -> ExportCommand {
        ExportCommand::new(
            "/usr/bin/sketchtool",
            "artboards",
            "button/button.sketch",
            "button/exports",
        )
    }

    fn args_as_strings(cmd: &ExportCommand) -> Vec<String> {
        cmd.args()
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_args_sorted_by_key() {
        let cmd = command().options([
            ("trimmed", "NO"),
            ("background", "#FFFFFF"),
            ("formats", "svg"),
        ]);

        assert_eq!(
            args_as_strings(&cmd),
            vec![
                "export",
                "artboards",
                "button/button.sketch",
                "--output=button/exports",
                "--background=#FFFFFF",
                "--formats=svg",
                "--trimmed=NO",
            ]
        );
        assert!(cmd.warnings().is_empty());
    }

    #[test]
    fn test_reserved_output_option_is_skipped() {
        let cmd = command().option("output", "elsewhere").option("formats", "png");

        let args = args_as_strings(&cmd);
        assert!(!args.iter().any(|a| a.contains("elsewhere")));
        assert_eq!(args.last().map(String::as_str), Some("--formats=png"));
        assert_eq!(cmd.warnings().len(), 1);
        assert!(cmd.warnings()[0].contains("output"));
    }

    #[test]
    fn test_parse_exported_keeps_order() {
        let stdout = "Exported card.svg\nsome noise\nExported nested/button@2x.png\r\n";
        let exported = parse_exported(stdout, Path::new("/repo/button/exports"));

        assert_eq!(
            exported,
            vec![
                PathBuf::from("/repo/button/exports/card.svg"),
                PathBuf::from("/repo/button/exports/nested/button@2x.png"),
            ]
        );
    }

    #[rstest]
    #[case::other_prefix("Not Exported a.svg")]
    #[case::no_name("Exported")]
    #[case::lowercase("exported b.svg")]
    #[case::empty("")]
    fn test_parse_exported_ignores_other_lines(#[case] stdout: &str) {
        assert!(parse_exported(stdout, Path::new("out")).is_empty());
    }

    #[test]
    fn test_parse_exported_keeps_spaces_in_names() {
        let exported = parse_exported("Exported My Button.svg\n", Path::new("out"));
        assert_eq!(exported, vec![PathBuf::from("out/My Button.svg")]);
    }
}
