//! Tests running the export command against a scripted tool.
#![cfg(unix)]

use pretty_assertions::assert_eq;
use sketch_export::{Error, ExportCommand, locate_tool, run_export};
use sketch_test_utils::tool::FakeSketchTool;
use tempfile::TempDir;

#[tokio::test]
async fn test_run_export_collects_exported_files_in_order() {
    let temp = TempDir::new().unwrap();
    let tool = FakeSketchTool::new(&temp.path().join("bin"))
        .export("button.svg", "<svg/>")
        .export("button@2x.png", vec![0x89, 0x50])
        .install();
    let out = temp.path().join("button/exports");

    let cmd = ExportCommand::new(&tool.path, "artboards", "button/button.sketch", &out)
        .option("formats", "svg,png");
    let output = run_export(&cmd).await.unwrap();

    assert_eq!(
        output.exported,
        vec![out.join("button.svg"), out.join("button@2x.png")]
    );
    assert!(out.join("button.svg").is_file());
    assert!(output.warnings.is_empty());
}

#[tokio::test]
async fn test_run_export_passes_arguments() {
    let temp = TempDir::new().unwrap();
    let tool = FakeSketchTool::new(temp.path()).install();
    let out = temp.path().join("exports");

    let cmd = ExportCommand::new(&tool.path, "artboards", "doc.sketch", &out)
        .options([("trimmed", "NO"), ("formats", "svg")]);
    run_export(&cmd).await.unwrap();

    assert_eq!(
        tool.recorded_args(),
        vec![
            "export".to_string(),
            "artboards".to_string(),
            "doc.sketch".to_string(),
            format!("--output={}", out.display()),
            "--formats=svg".to_string(),
            "--trimmed=NO".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_run_export_reports_reserved_option_warning() {
    let temp = TempDir::new().unwrap();
    let tool = FakeSketchTool::new(temp.path()).install();

    let cmd = ExportCommand::new(&tool.path, "artboards", "doc.sketch", temp.path().join("out"))
        .option("output", "/tmp/elsewhere");
    let output = run_export(&cmd).await.unwrap();

    assert_eq!(output.warnings.len(), 1);
}

#[tokio::test]
async fn test_run_export_nonzero_exit_is_fatal() {
    let temp = TempDir::new().unwrap();
    let tool = FakeSketchTool::new(temp.path())
        .export("button.svg", "<svg/>")
        .stderr("document is damaged")
        .exit_code(3)
        .install();

    let cmd = ExportCommand::new(&tool.path, "artboards", "doc.sketch", temp.path().join("out"));
    let err = run_export(&cmd).await.unwrap_err();

    match err {
        Error::CommandFailed { code, stderr } => {
            assert_eq!(code, 3);
            assert_eq!(stderr, "document is damaged");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_run_export_missing_binary_fails_to_spawn() {
    let temp = TempDir::new().unwrap();
    let cmd = ExportCommand::new(
        temp.path().join("nope"),
        "artboards",
        "doc.sketch",
        temp.path().join("out"),
    );

    assert!(matches!(run_export(&cmd).await, Err(Error::Spawn { .. })));
}

#[test]
fn test_locate_tool_uses_installed_script() {
    let temp = TempDir::new().unwrap();
    let tool = FakeSketchTool::new(temp.path()).install();

    assert_eq!(locate_tool(&tool.path, "sketchtool").unwrap(), tool.path);
}
