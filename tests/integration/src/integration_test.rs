//! End-to-end integration test for the stage workflow
//!
//! Exercises the complete flow against a real git repository:
//! config loading -> unpack -> normalize -> export -> font embedding -> README.
#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use sketch_core::{Config, SyncContext, generate, stage};
use sketch_git::GitRepository;
use sketch_test_utils::git::{commit_all, porcelain_status, staged_paths};
use sketch_test_utils::repo::{TestRepo, sample_config, sample_document};
use sketch_test_utils::tool::FakeSketchTool;
use tempfile::TempDir;

const BUTTON_SVG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="120" height="40">
  <defs><linearGradient id="g"/></defs>
  <text font-family="Arial" font-size="14">OK</text>
  <text font-family="Arial Bold">Cancel</text>
</svg>
"#;

static FONT_FACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@font-face \{ font-family: "Arial"; src: url\("data:application/x-font-ttf;base64,([A-Za-z0-9+/=]+)"\); \}"#)
        .expect("Invalid font-face regex")
});

/// Set up a git repository with a config, a font and a container.
fn setup_test_repo(tool_dir: &TempDir) -> (TestRepo, Config) {
    let tool = FakeSketchTool::new(tool_dir.path())
        .export("button.svg", BUTTON_SVG)
        .install();

    let repo = TestRepo::new();
    repo.init_git();
    let config_text = sample_config(&tool.path);
    repo.write_config(&config_text);
    repo.write_file("assets/fonts/Arial.ttf", b"font");
    repo.write_file(
        "button/README.md",
        "# Button\n\nDesign notes.\n\n<!--start-images-->\nstale\n<!--end-images-->\n\nFooter\n",
    );
    repo.create_container("button/button.sketch", &sample_document());

    let config = Config::load(&repo.root().join("gitsketch.toml")).unwrap();
    (repo, config)
}

#[tokio::test]
async fn test_stage_vertical_slice() {
    let tool_dir = TempDir::new().unwrap();
    let (repo, config) = setup_test_repo(&tool_dir);
    let git = GitRepository::discover(repo.root()).unwrap();
    let ctx = SyncContext::new(repo.root(), &config, &git).unwrap();

    let report = stage(&ctx, Path::new("button/button.sketch")).await.unwrap();
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert_eq!(report.svgs.len(), 1);
    assert_eq!(report.svgs[0].1.embedded, vec!["Arial".to_string()]);

    // Unpacked tree is normalized and previews are gone
    let document = repo.read("button/.sketch/document.json");
    let parsed: serde_json::Value = serde_json::from_str(&document).unwrap();
    assert_eq!(parsed["currentPageIndex"], 1);
    assert!(document.starts_with("{\n\t\""));
    assert!(document.ends_with("}\n"));
    repo.assert_file_not_exists("button/.sketch/previews");

    // Font embedded once inside the existing defs
    let svg = repo.read("button/exports/button.svg");
    let faces: Vec<_> = FONT_FACE.captures_iter(&svg).collect();
    assert_eq!(faces.len(), 1, "{svg}");
    assert_eq!(&faces[0][1], "Zm9udA==");
    assert!(svg.contains("<![CDATA["), "{svg}");
    assert!(svg.contains("font-family=\"'Arial Bold'\""), "{svg}");
    let defs_start = svg.find("<defs>").unwrap();
    let defs_end = svg.find("</defs>").unwrap();
    let style = svg.find("<style").unwrap();
    assert!(defs_start < style && style < defs_end, "{svg}");

    // README region replaced, hand-written text kept
    let readme = repo.read("button/README.md");
    assert!(readme.starts_with("# Button\n\nDesign notes.\n\n<!--start-images-->"), "{readme}");
    assert!(readme.contains("### button"), "{readme}");
    assert!(readme.contains("![content](button/exports/button.svg)"), "{readme}");
    assert!(!readme.contains("stale"), "{readme}");
    assert!(readme.ends_with("<!--end-images-->\n\nFooter\n"), "{readme}");

    // Everything the pipeline wrote is in the index
    let staged = staged_paths(repo.root());
    for expected in [
        "button/.sketch/document.json",
        "button/.sketch/pages/ABC.json",
        "button/exports/button.svg",
        "button/README.md",
    ] {
        assert!(staged.contains(&expected.to_string()), "{expected} not in {staged:?}");
    }
}

#[tokio::test]
async fn test_restage_without_changes_is_clean() {
    let tool_dir = TempDir::new().unwrap();
    let (repo, config) = setup_test_repo(&tool_dir);
    let git = GitRepository::discover(repo.root()).unwrap();
    let ctx = SyncContext::new(repo.root(), &config, &git).unwrap();

    stage(&ctx, Path::new("button/button.sketch")).await.unwrap();
    commit_all(repo.root(), "stage button");
    stage(&ctx, Path::new("button/button.sketch")).await.unwrap();

    let status = porcelain_status(repo.root());
    assert!(status.trim().is_empty(), "status was:\n{status}");
}

#[tokio::test]
async fn test_generate_round_trips_normalized_tree() {
    let tool_dir = TempDir::new().unwrap();
    let (repo, config) = setup_test_repo(&tool_dir);
    let git = GitRepository::discover(repo.root()).unwrap();
    let ctx = SyncContext::new(repo.root(), &config, &git).unwrap();
    stage(&ctx, Path::new("button/button.sketch")).await.unwrap();

    let generated = generate(repo.root(), &config, Path::new("button")).await.unwrap();

    let check = TempDir::new().unwrap();
    sketch_archive::unpack(&generated, check.path()).unwrap();
    for name in ["document.json", "meta.json", "user.json", "pages/ABC.json"] {
        assert_eq!(
            fs::read_to_string(check.path().join(name)).unwrap(),
            repo.read(&format!("button/.sketch/{name}")),
            "{name} differs"
        );
    }
}
