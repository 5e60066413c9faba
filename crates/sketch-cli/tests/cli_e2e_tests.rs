//! End-to-end tests that invoke the compiled `git-sketch` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use sketch_test_utils::repo::TestRepo;

fn git_sketch() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("git-sketch"))
}

#[test]
fn test_help_lists_commands() {
    git_sketch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("stage"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_stage_requires_src() {
    git_sketch()
        .arg("stage")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--src"));
}

#[test]
fn test_missing_config_is_reported() {
    let repo = TestRepo::new();

    git_sketch()
        .current_dir(repo.root())
        .args(["stage", "--src", "button/button.sketch"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("Configuration not found"));
}

#[test]
fn test_generate_without_unpacked_tree_fails() {
    let repo = TestRepo::new();
    repo.write_config(&sketch_test_utils::repo::sample_config(std::path::Path::new(
        "sketchtool",
    )));
    repo.write_file("button/README.md", "# Button\n");

    git_sketch()
        .current_dir(repo.root())
        .args(["generate", "--src", "button"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not find"));
}

#[cfg(unix)]
mod unix {
    use super::*;
    use sketch_test_utils::git::staged_paths;
    use sketch_test_utils::repo::{sample_config, sample_document};
    use sketch_test_utils::tool::FakeSketchTool;
    use tempfile::TempDir;

    const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"><text font-family="Arial">OK</text></svg>"#;

    fn prepared_repo(tool_dir: &TempDir) -> TestRepo {
        let tool = FakeSketchTool::new(tool_dir.path())
            .export("button.svg", SVG)
            .install();
        let repo = TestRepo::new();
        repo.init_git();
        repo.write_config(&sample_config(&tool.path));
        repo.write_file("assets/fonts/Arial.ttf", [0u8, 1, 2]);
        repo
    }

    #[test]
    fn test_stage_then_generate() {
        let tool_dir = TempDir::new().unwrap();
        let repo = prepared_repo(&tool_dir);
        repo.create_container("button/button.sketch", &sample_document());

        git_sketch()
            .current_dir(repo.root())
            .args(["stage", "--src", "button/button.sketch"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Sketch file staged successfully"))
            .stdout(predicate::str::contains("embedded Arial"));

        let staged = staged_paths(repo.root());
        assert!(staged.contains(&"button/.sketch/document.json".to_string()), "{staged:?}");
        assert!(staged.contains(&"button/exports/button.svg".to_string()), "{staged:?}");
        assert!(staged.contains(&"button/README.md".to_string()), "{staged:?}");
        repo.assert_file_contains("button/README.md", "![content](button/exports/button.svg)");

        std::fs::remove_file(repo.root().join("button/button.sketch")).unwrap();
        git_sketch()
            .current_dir(repo.root())
            .args(["generate", "--src", "button"])
            .assert()
            .success()
            .stdout(predicate::str::contains("button.sketch"));
        repo.assert_file_exists("button/button.sketch");
    }

    #[test]
    fn test_import_prints_warning_for_existing_dir() {
        let tool_dir = TempDir::new().unwrap();
        let repo = prepared_repo(&tool_dir);
        repo.create_container("incoming/card.sketch", &sample_document());
        repo.write_file("designs/card/notes.md", "existing");

        git_sketch()
            .current_dir(repo.root())
            .args(["import", "--src", "incoming/card.sketch", "--target", "designs"])
            .assert()
            .success()
            .stderr(predicate::str::contains("warning"))
            .stderr(predicate::str::contains("Target sketch dir already exists"))
            .stdout(predicate::str::contains("Sketch file imported successfully"));

        repo.assert_file_exists("designs/card/card.sketch");
    }

    #[test]
    fn test_stage_outside_git_fails() {
        let tool_dir = TempDir::new().unwrap();
        let tool = FakeSketchTool::new(tool_dir.path()).install();
        let repo = TestRepo::new();
        repo.write_config(&sample_config(&tool.path));
        repo.create_container("button/button.sketch", &sample_document());

        git_sketch()
            .current_dir(repo.root())
            .args(["stage", "--src", "button/button.sketch"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Not inside a git repository"));
    }
}
