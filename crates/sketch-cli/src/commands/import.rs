//! The `import` command

use std::path::Path;

use colored::Colorize;
use sketch_core::SyncContext;
use sketch_git::GitRepository;

use super::{load_config, print_report};
use crate::error::Result;

/// Import the sketch file at `src` into `target` and stage it.
pub async fn run_import(root: &Path, config: &Path, src: &Path, target: &Path) -> Result<()> {
    println!(
        "{} Importing {} into {}...",
        "=>".blue().bold(),
        src.display(),
        target.display()
    );

    let config = load_config(root, config)?;
    let git = GitRepository::discover(root)?;
    let ctx = SyncContext::new(root, &config, &git)?;

    let report = sketch_core::import(&ctx, src, target).await?;
    print_report(&report);

    println!(
        "{} Sketch file imported successfully: {}",
        "OK".green().bold(),
        report.container.display()
    );
    Ok(())
}
