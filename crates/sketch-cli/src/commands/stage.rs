//! The `stage` command

use std::path::Path;

use colored::Colorize;
use sketch_core::SyncContext;
use sketch_git::GitRepository;

use super::{load_config, print_report};
use crate::error::Result;

/// Stage the sketch file at `src`.
pub async fn run_stage(root: &Path, config: &Path, src: &Path) -> Result<()> {
    println!("{} Staging {}...", "=>".blue().bold(), src.display());

    let config = load_config(root, config)?;
    let git = GitRepository::discover(root)?;
    let ctx = SyncContext::new(root, &config, &git)?;

    let report = sketch_core::stage(&ctx, src).await?;
    print_report(&report);

    println!("{} Sketch file staged successfully", "OK".green().bold());
    Ok(())
}
