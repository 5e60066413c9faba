//! The `generate` command

use std::path::Path;

use colored::Colorize;

use super::load_config;
use crate::error::Result;

/// Rebuild the sketch file inside the directory `src`.
pub async fn run_generate(root: &Path, config: &Path, src: &Path) -> Result<()> {
    println!("{} Generating from {}...", "=>".blue().bold(), src.display());

    let config = load_config(root, config)?;
    let generated = sketch_core::generate(root, &config, src).await?;

    println!(
        "{} Generated {}",
        "OK".green().bold(),
        generated.display().to_string().cyan()
    );
    Ok(())
}
