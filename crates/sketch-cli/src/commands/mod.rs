//! Command implementations for sketch-cli

pub mod generate;
pub mod import;
pub mod stage;

use std::path::Path;

use colored::Colorize;
use sketch_core::{Config, SyncReport};

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub use generate::run_generate;
pub use import::run_import;
pub use stage::run_stage;

/// Dispatch a parsed command line, working from the current directory.
pub async fn execute(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cli.command {
        Commands::Import { src, target } => run_import(&cwd, &cli.config, &src, &target).await,
        Commands::Stage { src } => run_stage(&cwd, &cli.config, &src).await,
        Commands::Generate { src } => run_generate(&cwd, &cli.config, &src).await,
    }
}

/// Load the configuration, relative paths resolving against `root`.
fn load_config(root: &Path, config: &Path) -> Result<Config> {
    Ok(Config::load(&root.join(config))?)
}

/// Print what a pipeline run did, warnings first.
fn print_report(report: &SyncReport) {
    for warning in &report.warnings {
        eprintln!("{}: {}", "warning".yellow().bold(), warning);
    }

    println!(
        "   {} {} JSON files normalized",
        "-".dimmed(),
        report.normalized
    );
    for (path, svg) in &report.svgs {
        if !svg.embedded.is_empty() {
            println!(
                "   {} {} embedded {}",
                "-".dimmed(),
                path.display().to_string().cyan(),
                svg.embedded.join(", ")
            );
        }
    }
    for path in &report.exported {
        println!("   {} {}", "+".green(), path.display());
    }
    if let Some(readme) = &report.readme {
        println!("   {} {}", "~".blue(), readme.display());
    }
}
