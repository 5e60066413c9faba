//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sketch_fs::SketchPath;

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG: &str = SketchPath::ConfigFile.as_str();

/// git-sketch - Version sketch design files as reviewable text
#[derive(Parser, Debug)]
#[command(name = "git-sketch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Copy a sketch file into its own directory and stage it
    ///
    /// Examples:
    ///   git-sketch import --src ~/Downloads/card.sketch --target designs
    Import {
        /// Sketch file to import
        #[arg(long)]
        src: PathBuf,

        /// Directory that receives `<name>/<name>.sketch`
        #[arg(long)]
        target: PathBuf,
    },

    /// Unpack, normalize and export a sketch file, then stage the result
    Stage {
        /// Sketch file to stage
        #[arg(long)]
        src: PathBuf,
    },

    /// Rebuild a sketch file from its unpacked directory
    Generate {
        /// Directory holding the unpacked tree
        #[arg(long)]
        src: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_stage() {
        let cli = Cli::parse_from(["git-sketch", "stage", "--src", "button/button.sketch"]);
        assert!(!cli.verbose);
        assert_eq!(cli.config, PathBuf::from("gitsketch.toml"));
        assert_eq!(
            cli.command,
            Commands::Stage {
                src: PathBuf::from("button/button.sketch")
            }
        );
    }

    #[test]
    fn parse_import() {
        let cli = Cli::parse_from([
            "git-sketch",
            "import",
            "--src",
            "card.sketch",
            "--target",
            "designs",
        ]);
        assert_eq!(
            cli.command,
            Commands::Import {
                src: PathBuf::from("card.sketch"),
                target: PathBuf::from("designs"),
            }
        );
    }

    #[test]
    fn parse_generate_with_global_flags() {
        let cli = Cli::parse_from([
            "git-sketch",
            "generate",
            "--src",
            "button",
            "--verbose",
            "--config",
            "other.toml",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert_eq!(
            cli.command,
            Commands::Generate {
                src: PathBuf::from("button")
            }
        );
    }

    #[test]
    fn import_requires_target() {
        let result = Cli::try_parse_from(["git-sketch", "import", "--src", "card.sketch"]);
        assert!(result.is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["git-sketch"]).is_err());
    }
}
