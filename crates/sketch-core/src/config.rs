//! Configuration parsing for `gitsketch.toml`
//!
//! The configuration is loaded once per run and passed by reference to every
//! stage. Relative paths in it resolve against the repository root.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sketch_svg::{FontAssets, FontPolicy};

use crate::{Error, Result};

/// Key that must be present under `[export.args]`
pub const REQUIRED_EXPORT_ARG: &str = "formats";

fn default_fonts_path() -> PathBuf {
    PathBuf::from("./assets/fonts")
}

fn default_font_extension() -> String {
    "ttf".to_string()
}

/// `[export]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Export directory name, created next to the container
    pub to: String,

    /// Path of the export tool
    pub tool: PathBuf,

    /// What to export, e.g. `artboards`
    #[serde(rename = "type")]
    pub export_type: String,

    /// Extra `--key=value` options for the tool
    #[serde(default)]
    pub args: BTreeMap<String, toml::Value>,
}

/// `[fonts]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontsConfig {
    pub embed_prefixes: Vec<String>,
    pub ignore_prefixes: Vec<String>,

    #[serde(default = "default_fonts_path")]
    pub path: PathBuf,

    #[serde(default = "default_font_extension")]
    pub extension: String,
}

/// Parsed `gitsketch.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the unpacked directory, created next to the container
    pub unpacked: String,

    #[serde(default)]
    pub delete_previews: bool,

    #[serde(default)]
    pub generate_readme: bool,

    pub export: ExportConfig,

    pub fonts: FontsConfig,
}

impl Config {
    /// Parse configuration from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use sketch_core::Config;
    ///
    /// let config = Config::parse(r#"
    /// unpacked = ".sketch"
    ///
    /// [export]
    /// to = "exports"
    /// tool = "sketchtool"
    /// type = "artboards"
    ///
    /// [export.args]
    /// formats = "svg"
    ///
    /// [fonts]
    /// embed_prefixes = ["Arial"]
    /// ignore_prefixes = []
    /// "#).unwrap();
    ///
    /// assert_eq!(config.fonts.extension, "ttf");
    /// assert!(!config.generate_readme);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| sketch_fs::Error::io(path, e))?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.export.args.contains_key(REQUIRED_EXPORT_ARG) {
            return Err(Error::MissingConfigKey {
                key: format!("export.args.{}", REQUIRED_EXPORT_ARG),
            });
        }
        Ok(())
    }

    /// Export options as `(key, value)` strings, in key order.
    ///
    /// Non-string TOML values are rendered as written, so `scales = 2`
    /// becomes `--scales=2`.
    pub fn export_options(&self) -> Vec<(String, String)> {
        self.export
            .args
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    toml::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), value)
            })
            .collect()
    }

    pub fn font_policy(&self) -> FontPolicy {
        FontPolicy::new(
            self.fonts.embed_prefixes.clone(),
            self.fonts.ignore_prefixes.clone(),
        )
    }

    /// Font file location, resolved against `root`.
    pub fn font_assets(&self, root: &Path) -> FontAssets {
        FontAssets::new(root.join(&self.fonts.path), self.fonts.extension.clone())
    }

    /// Export tool path, resolved against `root` when relative.
    pub fn tool_path(&self, root: &Path) -> PathBuf {
        root.join(&self.export.tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = r#"
unpacked = ".sketch"

[export]
to = "exports"
tool = "/usr/local/bin/sketchtool"
type = "artboards"

[export.args]
formats = "svg"

[fonts]
embed_prefixes = ["Arial"]
ignore_prefixes = ["Arial "]
"#;

    #[test]
    fn test_parse_defaults() {
        let config = Config::parse(MINIMAL).unwrap();

        assert_eq!(config.unpacked, ".sketch");
        assert!(!config.delete_previews);
        assert!(!config.generate_readme);
        assert_eq!(config.fonts.path, PathBuf::from("./assets/fonts"));
        assert_eq!(config.fonts.extension, "ttf");
        assert_eq!(config.export.export_type, "artboards");
    }

    #[test]
    fn test_missing_formats_is_rejected() {
        let content = MINIMAL.replace("formats = \"svg\"", "trimmed = \"NO\"");

        let err = Config::parse(&content).unwrap_err();
        assert!(matches!(err, Error::MissingConfigKey { ref key } if key == "export.args.formats"));
    }

    #[test]
    fn test_missing_required_key_is_rejected() {
        let content = MINIMAL.replace("unpacked = \".sketch\"", "");
        let err = Config::parse(&content).unwrap_err();

        assert!(matches!(err, Error::TomlDe(_)));
        assert!(err.to_string().contains("unpacked"));
    }

    #[test]
    fn test_export_options_render_non_strings() {
        let content = MINIMAL.replace(
            "formats = \"svg\"",
            "formats = \"svg\"\nscales = 2\ntrimmed = false",
        );
        let config = Config::parse(&content).unwrap();

        assert_eq!(
            config.export_options(),
            vec![
                ("formats".to_string(), "svg".to_string()),
                ("scales".to_string(), "2".to_string()),
                ("trimmed".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_tool_path_absolute_is_kept() {
        let config = Config::parse(MINIMAL).unwrap();
        assert_eq!(
            config.tool_path(Path::new("/repo")),
            PathBuf::from("/usr/local/bin/sketchtool")
        );
    }

    #[test]
    fn test_font_assets_resolve_against_root() {
        let config = Config::parse(MINIMAL).unwrap();
        let assets = config.font_assets(Path::new("/repo"));
        assert_eq!(assets.font_path("Arial"), PathBuf::from("/repo/./assets/fonts/Arial.ttf"));
    }
}
