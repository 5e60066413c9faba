//! Whole-file SVG post-processing.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::document::{EmbeddedFont, VectorDocument};
use crate::error::Error;
use crate::fonts::{FontPolicy, FontRecord};
use crate::splice::splice_font_faces;
use crate::Result;

/// Where font files live: `<dir>/<family>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAssets {
    pub dir: PathBuf,
    pub extension: String,
}

impl FontAssets {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Path of the font file for `family`.
    pub fn font_path(&self, family: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", family, self.extension))
    }
}

/// What [`process_svg`] changed in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgReport {
    /// Families embedded, in first-seen order
    pub embedded: Vec<String>,
    /// Number of family names that were quoted
    pub quoted: usize,
}

/// Quote multi-word font families in the SVG at `path` and embed every
/// family selected by `policy`.
///
/// The document is always rewritten, even when nothing is embedded. All
/// font files are read before anything is written, so a missing font
/// leaves the file untouched.
pub async fn process_svg(path: &Path, policy: &FontPolicy, assets: &FontAssets) -> Result<SvgReport> {
    let text = sketch_fs::io::read_text(path).await?;

    let mut record = FontRecord::new();
    let mut document = VectorDocument::parse(&text, policy, &mut record)?;

    for family in record.families() {
        let font = load_font(assets, family).await?;
        document.embed_font(&font)?;
    }

    let (output, spliced) = splice_font_faces(&document.to_xml()?);
    tracing::debug!(
        path = %path.display(),
        embedded = spliced,
        quoted = record.quoted(),
        "Processed SVG"
    );
    sketch_fs::io::write_file(path, output).await?;

    Ok(SvgReport {
        embedded: record.families().to_vec(),
        quoted: record.quoted(),
    })
}

async fn load_font(assets: &FontAssets, family: &str) -> Result<EmbeddedFont> {
    let path = assets.font_path(family);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| Error::FontRead {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(family, path = %path.display(), bytes = bytes.len(), "Embedding font");
    Ok(EmbeddedFont {
        family: family.to_string(),
        extension: assets.extension.clone(),
        base64: STANDARD.encode(bytes),
    })
}
