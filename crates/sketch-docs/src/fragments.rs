//! Markdown fragments for exported artboards.

use std::path::{Path, PathBuf};

use sketch_fs::NormalizedPath;

use crate::error::{Error, Result};

/// One `### <stem>` heading and image link for `link`.
pub fn render_fragment(link: &NormalizedPath) -> String {
    let heading = link.file_stem().unwrap_or_default();
    format!(
        "\n### {}\n\n![content]({})\n",
        heading,
        link.as_str().replacen(' ', "%20", 1)
    )
}

/// Render fragments for `exported`, in order, with links relative to
/// `repo_root`.
///
/// Only the first space of each link is percent-encoded.
pub fn render_fragments(repo_root: &Path, exported: &[PathBuf]) -> Result<String> {
    let root = NormalizedPath::new(repo_root);
    tracing::debug!(count = exported.len(), "Rendering README fragments");
    exported
        .iter()
        .map(|path| {
            let link = NormalizedPath::new(path)
                .relative_to(&root)
                .ok_or_else(|| Error::OutsideRoot {
                    path: path.clone(),
                    root: repo_root.to_path_buf(),
                })?;
            Ok(render_fragment(&link))
        })
        .collect()
}
