//! README stage.

use std::path::{Path, PathBuf};

use sketch_docs::{ManagedRegion, RegionAnomaly, render_fragments};
use sketch_fs::SketchPath;
use sketch_git::stage_path;

use crate::Result;
use crate::context::SyncContext;

/// Refresh the image listing in `<parent_dir>/README.md` and stage it.
///
/// A missing README is created with an empty region first. When the
/// region cannot be found the listing is appended and the anomaly
/// returned for the caller to report.
pub async fn update_readme(
    ctx: &SyncContext<'_>,
    parent_dir: &Path,
    exported: &[PathBuf],
) -> Result<Option<RegionAnomaly>> {
    let readme = parent_dir.join(SketchPath::Readme.as_str());
    let region = ManagedRegion::images();

    let current = if readme.is_file() {
        tracing::debug!(path = %readme.display(), "Found existing README");
        sketch_fs::io::read_text(&readme).await?
    } else {
        tracing::debug!(path = %readme.display(), "Creating README");
        region.empty_document()
    };

    let body = format!("\n{}\n", render_fragments(ctx.root(), exported)?);
    let update = region.apply(&current, &body);

    sketch_fs::io::write_file(&readme, update.content).await?;
    stage_path(ctx.vcs(), &readme, false)?;
    tracing::info!(path = %readme.display(), images = exported.len(), "Updated README");

    Ok(update.anomaly)
}
