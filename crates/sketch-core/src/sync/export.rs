//! Export stage.

use std::path::{Path, PathBuf};

use sketch_export::{DEFAULT_TOOL_NAME, ExportCommand, locate_tool, run_export};
use sketch_fs::SketchPath;
use sketch_git::{delete_dir_and_stage, stage_path};
use sketch_svg::{SvgReport, process_svg};

use crate::Result;
use crate::context::SyncContext;

/// Output of [`export_content`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportedContent {
    /// The export set, in the order the tool reported it
    pub exported: Vec<PathBuf>,
    /// Post-processing result per SVG
    pub svgs: Vec<(PathBuf, SvgReport)>,
    pub warnings: Vec<String>,
}

/// Re-export `document` into `output_dir`.
///
/// The previous export directory is deleted and the deletion staged, the
/// tool is run, every SVG is post-processed in order and the new directory
/// is staged as a whole.
pub async fn export_content(
    ctx: &SyncContext<'_>,
    document: &Path,
    output_dir: &Path,
) -> Result<ExportedContent> {
    delete_dir_and_stage(ctx.vcs(), output_dir).await?;

    let config = ctx.config();
    let tool = locate_tool(&config.tool_path(ctx.root()), DEFAULT_TOOL_NAME)?;
    let command = ExportCommand::new(tool, &config.export.export_type, document, output_dir)
        .options(config.export_options());
    let output = run_export(&command).await?;

    let policy = config.font_policy();
    let assets = config.font_assets(ctx.root());
    let mut svgs = Vec::new();
    for path in output.exported.iter().filter(|p| is_vector(p)) {
        let report = process_svg(path, &policy, &assets).await?;
        if !report.embedded.is_empty() {
            tracing::info!(path = %path.display(), fonts = ?report.embedded, "Embedded fonts");
        }
        svgs.push((path.clone(), report));
    }

    if output_dir.exists() {
        stage_path(ctx.vcs(), output_dir, false)?;
    } else {
        tracing::debug!(path = %output_dir.display(), "Export produced nothing");
    }

    Ok(ExportedContent {
        exported: output.exported,
        svgs,
        warnings: output.warnings,
    })
}

fn is_vector(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == SketchPath::VectorExtension.as_str())
}
