//! The `stage`, `import` and `generate` workflows.

use std::path::{Path, PathBuf};

use sketch_git::stage_path;

use super::{SyncReport, export_content, unpack_container, update_readme};
use crate::config::Config;
use crate::context::SyncContext;
use crate::layout::SketchLayout;
use crate::normalize::normalize_dir;
use crate::{Error, Result};

/// Bring the repository in line with the container at `container`.
///
/// Runs unpack, normalize, export and README refresh in that order,
/// staging each stage's output before moving on.
pub async fn stage(ctx: &SyncContext<'_>, container: &Path) -> Result<SyncReport> {
    let container = ctx.resolve(container)?;
    if !container.is_file() {
        return Err(Error::SourceNotFound { path: container });
    }

    let layout = SketchLayout::from_container(&container, ctx.config())?;
    let mut report = SyncReport::new(container.clone());
    tracing::info!(path = %container.display(), "Staging sketch file");

    if !layout.is_consistent() {
        report.warn(format!(
            "Sketch file name '{}' is different than its parent dir name '{}'. \
             To add a new sketch file, use: git-sketch import --src <sketch-file> --target <parent-dir>",
            layout.name().unwrap_or_default(),
            layout.parent_name().unwrap_or_default(),
        ));
    }

    unpack_container(ctx, &layout).await?;
    report.normalized = normalize_dir(&layout.unpacked_dir).await?.files;
    stage_path(ctx.vcs(), &layout.unpacked_dir, false)?;

    let content = export_content(ctx, &layout.container, &layout.export_dir).await?;
    report.warnings.extend(content.warnings);
    report.exported = content.exported;
    report.svgs = content.svgs;

    if ctx.config().generate_readme {
        let anomaly = update_readme(ctx, &layout.parent_dir, &report.exported).await?;
        if let Some(anomaly) = anomaly {
            report.warn(format!(
                "{} in {}; appended image references to the end of the file",
                anomaly,
                layout.readme.display()
            ));
        }
        report.readme = Some(layout.readme);
    } else {
        tracing::info!("Skipping README.md (generate_readme is false)");
    }

    Ok(report)
}

/// Copy `source` to `<target_dir>/<stem>/<file name>` and stage it there.
///
/// An existing destination directory is reported but not an error.
pub async fn import(ctx: &SyncContext<'_>, source: &Path, target_dir: &Path) -> Result<SyncReport> {
    let source = ctx.resolve(source)?;
    if !source.is_file() {
        return Err(Error::SourceNotFound { path: source });
    }

    let (stem, file_name) = match (source.file_stem(), source.file_name()) {
        (Some(stem), Some(name)) => (stem.to_os_string(), name.to_os_string()),
        _ => return Err(Error::InvalidLayout { path: source }),
    };
    let parent_dir = ctx.resolve(target_dir)?.join(stem);
    tracing::info!(path = %source.display(), target = %parent_dir.display(), "Importing");

    let mut warnings = Vec::new();
    if parent_dir.exists() {
        let message = format!("Target sketch dir already exists: {}", parent_dir.display());
        tracing::warn!("{}", message);
        warnings.push(message);
    }

    let imported = parent_dir.join(file_name);
    if imported != source {
        sketch_fs::io::copy_file(&source, &imported).await?;
    }

    let mut report = stage(ctx, &imported).await?;
    report.warnings.splice(0..0, warnings);
    Ok(report)
}

/// Pack `<dir>/<unpacked>` into `<dir>/<dir name>.sketch`.
///
/// `dir` resolves against `root`. No version control is involved. Returns
/// the path of the generated container.
pub async fn generate(root: &Path, config: &Config, dir: &Path) -> Result<PathBuf> {
    let joined = root.join(dir);
    let dir = sketch_fs::path::absolutize(&joined).map_err(|e| sketch_fs::Error::io(&joined, e))?;
    if !dir.is_dir() {
        return Err(Error::SourceNotFound { path: dir });
    }

    let layout = SketchLayout::from_directory(&dir, config)?;
    if !layout.unpacked_dir.is_dir() {
        return Err(Error::UnpackedNotFound {
            path: layout.unpacked_dir,
        });
    }

    let source = layout.unpacked_dir.clone();
    let archive = layout.container.clone();
    let entries = tokio::task::spawn_blocking(move || sketch_archive::pack(&source, &archive)).await??;
    tracing::info!(entries, path = %layout.container.display(), "Generated sketch file");

    Ok(layout.container)
}
