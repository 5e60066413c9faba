//! Unpack stage.

use sketch_git::delete_dir_and_stage;

use crate::Result;
use crate::context::SyncContext;
use crate::layout::SketchLayout;

/// Replace the unpacked tree with the container's contents.
///
/// The previous tree is deleted and the deletion staged first, so files
/// that no longer exist in the container leave the index too. Previews
/// are dropped afterwards when `delete_previews` is set.
pub async fn unpack_container(ctx: &SyncContext<'_>, layout: &SketchLayout) -> Result<usize> {
    delete_dir_and_stage(ctx.vcs(), &layout.unpacked_dir).await?;

    let archive = layout.container.clone();
    let dest = layout.unpacked_dir.clone();
    let entries =
        tokio::task::spawn_blocking(move || sketch_archive::unpack(&archive, &dest)).await??;
    tracing::info!(entries, dir = %layout.unpacked_dir.display(), "Unpacked sketch file");

    if ctx.config().delete_previews
        && sketch_fs::io::remove_dir_if_exists(&layout.previews_dir).await?
    {
        tracing::debug!(path = %layout.previews_dir.display(), "Deleted previews");
    }

    Ok(entries)
}
