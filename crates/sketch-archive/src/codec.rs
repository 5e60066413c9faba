//! Zip packing and unpacking of sketch containers.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{Error, Result};

/// Extract every entry of `archive_path` into `dest_dir`.
///
/// `dest_dir` is created when missing. Existing content is not cleared;
/// callers that need a fresh tree delete the directory first.
///
/// Returns the number of archive entries.
pub fn unpack(archive_path: &Path, dest_dir: &Path) -> Result<usize> {
    tracing::debug!(archive = %archive_path.display(), dest = %dest_dir.display(), "Unpacking");

    let file = File::open(archive_path).map_err(|e| Error::io(archive_path, e))?;
    let mut archive =
        ZipArchive::new(BufReader::new(file)).map_err(|e| Error::zip(archive_path, e))?;

    fs::create_dir_all(dest_dir).map_err(|e| Error::io(dest_dir, e))?;
    archive
        .extract(dest_dir)
        .map_err(|e| Error::zip(archive_path, e))?;

    Ok(archive.len())
}

/// Compress the full contents of `source_dir` into `archive_path`.
///
/// Entry names are relative to `source_dir` and always use `/`. Entries
/// are written in sorted order so packing the same tree twice produces the
/// same entry sequence. An existing file at `archive_path` is overwritten.
///
/// Returns the number of files written.
pub fn pack(source_dir: &Path, archive_path: &Path) -> Result<usize> {
    tracing::debug!(source = %source_dir.display(), archive = %archive_path.display(), "Packing");

    let mut files = Vec::new();
    collect_files(source_dir, &mut files)?;
    files.sort();

    if let Some(parent) = archive_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let output = File::create(archive_path).map_err(|e| Error::io(archive_path, e))?;
    let mut writer = ZipWriter::new(BufWriter::new(output));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in &files {
        let name = entry_name(source_dir, path)?;
        writer
            .start_file(name, options)
            .map_err(|e| Error::zip(archive_path, e))?;

        let mut input = File::open(path).map_err(|e| Error::io(path, e))?;
        std::io::copy(&mut input, &mut writer).map_err(|e| Error::io(path, e))?;
    }

    let mut inner = writer.finish().map_err(|e| Error::zip(archive_path, e))?;
    inner.flush().map_err(|e| Error::io(archive_path, e))?;

    Ok(files.len())
}

/// Recursively collect regular files below `dir`.
fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
        if file_type.is_dir() {
            collect_files(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

/// Archive entry name for `path`, relative to `root` with `/` separators.
fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts = relative
        .components()
        .map(|c| {
            c.as_os_str()
                .to_str()
                .ok_or_else(|| Error::InvalidEntryName {
                    path: path.to_path_buf(),
                })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join("/"))
}
