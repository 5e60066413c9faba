//! Directory normalizer for unpacked trees
//!
//! Rewrites every JSON file so that diffs stay small and stable: keys are
//! sorted, one tab per nesting level, trailing newline. The descriptor's
//! `currentPageIndex` changes whenever someone switches pages in the editor,
//! so it is pinned to `1`.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use sketch_fs::SketchPath;

use crate::{Error, Result};

/// Key in `document.json` that is pinned on every normalization
pub const CURRENT_PAGE_KEY: &str = "currentPageIndex";

/// Outcome of [`normalize_dir`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Number of JSON files rewritten
    pub files: usize,
}

/// Normalize every `*.json` file below `root`, recursively.
///
/// Files with other extensions are left untouched. Running twice yields
/// byte-identical files.
pub async fn normalize_dir(root: &Path) -> Result<NormalizeReport> {
    let mut report = NormalizeReport::default();

    for path in sketch_fs::io::list_files(root).await? {
        if !is_json(&path) {
            continue;
        }

        let content = sketch_fs::io::read_text(&path).await?;
        let is_descriptor = path.file_stem().and_then(|s| s.to_str())
            == Some(SketchPath::DocumentDescriptor.as_str());
        let normalized = normalize_json(&content, is_descriptor).map_err(|source| {
            Error::InvalidJson {
                path: path.clone(),
                source,
            }
        })?;

        tracing::debug!(path = %path.display(), "Prettifying");
        sketch_fs::io::write_file(&path, normalized).await?;
        report.files += 1;
    }

    Ok(report)
}

/// Normalize one JSON document.
///
/// With `is_descriptor`, a top-level object gets `currentPageIndex` set to 1.
pub fn normalize_json(content: &str, is_descriptor: bool) -> serde_json::Result<String> {
    let mut value: Value = serde_json::from_str(content)?;

    if is_descriptor {
        if let Value::Object(map) = &mut value {
            map.insert(CURRENT_PAGE_KEY.to_string(), Value::from(1));
        }
    }

    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
    sort_keys(value).serialize(&mut serializer)?;
    out.push(b'\n');

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Rebuild objects with their keys in ascending order.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
