//! JSON file helpers.
//!
//! All filesystem access of the crate goes through this module: reading a
//! JSON document into a typed value, writing a value back as JSON, and
//! listing the base names of the files in a folder.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{
    Result,
    StoreError,
};

/// Output layout used by [`write_json_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Single line, no whitespace.
    #[default]
    Compact,
    /// Indented, one entry per line.
    Pretty,
}

/// Reads the JSON document at `path` into `T`.
///
/// The whole file is read as UTF-8 before parsing.
///
/// # Returns
/// - `Ok(Some(value))`: the file exists and parsed
/// - `Ok(None)`: the file does not exist
/// - `Err(StoreError)`: the file exists but could not be read or parsed
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "JSON file not found");
            return Ok(None);
        }
        Err(e) => return Err(StoreError::io(path, e)),
    };

    tracing::debug!(path = %path.display(), bytes = content.len(), "Read JSON file");

    serde_json::from_str(&content).map(Some).map_err(|e| StoreError::json(path, e))
}

/// Writes `value` to `path` as compact JSON.
///
/// See [`write_json_with`].
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    write_json_with(path, value, JsonStyle::Compact)
}

/// Writes `value` to `path` as JSON in the given style.
///
/// Missing parent directories and the file itself are created; an existing
/// file is truncated and overwritten. The write is not atomic.
pub fn write_json_with<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    style: JsonStyle,
) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }

    let json = match style {
        JsonStyle::Compact => serde_json::to_string(value),
        JsonStyle::Pretty => serde_json::to_string_pretty(value),
    }
    .map_err(|e| StoreError::json(path, e))?;

    fs::write(path, json.as_bytes()).map_err(|e| StoreError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "Wrote JSON file");

    Ok(())
}

/// Lists the base names of the files directly inside `folder`.
///
/// Subdirectories are skipped. With a non-empty `extension`, only files whose
/// name ends in `.<extension>` are kept. Each name loses everything from its
/// last `.` onward, unless that dot is the first character (`.json` stays
/// `.json`).
///
/// A folder that does not exist, or is not a directory, yields an empty list.
/// The order follows the directory enumeration and is not stable across
/// platforms.
#[must_use]
pub fn list_file_base_names(folder: &Path, extension: Option<&str>) -> Vec<String> {
    if !folder.is_dir() {
        tracing::debug!(folder = %folder.display(), "Folder not found, nothing to list");
        return Vec::new();
    }

    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(folder = %folder.display(), %err, "Failed to read folder");
            return Vec::new();
        }
    };

    let suffix = extension.filter(|ext| !ext.is_empty()).map(|ext| format!(".{ext}"));
    let mut names = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(?err, "Failed to read directory entry");
                continue;
            }
        };

        // Follows symlinks, so a link to a file counts as a file
        if !entry.path().is_file() {
            continue;
        }

        let Ok(file_name) = entry.file_name().into_string() else {
            tracing::warn!(path = %entry.path().display(), "Skipping non UTF-8 file name");
            continue;
        };

        if let Some(suffix) = &suffix
            && !file_name.ends_with(suffix.as_str())
        {
            continue;
        }

        names.push(strip_extension(&file_name).to_string());
    }

    tracing::debug!(folder = %folder.display(), count = names.len(), "Listed folder");
    names
}

/// Drops everything from the last `.` onward, keeping dotfiles intact.
fn strip_extension(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}
