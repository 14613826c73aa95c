//! Load and save library snapshots and article batches as JSON files.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use curator::{Article, CuratorError, InMemoryLibrary, LibrarySnapshot, Result};
use tracing::debug;

/// Load the library snapshot at `path`.
///
/// A missing file yields an empty library, so the first `submit` can create it.
pub fn load_library(path: &Path) -> Result<InMemoryLibrary> {
    if !path.exists() {
        debug!(path = %path.display(), "no library snapshot; starting empty");
        return Ok(InMemoryLibrary::new());
    }

    let file = File::open(path).map_err(|e| {
        CuratorError::Persistence(format!(
            "Failed to open library '{}': {}",
            path.display(),
            e
        ))
    })?;

    let snapshot: LibrarySnapshot = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        CuratorError::Persistence(format!(
            "Failed to parse library '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(InMemoryLibrary::from_snapshot(snapshot))
}

/// Save the library to `path`, creating the parent directory if needed.
pub fn save_library(library: &InMemoryLibrary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                CuratorError::Persistence(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(path).map_err(|e| {
        CuratorError::Persistence(format!(
            "Failed to create file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &library.snapshot()?).map_err(|e| {
        CuratorError::Persistence(format!("Failed to serialize library: {}", e))
    })?;

    // Dropping a BufWriter discards flush errors.
    writer.flush().map_err(|e| {
        CuratorError::Persistence(format!(
            "Failed to write library '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Read a JSON array of articles.
pub fn load_batch(path: &Path) -> Result<Vec<Article>> {
    let file = File::open(path).map_err(|e| {
        CuratorError::Persistence(format!(
            "Failed to open batch '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(serde_json::from_reader(BufReader::new(file))?)
}
