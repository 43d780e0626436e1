use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{DictionaryError, Result};
use crate::models::SourceFile;

/// File name suffix that marks a source file as eligible
pub const SOURCE_EXTENSION: &str = ".txt";

/// Find every eligible source file directly inside `source_dir`
///
/// Only regular files (symlinks are followed) whose name ends in `.txt` are
/// returned. Subdirectories are not descended into. Results are sorted by
/// file name so scans are deterministic.
///
/// # Returns
///
/// An empty Vec if the source directory doesn't exist (not an error).
///
/// # Errors
///
/// Returns [`DictionaryError::SourceDirectory`] if the directory exists but
/// cannot be listed. Individual entries that can't be inspected are logged
/// and skipped.
pub fn discover_sources(source_dir: &Path) -> Result<Vec<SourceFile>> {
    if !source_dir.exists() {
        log::debug!("Source directory {} does not exist", source_dir.display());
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();

    let walker = WalkDir::new(source_dir).min_depth(1).max_depth(1).sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let source = e.into_io_error().unwrap_or_else(|| io::Error::other("walk failed"));
                return Err(DictionaryError::source_directory(source_dir, source));
            }
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", source_dir.display(), e);
                continue;
            }
        };

        if !entry.file_name().to_string_lossy().ends_with(SOURCE_EXTENSION) {
            continue;
        }

        // fs::metadata follows symlinks, so a link to a regular file counts
        let metadata = match fs::metadata(entry.path()) {
            Ok(metadata) => metadata,
            Err(e) => {
                log::warn!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }

        sources.push(SourceFile { path: entry.into_path(), modified: metadata.modified().ok() });
    }

    Ok(sources)
}
