//! Timestamp-based staleness detection
//!
//! The cache is stale when any eligible source file was modified strictly
//! after the cache file. Modification times are coarse on some filesystems
//! and can race with concurrent writers; both are accepted limitations.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::indexer::discover_sources;

/// Last-modified time of the cache file, if it exists and can be read
pub fn cache_modified(cache_path: &Path) -> Option<SystemTime> {
    fs::metadata(cache_path).and_then(|m| m.modified()).ok()
}

/// Cache modification time as a UTC timestamp, for display
pub fn cache_modified_utc(cache_path: &Path) -> Option<DateTime<Utc>> {
    cache_modified(cache_path).map(DateTime::<Utc>::from)
}

/// Check whether the cache at `cache_path` is out of date
///
/// Stops at the first source file that is newer than the cache. Source files
/// whose modification time can't be read never trigger staleness. A cache
/// whose own modification time can't be read is always stale. An empty or
/// missing source directory leaves an existing cache fresh.
///
/// # Errors
///
/// Returns [`DictionaryError::SourceDirectory`](crate::DictionaryError::SourceDirectory)
/// if the source directory exists but can't be listed.
pub fn is_stale(source_dir: &Path, cache_path: &Path) -> Result<bool> {
    let Some(cache_time) = cache_modified(cache_path) else {
        log::debug!("Cache modification time unavailable for {}", cache_path.display());
        return Ok(true);
    };

    for source in discover_sources(source_dir)? {
        if let Some(source_time) = source.modified
            && source_time > cache_time
        {
            log::debug!("{} is newer than the cache", source.path.display());
            return Ok(true);
        }
    }

    Ok(false)
}
