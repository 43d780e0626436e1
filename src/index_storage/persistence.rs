//! Cache persistence: load/save with atomic writes

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{DictionaryError, Result};
use crate::models::WordSet;
use crate::parsers::{parse_cache_contents, render_cache_contents};

/// Sibling path used while writing, renamed over the cache once complete
fn temp_path(cache_path: &Path) -> PathBuf {
    let mut name = cache_path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    cache_path.with_file_name(name)
}

/// Load a word set from the cache file
///
/// The stored entry count on the first line is skipped, not validated.
///
/// # Errors
///
/// Returns [`DictionaryError::CacheRead`] if the file can't be read.
pub fn load_word_set(cache_path: &Path) -> Result<WordSet> {
    let started = Instant::now();
    let contents =
        fs::read_to_string(cache_path).map_err(|e| DictionaryError::cache_read(cache_path, e))?;
    let words = parse_cache_contents(&contents);
    log::debug!("Loading {} took {:?}", cache_path.display(), started.elapsed());
    Ok(words)
}

/// Save a word set to the cache file atomically (temp file + rename)
///
/// Creates the parent directory if it is missing. On failure the previous
/// cache, if any, is left in place.
///
/// # Errors
///
/// Returns [`DictionaryError::CacheWrite`] if any step of the write fails.
pub fn store_word_set(cache_path: &Path, words: &WordSet) -> Result<()> {
    let started = Instant::now();

    if let Some(parent) = cache_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| DictionaryError::cache_write(cache_path, e))?;
    }

    let temp = temp_path(cache_path);
    let contents = render_cache_contents(words);
    if let Err(e) = fs::write(&temp, contents) {
        let _ = fs::remove_file(&temp);
        return Err(DictionaryError::cache_write(cache_path, e));
    }
    if let Err(e) = fs::rename(&temp, cache_path) {
        let _ = fs::remove_file(&temp);
        return Err(DictionaryError::cache_write(cache_path, e));
    }

    log::debug!(
        "Cached {} words to {} in {:?}",
        words.len(),
        cache_path.display(),
        started.elapsed()
    );
    Ok(())
}
