//! Locations of the source directory and the cache file.

use std::path::PathBuf;

/// Default directory scanned for `.txt` source files
pub const DEFAULT_SOURCE_DIR: &str = "./txt";

/// Default location of the cached dictionary
pub const DEFAULT_CACHE_PATH: &str = "./dict/dictionary.txt";

/// Where the dictionary reads its sources from and caches its word list to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryConfig {
    pub source_dir: PathBuf,
    pub cache_path: PathBuf,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_DIR, DEFAULT_CACHE_PATH)
    }
}

impl DictionaryConfig {
    pub fn new(source_dir: impl Into<PathBuf>, cache_path: impl Into<PathBuf>) -> Self {
        Self { source_dir: source_dir.into(), cache_path: cache_path.into() }
    }
}
