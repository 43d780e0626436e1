//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use filetime::{FileTime, set_file_mtime};
use tempfile::TempDir;
use word_dictionary::{DictionaryConfig, WordDictionary};

/// Base timestamp for deterministic mtimes (2020-01-01T00:00:00Z)
pub const BASE_TIME: i64 = 1_577_836_800;

/// Builder for a workspace holding a `txt/` source directory and a `dict/` cache location
pub struct SourceDirBuilder {
    temp_dir: TempDir,
}

impl SourceDirBuilder {
    /// Create a new builder with an empty `txt/` source directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp_dir.path().join("txt")).expect("Failed to create txt dir");
        Self { temp_dir }
    }

    /// Create a builder whose source directory does not exist
    pub fn without_source_dir() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Add a source file with the given name and content
    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.with_bytes(name, content.as_bytes())
    }

    /// Add a source file with raw bytes (e.g. invalid UTF-8)
    pub fn with_bytes(self, name: &str, content: &[u8]) -> Self {
        let path = self.temp_dir.path().join("txt").join(name);
        fs::write(path, content).expect("Failed to write source file");
        self
    }

    /// Build and return the workspace
    pub fn build(self) -> Workspace {
        Workspace { temp_dir: self.temp_dir }
    }
}

impl Default for SourceDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A temporary workspace laid out like the default `./txt` + `./dict/dictionary.txt`
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root().join("txt")
    }

    pub fn source_file(&self, name: &str) -> PathBuf {
        self.source_dir().join(name)
    }

    pub fn cache_path(&self) -> PathBuf {
        self.root().join("dict").join("dictionary.txt")
    }

    pub fn config(&self) -> DictionaryConfig {
        DictionaryConfig::new(self.source_dir(), self.cache_path())
    }

    /// A fresh, uninitialized dictionary pointed at this workspace
    pub fn dictionary(&self) -> WordDictionary {
        WordDictionary::new(self.config())
    }

    /// Write (or overwrite) a source file
    pub fn write_source(&self, name: &str, content: &str) {
        fs::write(self.source_file(name), content).expect("Failed to write source file");
    }

    pub fn read_cache(&self) -> String {
        fs::read_to_string(self.cache_path()).expect("Failed to read cache file")
    }

    /// Write the cache file directly, creating `dict/` if needed
    pub fn write_cache(&self, content: &str) {
        fs::create_dir_all(self.root().join("dict")).expect("Failed to create dict dir");
        fs::write(self.cache_path(), content).expect("Failed to write cache file");
    }

    pub fn cache_mtime(&self) -> FileTime {
        let metadata = fs::metadata(self.cache_path()).expect("Failed to stat cache file");
        FileTime::from_last_modification_time(&metadata)
    }

    /// Set a file's mtime to `BASE_TIME + offset_secs`
    pub fn set_mtime(&self, path: &Path, offset_secs: i64) {
        set_file_mtime(path, FileTime::from_unix_time(BASE_TIME + offset_secs, 0))
            .expect("Failed to set mtime");
    }

    /// Make the source directory unlistable until the guard is dropped
    ///
    /// Returns `None` when permissions aren't enforced (e.g. running as root).
    #[cfg(unix)]
    pub fn lock_source_dir(&self) -> Option<LockedDir> {
        use std::os::unix::fs::PermissionsExt;

        let path = self.source_dir();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000))
            .expect("Failed to lock source dir");
        let guard = LockedDir { path };
        if fs::read_dir(&guard.path).is_ok() { None } else { Some(guard) }
    }

    /// Make every source file older than the cache
    pub fn age_sources(&self) {
        for entry in fs::read_dir(self.source_dir()).expect("Failed to read txt dir") {
            let path = entry.expect("Failed to read entry").path();
            self.set_mtime(&path, 0);
        }
        self.set_mtime(&self.cache_path(), 1_000);
    }
}

/// Collect a dictionary's words into a Vec for easy comparison
pub fn words_of(dictionary: &WordDictionary) -> Vec<String> {
    dictionary.words().iter().cloned().collect()
}

/// Restores a locked directory's permissions on drop so the temp dir can be removed
#[cfg(unix)]
pub struct LockedDir {
    path: PathBuf,
}

#[cfg(unix)]
impl Drop for LockedDir {
    fn drop(&mut self) {
        use std::os::unix::fs::PermissionsExt;

        let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o755));
    }
}
