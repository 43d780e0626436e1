//! Error kinds surfaced by the dictionary cache manager.
//!
//! None of these unwind past [`WordDictionary`](crate::WordDictionary) as hard
//! failures. `initialize` absorbs them into its summary, while the individual
//! scan/load/store operations hand them back so callers can log, retry or
//! ignore them.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, DictionaryError>;

#[derive(Debug, Error)]
pub enum DictionaryError {
    /// A single source file could not be opened or read. Scanning skips it.
    #[error("failed to read source file {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source directory exists but could not be listed.
    #[error("failed to list source directory {}: {source}", .path.display())]
    SourceDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The cache file could not be read during load.
    #[error("failed to read dictionary cache {}: {source}", .path.display())]
    CacheRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The cache file could not be written during store.
    #[error("failed to write dictionary cache {}: {source}", .path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DictionaryError {
    pub(crate) fn source_read(path: &Path, source: io::Error) -> Self {
        Self::SourceRead { path: path.to_path_buf(), source }
    }

    pub(crate) fn source_directory(path: &Path, source: io::Error) -> Self {
        Self::SourceDirectory { path: path.to_path_buf(), source }
    }

    pub(crate) fn cache_read(path: &Path, source: io::Error) -> Self {
        Self::CacheRead { path: path.to_path_buf(), source }
    }

    pub(crate) fn cache_write(path: &Path, source: io::Error) -> Self {
        Self::CacheWrite { path: path.to_path_buf(), source }
    }

    /// Path of the file or directory the failure relates to
    pub fn path(&self) -> &Path {
        match self {
            Self::SourceRead { path, .. }
            | Self::SourceDirectory { path, .. }
            | Self::CacheRead { path, .. }
            | Self::CacheWrite { path, .. } => path,
        }
    }

    /// Short machine-friendly name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SourceRead { .. } => "source_read",
            Self::SourceDirectory { .. } => "source_directory",
            Self::CacheRead { .. } => "cache_read",
            Self::CacheWrite { .. } => "cache_write",
        }
    }
}
