use serde::Serialize;

use crate::error::DictionaryError;

/// Counters gathered during a source scan
///
/// Diagnostic only: none of these influence which words end up in the set.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Eligible `.txt` files that were read successfully
    pub files_scanned: usize,
    /// Eligible `.txt` files that couldn't be read and were skipped
    pub files_skipped: usize,
    /// Raw whitespace-delimited tokens seen across all scanned files
    pub tokens_seen: usize,
    /// Tokens that passed the filter (before deduplication)
    pub tokens_accepted: usize,
    /// Unique words in the resulting set
    pub unique_words: usize,
    /// Why each skipped file couldn't be read
    pub failures: Vec<DictionaryError>,
}

/// What `initialize` ended up doing with the cache file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheAction {
    /// No cache existed, so one was built from the sources
    Built,
    /// The cache was stale and has been rebuilt
    Rebuilt,
    /// The cache was fresh and has been loaded
    Loaded,
}

/// Outcome of an `initialize` call, including every failure it absorbed
#[derive(Debug)]
pub struct InitSummary {
    pub action: CacheAction,
    pub word_count: usize,
    /// Counters from the source scan, if one ran. Its failures are moved
    /// into [`InitSummary::failures`].
    pub scan: Option<ScanReport>,
    pub failures: Vec<DictionaryError>,
}

impl InitSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
