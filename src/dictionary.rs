//! Dictionary cache manager
//!
//! [`WordDictionary`] owns the in-memory [`WordSet`] and decides, on
//! [`initialize`](WordDictionary::initialize), whether the persisted cache can
//! be loaded as-is or has to be rebuilt from the source files.
//!
//! # Error Handling Strategy
//!
//! Failures are handled where they occur and never abort initialization:
//!
//! - **Source read failures** skip the offending file; the rest is scanned.
//! - **Cache write failures** are reported, but the freshly built set stays in
//!   memory and keeps answering queries.
//! - **Cache read failures** leave the set as it was before the load. There is
//!   no automatic fallback to a rescan; callers can trigger one themselves.
//!
//! Everything absorbed this way is returned in the [`InitSummary`] and logged
//! through the `log` facade.

use std::path::Path;
use std::time::Instant;

use crate::config::DictionaryConfig;
use crate::error::{DictionaryError, Result};
use crate::index_storage::{is_stale, load_word_set, store_word_set};
use crate::indexer::build_word_set;
use crate::models::{CacheAction, InitSummary, ScanReport, WordSet};
use crate::parsers::normalize_query;

/// Outcome of a cache validation
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// The cache was stale and the word set was rebuilt from the sources
    pub rebuilt: bool,
    /// Counters from the rebuild scan, if one ran. Its failures are moved
    /// into [`ValidationReport::failures`].
    pub scan: Option<ScanReport>,
    pub failures: Vec<DictionaryError>,
}

/// Builds, caches and queries the word list for one source directory
#[derive(Debug, Clone, Default)]
pub struct WordDictionary {
    config: DictionaryConfig,
    words: WordSet,
}

impl WordDictionary {
    /// Create a dictionary with an empty word set. Nothing is read until
    /// [`initialize`](Self::initialize) is called.
    pub fn new(config: DictionaryConfig) -> Self {
        Self { config, words: WordSet::new() }
    }

    /// Load the cached dictionary, rebuilding it first if it is missing or stale
    ///
    /// Repeated calls with unchanged sources leave both the word set and the
    /// cache file unchanged.
    pub fn initialize(&mut self) -> InitSummary {
        let started = Instant::now();
        let mut failures = Vec::new();
        let mut scan = None;

        let action = if self.config.cache_path.exists() {
            log::info!("Cached dictionary found, validating {}", self.cache_path().display());
            let validation = self.validate_cache();
            failures.extend(validation.failures);
            scan = validation.scan;

            if validation.rebuilt {
                CacheAction::Rebuilt
            } else {
                if let Err(e) = self.load_dictionary() {
                    log::warn!("{}", e);
                    failures.push(e);
                }
                CacheAction::Loaded
            }
        } else {
            log::info!("Cached dictionary not found, creating it from source files");
            scan = self.rebuild(&mut failures);
            CacheAction::Built
        };

        log::debug!("Initialization took {:?}", started.elapsed());
        InitSummary { action, word_count: self.words.len(), scan, failures }
    }

    /// Rebuild and rewrite the cache if any source file is newer than it
    ///
    /// A source directory that can't be listed can't prove the cache stale, so
    /// the cache is kept and the failure is reported.
    pub fn validate_cache(&mut self) -> ValidationReport {
        let started = Instant::now();
        let mut report = ValidationReport::default();

        match is_stale(&self.config.source_dir, &self.config.cache_path) {
            Ok(true) => {
                log::info!("Cached dictionary out of date, updating from source files");
                report.scan = self.rebuild(&mut report.failures);
                report.rebuilt = report.scan.is_some();
            }
            Ok(false) => log::info!("Cached dictionary is up to date"),
            Err(e) => {
                log::warn!("Could not check cache freshness: {}", e);
                report.failures.push(e);
            }
        }

        log::debug!("Validation took {:?}", started.elapsed());
        report
    }

    /// Replace the word set with a fresh scan of the source directory
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::SourceDirectory`] if the directory can't be
    /// listed, in which case the current word set is kept. Individual
    /// unreadable files are reported in the returned [`ScanReport`].
    pub fn scan_sources(&mut self) -> Result<ScanReport> {
        let (words, report) = build_word_set(&self.config.source_dir)?;
        self.words = words;
        Ok(report)
    }

    /// Replace the word set with the contents of the cache file
    ///
    /// Returns the number of words loaded.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::CacheRead`] if the cache can't be read; the
    /// current word set is left untouched.
    pub fn load_dictionary(&mut self) -> Result<usize> {
        self.words = load_word_set(&self.config.cache_path)?;
        log::info!("Dictionary contains {} valid words", self.words.len());
        Ok(self.words.len())
    }

    /// Write the current word set to the cache file
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::CacheWrite`] if the write fails. The
    /// in-memory word set is unaffected either way.
    pub fn store_cache(&self) -> Result<()> {
        store_word_set(&self.config.cache_path, &self.words)?;
        log::info!("Dictionary cached to {}", self.cache_path().display());
        Ok(())
    }

    /// Whether `word` is in the dictionary, ignoring surrounding whitespace and case
    pub fn query(&self, word: &str) -> bool {
        self.words.contains(&normalize_query(word))
    }

    /// Path of the persisted cache file
    pub fn cache_path(&self) -> &Path {
        &self.config.cache_path
    }

    pub fn source_dir(&self) -> &Path {
        &self.config.source_dir
    }

    pub fn words(&self) -> &WordSet {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Scan then store, collecting failures
    ///
    /// Returns the scan counters, or `None` if the source directory couldn't
    /// be listed. In that case the word set is kept and nothing is stored.
    fn rebuild(&mut self, failures: &mut Vec<DictionaryError>) -> Option<ScanReport> {
        let mut report = match self.scan_sources() {
            Ok(report) => report,
            Err(e) => {
                log::warn!("{}", e);
                failures.push(e);
                return None;
            }
        };
        failures.append(&mut report.failures);

        if let Err(e) = self.store_cache() {
            log::warn!("{}", e);
            failures.push(e);
        }
        Some(report)
    }
}
