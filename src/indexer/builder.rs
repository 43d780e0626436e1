//! Word set builder for the source directory.
//!
//! # Error Handling Strategy
//!
//! - **File-level errors**: A source file that can't be read (missing, permission
//!   denied, not valid UTF-8) is logged as a warning, recorded in the
//!   [`ScanReport`], and skipped. The rest of the directory is still scanned.
//! - **Directory-level errors**: A source directory that exists but can't be
//!   listed is returned as an error, since there is nothing to scan.
//! - **Missing directory**: Not an error. The resulting set is simply empty.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{DictionaryError, Result};
use crate::indexer::source_discovery::discover_sources;
use crate::models::{ScanReport, WordSet};
use crate::parsers::{normalize_source_token, tokenize};

/// Build a fresh word set from every eligible file in `source_dir`
///
/// Each file is read in full, split on whitespace, and every token that has
/// no digit and more than one character is lowercased into the set.
///
/// # Errors
///
/// Returns [`DictionaryError::SourceDirectory`] if the directory can't be
/// listed. Unreadable individual files are reported in
/// [`ScanReport::failures`] instead.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use word_dictionary::build_word_set;
///
/// let (words, report) = build_word_set(Path::new("./txt"))?;
/// println!("{} unique words from {} files", words.len(), report.files_scanned);
/// # Ok::<(), word_dictionary::DictionaryError>(())
/// ```
pub fn build_word_set(source_dir: &Path) -> Result<(WordSet, ScanReport)> {
    let started = Instant::now();
    let sources = discover_sources(source_dir)?;

    let mut words = WordSet::new();
    let mut report = ScanReport::default();

    for source in &sources {
        let contents = match fs::read_to_string(&source.path) {
            Ok(contents) => contents,
            Err(e) => {
                let err = DictionaryError::source_read(&source.path, e);
                log::warn!("{}", err);
                report.files_skipped += 1;
                report.failures.push(err);
                continue;
            }
        };

        report.files_scanned += 1;
        let before = report.tokens_accepted;
        for token in tokenize(&contents) {
            report.tokens_seen += 1;
            if let Some(word) = normalize_source_token(token) {
                report.tokens_accepted += 1;
                words.insert(word);
            }
        }
        log::debug!(
            "Scanned {}: {} words accepted",
            source.path.display(),
            report.tokens_accepted - before
        );
    }

    report.unique_words = words.len();

    log::info!(
        "Scanned {} source files ({} skipped), {}/{} words accepted, {} unique",
        report.files_scanned,
        report.files_skipped,
        report.tokens_accepted,
        report.tokens_seen,
        report.unique_words
    );
    log::debug!("Reading source files took {:?}", started.elapsed());

    Ok((words, report))
}
