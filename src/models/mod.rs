//! Data models for the word dictionary.
//!
//! - [`WordSet`] - The sorted, deduplicated in-memory word list
//! - [`SourceFile`] - An eligible `.txt` file discovered in the source directory
//! - [`ScanReport`] - Diagnostic counters produced by a source scan
//! - [`InitSummary`] / [`CacheAction`] - What `initialize` did and what it absorbed

pub mod report;
pub mod source;
pub mod word_set;

pub use report::{CacheAction, InitSummary, ScanReport};
pub use source::SourceFile;
pub use word_set::WordSet;
