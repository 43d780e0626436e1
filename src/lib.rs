//! Word Dictionary - Build and query a cached word list from a folder of text files
//!
//! Scans every `.txt` file in a source directory, keeps the unique lowercase
//! words that contain no digits and are longer than one character, and caches
//! the sorted result in a flat text file. Later runs load the cache directly
//! unless a source file has been modified since it was written.
//!
//! # Example
//!
//! ```no_run
//! use word_dictionary::{DictionaryConfig, WordDictionary};
//!
//! let mut dictionary = WordDictionary::new(DictionaryConfig::default());
//! let summary = dictionary.initialize();
//! println!("{:?}: {} words", summary.action, summary.word_count);
//! assert!(dictionary.query(" Abandoning "));
//! ```

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod index_storage;
pub mod indexer;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use config::DictionaryConfig;
pub use dictionary::{ValidationReport, WordDictionary};
pub use error::{DictionaryError, Result};
pub use indexer::build_word_set;
pub use models::{CacheAction, InitSummary, ScanReport, WordSet};
pub use utils::format_count;
