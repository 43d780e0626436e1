//! Persistent dictionary cache
//!
//! The word set is cached as a single flat text file so later runs can skip
//! rescanning the sources. Layout:
//!
//! ```text
//! 3
//! ace
//! big
//! cat
//! ```
//!
//! The first line is the entry count (advisory, never validated), followed by
//! one word per line in ascending order. Validity is decided purely by
//! comparing source and cache modification times; there is no format version.

pub mod metadata;
pub mod persistence;

pub use metadata::{cache_modified, cache_modified_utc, is_stale};
pub use persistence::{load_word_set, store_word_set};
