//! Source scanning
//!
//! Turns a directory of `.txt` files into a [`WordSet`](crate::models::WordSet).
//! Discovery is non-recursive and only considers regular files whose name ends
//! in `.txt`. Unreadable files are skipped and reported rather than aborting
//! the whole rebuild.

pub mod builder;
pub mod source_discovery;

pub use builder::build_word_set;
pub use source_discovery::{SOURCE_EXTENSION, discover_sources};
