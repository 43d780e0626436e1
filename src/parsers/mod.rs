//! Token filtering and cache-file parsing
//!
//! Source text and cache text are both split on runs of whitespace, but the
//! two go through different filters:
//!
//! - **Source tokens** are rejected if they contain a decimal digit or are a
//!   single character, and are lowercased otherwise.
//!
//! - **Cache tokens** were already normalized when they were stored, so they
//!   are only rejected for containing a digit. That check is also what drops
//!   the entry count on the first line.

pub mod cache;
pub mod tokens;

pub use cache::{parse_cache_contents, render_cache_contents};
pub use tokens::{
    accept_cache_token, contains_digit, normalize_query, normalize_source_token, tokenize,
};
