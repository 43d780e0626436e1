use std::fmt::Write;

use super::tokens::{accept_cache_token, tokenize};
use crate::models::WordSet;

/// Parse the text of a cache file into a word set
///
/// The first token is the stored entry count. It is advisory only and never
/// checked against the number of words that follow.
pub fn parse_cache_contents(contents: &str) -> WordSet {
    tokenize(contents).skip(1).filter(|token| accept_cache_token(token)).collect()
}

/// Render a word set in the cache file layout
///
/// First line is the entry count, followed by one word per line in ascending
/// order. Every line, including the last, ends with `\n`.
pub fn render_cache_contents(words: &WordSet) -> String {
    let capacity = words.iter().map(|w| w.len() + 1).sum::<usize>() + 16;
    let mut out = String::with_capacity(capacity);
    // Writing into a String can't fail
    let _ = writeln!(out, "{}", words.len());
    for word in words {
        out.push_str(word);
        out.push('\n');
    }
    out
}
