/// Whether `c` delimits tokens
///
/// Only ASCII whitespace counts. Unicode spaces such as U+00A0 stay part of
/// the token.
fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Split text into raw tokens on runs of ASCII whitespace
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_delimiter).filter(|token| !token.is_empty())
}

/// Whether a token contains any decimal digit
pub fn contains_digit(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
}

/// Normalize a token read from a source file
///
/// Returns `None` for tokens that contain a digit or are a single UTF-16
/// code unit long, otherwise the lowercased token.
pub fn normalize_source_token(token: &str) -> Option<String> {
    if contains_digit(token) || token.encode_utf16().nth(1).is_none() {
        return None;
    }
    Some(token.to_lowercase())
}

/// Whether a token read back from the cache file belongs in the word set
///
/// Cache tokens were normalized when they were written, so only the digit
/// check applies. It also drops the leading entry count.
pub fn accept_cache_token(token: &str) -> bool {
    !contains_digit(token)
}

/// Normalize a lookup term the same way stored words were normalized
pub fn normalize_query(word: &str) -> String {
    word.trim().to_lowercase()
}
