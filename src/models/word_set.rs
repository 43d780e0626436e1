use std::collections::BTreeSet;
use std::collections::btree_set;

/// Ordered collection of unique dictionary words
///
/// Backed by a `BTreeSet`, so iteration is always in ascending lexicographic
/// order and duplicates collapse on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, returning `true` if it was not already present
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate words in ascending order
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { words: iter.into_iter().map(Into::into).collect() }
    }
}
