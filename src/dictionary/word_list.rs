//! In-memory word list.

use std::io::BufRead;

use rustc_hash::FxHashSet;

use super::{canonicalize, Dictionary};
use crate::core::ParseError;

/// A read-only set of uppercase words.
///
/// ## Example
///
/// ```
/// use rust_scrabble::dictionary::{Dictionary, WordList};
///
/// let words = WordList::from_words(["cat", "Cats", "DOG"]);
/// assert_eq!(words.len(), 3);
/// assert!(words.contains("CAT"));
/// assert!(words.contains("cats"));
/// assert!(!words.contains("COW"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Create an empty word list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a word list from words in any case.
    ///
    /// Surrounding whitespace is trimmed and empty entries are skipped.
    pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        let mut list = Self::new();
        for word in words {
            list.insert(word.as_ref());
        }
        list
    }

    /// Read one word per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, ParseError> {
        let mut list = Self::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim_start().starts_with('#') {
                continue;
            }
            list.insert(&line);
        }
        Ok(list)
    }

    /// Add a word. Returns `false` if it was already present or empty.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(canonicalize(word))
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        if word.chars().all(|c| !c.is_lowercase()) {
            self.words.contains(word)
        } else {
            self.words.contains(&canonicalize(word))
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
