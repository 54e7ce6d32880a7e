//! Word lookup.
//!
//! The engine only needs a membership test. `Dictionary` is the seam an
//! enclosing game plugs its own word source into; `WordList` is the bundled
//! in-memory implementation.
//!
//! Words are canonicalized to uppercase before every lookup, and each
//! candidate is probed exactly once.

pub mod word_list;

pub use word_list::WordList;

use std::sync::Arc;

/// Membership test for candidate words.
///
/// Implementations must be safe for concurrent reads: the engine may be
/// called from many threads against one dictionary.
pub trait Dictionary: Send + Sync {
    /// Check if `word` is playable. `word` is always uppercase.
    fn contains(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// Canonical form used for every dictionary lookup.
#[must_use]
pub fn canonicalize(word: &str) -> String {
    word.to_uppercase()
}
