//! Letters and tiles.
//!
//! A `Letter` is always an uppercase alphabetic character. A `Tile` is
//! what a board cell holds: a letter plus a flag saying whether the tile
//! is a blank standing in for that letter.
//!
//! ## Text form
//!
//! Tiles render as their letter; blank tiles render in lowercase.
//! This is the form used by `BoardSnapshot::from_rows` and `Display`.
//!
//! ```
//! use rust_scrabble::core::{Letter, Tile};
//!
//! let q = Letter::new('q').unwrap();
//! assert_eq!(q.as_char(), 'Q');
//!
//! assert_eq!(Tile::new(q).to_string(), "Q");
//! assert_eq!(Tile::blank(q).to_string(), "q");
//! ```

use serde::{Deserialize, Serialize};

use super::error::ParseError;

/// An uppercase letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(char);

impl Letter {
    /// Create a letter, uppercasing the input.
    ///
    /// Returns `None` for non-alphabetic characters and for characters
    /// whose uppercase form is more than one character.
    #[must_use]
    pub fn new(c: char) -> Option<Self> {
        if !c.is_alphabetic() {
            return None;
        }
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => Some(Self(u)),
            _ => None,
        }
    }

    /// Get the underlying character (always uppercase).
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Letter::new(c).ok_or(ParseError::InvalidLetter(c))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tile sitting on a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// The letter shown on the board.
    pub letter: Letter,
    /// Blank tiles stand in for `letter` and always score 0.
    pub blank: bool,
}

impl Tile {
    /// A regular lettered tile.
    #[must_use]
    pub const fn new(letter: Letter) -> Self {
        Self { letter, blank: false }
    }

    /// A blank tile representing `letter`.
    #[must_use]
    pub const fn blank(letter: Letter) -> Self {
        Self { letter, blank: true }
    }

    /// Parse a tile from its text form.
    ///
    /// Uppercase letters are regular tiles, lowercase letters are blanks.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let letter = Letter::new(c)?;
        Some(if c.is_lowercase() {
            Self::blank(letter)
        } else {
            Self::new(letter)
        })
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.blank {
            write!(f, "{}", self.letter.0.to_lowercase())
        } else {
            write!(f, "{}", self.letter.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_uppercases() {
        assert_eq!(Letter::new('a').map(Letter::as_char), Some('A'));
        assert_eq!(Letter::new('Z').map(Letter::as_char), Some('Z'));
        assert_eq!(Letter::new('é').map(Letter::as_char), Some('É'));
    }

    #[test]
    fn test_letter_rejects_non_alphabetic() {
        assert_eq!(Letter::new('?'), None);
        assert_eq!(Letter::new('3'), None);
        assert_eq!(Letter::new(' '), None);
        // 'ß' uppercases to "SS"
        assert_eq!(Letter::new('ß'), None);
    }

    #[test]
    fn test_tile_from_char() {
        let a = Letter::new('A').unwrap();
        assert_eq!(Tile::from_char('A'), Some(Tile::new(a)));
        assert_eq!(Tile::from_char('a'), Some(Tile::blank(a)));
        assert_eq!(Tile::from_char('.'), None);
    }

    #[test]
    fn test_letter_serialization() {
        let letter = Letter::new('k').unwrap();
        let json = serde_json::to_string(&letter).unwrap();
        assert_eq!(json, "\"K\"");

        let back: Letter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, letter);

        assert!(serde_json::from_str::<Letter>("\"?\"").is_err());
    }
}
