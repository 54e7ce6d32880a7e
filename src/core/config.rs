//! Engine configuration.
//!
//! The caller owns the scoring rules and hands them to the engine:
//! - `LetterValues`: base points per letter
//! - `EngineConfig`: letter values, rack capacity, bingo bonus
//!
//! `EngineConfig::default()` is the standard English tournament setup
//! (7-tile rack, +50 for using the whole rack).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::letter::Letter;

/// Standard English tile values.
const ENGLISH_VALUES: [(char, u32); 26] = [
    ('A', 1), ('B', 3), ('C', 3), ('D', 2), ('E', 1), ('F', 4), ('G', 2),
    ('H', 4), ('I', 1), ('J', 8), ('K', 5), ('L', 1), ('M', 3), ('N', 1),
    ('O', 1), ('P', 3), ('Q', 10), ('R', 1), ('S', 1), ('T', 1), ('U', 1),
    ('V', 4), ('W', 4), ('X', 8), ('Y', 4), ('Z', 10),
];

/// Base point value of each letter.
///
/// Letters missing from the table are worth 0.
///
/// ## Example
///
/// ```
/// use rust_scrabble::core::{Letter, LetterValues};
///
/// let values = LetterValues::english();
/// assert_eq!(values.value(Letter::new('Q').unwrap()), 10);
///
/// let custom = LetterValues::from_pairs([('A', 2), ('Ñ', 8)]);
/// assert_eq!(custom.value(Letter::new('ñ').unwrap()), 8);
/// assert_eq!(custom.value(Letter::new('B').unwrap()), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterValues {
    values: FxHashMap<Letter, u32>,
}

impl LetterValues {
    /// Standard English tile values.
    #[must_use]
    pub fn english() -> Self {
        Self::from_pairs(ENGLISH_VALUES)
    }

    /// Build a table from `(char, points)` pairs.
    ///
    /// Characters that are not letters are skipped.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, u32)>) -> Self {
        let values = pairs
            .into_iter()
            .filter_map(|(c, points)| Letter::new(c).map(|letter| (letter, points)))
            .collect();
        Self { values }
    }

    /// Set the value of a single letter.
    #[must_use]
    pub fn with_value(mut self, letter: Letter, points: u32) -> Self {
        self.values.insert(letter, points);
        self
    }

    /// Base value of a letter (0 if not in the table).
    #[must_use]
    pub fn value(&self, letter: Letter) -> u32 {
        self.values.get(&letter).copied().unwrap_or(0)
    }

    /// Number of letters in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Scoring configuration supplied by the enclosing game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Base letter values.
    pub letter_values: LetterValues,

    /// Tiles a full rack holds. Placing this many tiles in one move is a bingo.
    pub rack_capacity: usize,

    /// Flat bonus added to a bingo move.
    pub bingo_bonus: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            letter_values: LetterValues::english(),
            rack_capacity: 7,
            bingo_bonus: 50,
        }
    }
}

impl EngineConfig {
    /// Create a config with the given letter values and standard rack rules.
    #[must_use]
    pub fn new(letter_values: LetterValues) -> Self {
        Self {
            letter_values,
            ..Self::default()
        }
    }

    /// Set the rack capacity.
    ///
    /// Panics if `capacity` is 0.
    #[must_use]
    pub fn with_rack_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Rack capacity must be at least 1");
        self.rack_capacity = capacity;
        self
    }

    /// Set the bingo bonus.
    #[must_use]
    pub fn with_bingo_bonus(mut self, bonus: u32) -> Self {
        self.bingo_bonus = bonus;
        self
    }

    /// Replace the letter value table.
    #[must_use]
    pub fn with_letter_values(mut self, letter_values: LetterValues) -> Self {
        self.letter_values = letter_values;
        self
    }

    /// Check whether placing `tiles_placed` tiles earns the bingo bonus.
    #[must_use]
    pub fn is_bingo(&self, tiles_placed: usize) -> bool {
        tiles_placed == self.rack_capacity
    }
}
