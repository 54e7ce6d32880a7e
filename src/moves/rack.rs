//! Player racks and tile allocation.
//!
//! A `Rack` is the multiset of tiles a player holds: letters plus blanks.
//! The engine never removes tiles from a rack; it only checks that a move
//! can be paid for and records which placements had to use a blank.
//!
//! ## Allocation rule
//!
//! Placements are paid for in move order:
//! - A placement marked `is_blank` always uses a blank.
//! - Any other placement uses its exact letter while one is left, and
//!   falls back to a blank only once that letter is exhausted.
//!
//! A fallback blank scores like any other blank (0 points).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::placement::Move;
use crate::core::{Letter, ParseError};

/// A tile as it sits on a rack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RackTile {
    Letter(Letter),
    Blank,
}

impl std::fmt::Display for RackTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RackTile::Letter(letter) => write!(f, "{letter}"),
            RackTile::Blank => write!(f, "?"),
        }
    }
}

/// How a move's placements are paid for from the rack.
///
/// Entries line up with `Move::placements()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RackAllocation {
    uses_blank: SmallVec<[bool; 7]>,
}

impl RackAllocation {
    /// Check if placement `index` is paid for with a blank.
    #[must_use]
    pub fn uses_blank(&self, index: usize) -> bool {
        self.uses_blank.get(index).copied().unwrap_or(false)
    }

    /// Number of blanks the move consumes.
    #[must_use]
    pub fn blanks_used(&self) -> usize {
        self.uses_blank.iter().filter(|b| **b).count()
    }
}

/// The tiles a player holds.
///
/// ## Example
///
/// ```
/// use rust_scrabble::core::Letter;
/// use rust_scrabble::moves::Rack;
///
/// let rack: Rack = "RETAIN?".parse().unwrap();
/// assert_eq!(rack.len(), 7);
/// assert_eq!(rack.blanks(), 1);
/// assert_eq!(rack.count(Letter::new('E').unwrap()), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    letters: FxHashMap<Letter, u32>,
    blanks: u32,
}

impl Rack {
    /// Create an empty rack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a letter tile.
    #[must_use]
    pub fn with_letter(mut self, letter: Letter) -> Self {
        *self.letters.entry(letter).or_insert(0) += 1;
        self
    }

    /// Add blank tiles.
    #[must_use]
    pub fn with_blanks(mut self, count: u32) -> Self {
        self.blanks += count;
        self
    }

    /// Number of tiles of `letter`.
    #[must_use]
    pub fn count(&self, letter: Letter) -> u32 {
        self.letters.get(&letter).copied().unwrap_or(0)
    }

    /// Number of blank tiles.
    #[must_use]
    pub fn blanks(&self) -> u32 {
        self.blanks
    }

    /// Total number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        (self.letters.values().sum::<u32>() + self.blanks) as usize
    }

    /// Check if the rack holds no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Work out which placements of `mv` the rack pays for with blanks.
    ///
    /// Returns the first tile that cannot be covered.
    pub fn allocate(&self, mv: &Move) -> Result<RackAllocation, RackTile> {
        let mut letters = self.letters.clone();
        let mut blanks = self.blanks;
        let mut uses_blank = SmallVec::with_capacity(mv.len());

        for placement in mv {
            if !placement.is_blank {
                if let Some(left) = letters.get_mut(&placement.letter).filter(|n| **n > 0) {
                    *left -= 1;
                    uses_blank.push(false);
                    continue;
                }
            }

            if blanks == 0 {
                return Err(if placement.is_blank {
                    RackTile::Blank
                } else {
                    RackTile::Letter(placement.letter)
                });
            }
            blanks -= 1;
            uses_blank.push(true);
        }

        Ok(RackAllocation { uses_blank })
    }
}

impl std::str::FromStr for Rack {
    type Err = ParseError;

    /// Parse a rack from letters, with `?` or `_` for blanks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().try_fold(Rack::new(), |rack, c| match c {
            '?' | '_' => Ok(rack.with_blanks(1)),
            _ => Letter::new(c)
                .map(|letter| rack.with_letter(letter))
                .ok_or(ParseError::InvalidRackTile(c)),
        })
    }
}

impl std::fmt::Display for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut letters: Vec<_> = self.letters.iter().collect();
        letters.sort();
        for (letter, count) in letters {
            for _ in 0..*count {
                write!(f, "{letter}")?;
            }
        }
        for _ in 0..self.blanks {
            write!(f, "?")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Axis, Coord};

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn across(letters: &str) -> Move {
        Move::along(Coord::new(7, 7), Axis::Horizontal, letters).unwrap()
    }

    #[test]
    fn test_parse_rack() {
        let rack: Rack = "aab_?".parse().unwrap();
        assert_eq!(rack.count(letter('A')), 2);
        assert_eq!(rack.count(letter('B')), 1);
        assert_eq!(rack.count(letter('C')), 0);
        assert_eq!(rack.blanks(), 2);
        assert_eq!(rack.len(), 5);
        assert_eq!(rack.to_string(), "AAB??");
    }

    #[test]
    fn test_parse_rack_rejects_digits() {
        let err = "AB3".parse::<Rack>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidRackTile('3')));
    }

    #[test]
    fn test_allocate_exact_letters() {
        let rack: Rack = "CAT".parse().unwrap();
        let alloc = rack.allocate(&across("CAT")).unwrap();
        assert_eq!(alloc.blanks_used(), 0);
    }

    #[test]
    fn test_allocate_prefers_exact_over_blank() {
        let rack: Rack = "CA?T".parse().unwrap();
        let alloc = rack.allocate(&across("CAT")).unwrap();
        assert_eq!(alloc.blanks_used(), 0);
    }

    #[test]
    fn test_allocate_falls_back_to_blank() {
        let rack: Rack = "CA?".parse().unwrap();
        let alloc = rack.allocate(&across("CAT")).unwrap();
        assert!(!alloc.uses_blank(0));
        assert!(!alloc.uses_blank(1));
        assert!(alloc.uses_blank(2));
        assert_eq!(alloc.blanks_used(), 1);
    }

    #[test]
    fn test_allocate_repeated_letter_uses_blank_for_second() {
        let rack: Rack = "A?".parse().unwrap();
        let alloc = rack.allocate(&across("AA")).unwrap();
        assert!(!alloc.uses_blank(0));
        assert!(alloc.uses_blank(1));
    }

    #[test]
    fn test_allocate_missing_letter() {
        let rack: Rack = "CA".parse().unwrap();
        assert_eq!(
            rack.allocate(&across("CAT")),
            Err(RackTile::Letter(letter('T')))
        );
    }

    #[test]
    fn test_allocate_explicit_blank_requires_blank() {
        // Holding the real letter does not cover a declared blank.
        let rack: Rack = "CAT".parse().unwrap();
        assert_eq!(rack.allocate(&across("CaT")), Err(RackTile::Blank));

        let rack: Rack = "C?T".parse().unwrap();
        let alloc = rack.allocate(&across("CaT")).unwrap();
        assert!(alloc.uses_blank(1));
    }

    #[test]
    fn test_allocate_does_not_mutate_rack() {
        let rack: Rack = "CAT".parse().unwrap();
        let _ = rack.allocate(&across("CAT"));
        assert_eq!(rack.len(), 3);
    }

    #[test]
    fn test_rack_tile_display() {
        assert_eq!(RackTile::Letter(letter('x')).to_string(), "X");
        assert_eq!(RackTile::Blank.to_string(), "?");
    }
}
