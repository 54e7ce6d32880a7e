//! Premium-square multipliers.
//!
//! A `MultiplierLayout` is static per board template and shared read-only
//! by every evaluation. Multipliers only ever apply to the move that first
//! covers their cell; the scorer enforces that, not the layout.
//!
//! ## Text form
//!
//! | char | multiplier     |
//! |------|----------------|
//! | `.`  | none           |
//! | `d`  | double letter  |
//! | `t`  | triple letter  |
//! | `D`  | double word    |
//! | `T`  | triple word    |

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::grid::parse_square_rows;
use crate::core::{Coord, ParseError};

/// Classic 15×15 premium layout. The centre star is a double word.
const STANDARD_ROWS: [&str; 15] = [
    "T..d...T...d..T",
    ".D...t...t...D.",
    "..D...d.d...D..",
    "d..D...d...D..d",
    "....D.....D....",
    ".t...t...t...t.",
    "..d...d.d...d..",
    "T..d...D...d..T",
    "..d...d.d...d..",
    ".t...t...t...t.",
    "....D.....D....",
    "d..D...d...D..d",
    "..D...d.d...D..",
    ".D...t...t...D.",
    "T..d...T...d..T",
];

/// Scoring modifier attached to a board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Multiplier {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Multiplier {
    /// Factor applied to the letter on this cell.
    #[must_use]
    pub const fn letter_factor(self) -> u32 {
        match self {
            Multiplier::DoubleLetter => 2,
            Multiplier::TripleLetter => 3,
            _ => 1,
        }
    }

    /// Factor applied to every word running through this cell.
    #[must_use]
    pub const fn word_factor(self) -> u32 {
        match self {
            Multiplier::DoubleWord => 2,
            Multiplier::TripleWord => 3,
            _ => 1,
        }
    }

    fn from_char(c: char) -> Result<Self, ()> {
        match c {
            '.' => Ok(Multiplier::None),
            'd' => Ok(Multiplier::DoubleLetter),
            't' => Ok(Multiplier::TripleLetter),
            'D' => Ok(Multiplier::DoubleWord),
            'T' => Ok(Multiplier::TripleWord),
            _ => Err(()),
        }
    }

    fn as_char(self) -> char {
        match self {
            Multiplier::None => '.',
            Multiplier::DoubleLetter => 'd',
            Multiplier::TripleLetter => 't',
            Multiplier::DoubleWord => 'D',
            Multiplier::TripleWord => 'T',
        }
    }
}

/// Mapping from board cells to multipliers.
///
/// Cells not in the map carry `Multiplier::None`.
///
/// ## Example
///
/// ```
/// use rust_scrabble::board::{Multiplier, MultiplierLayout};
/// use rust_scrabble::core::Coord;
///
/// let layout = MultiplierLayout::standard();
/// assert_eq!(layout.size(), 15);
/// assert_eq!(layout.get(Coord::new(7, 7)), Multiplier::DoubleWord);
/// assert_eq!(layout.get(Coord::new(0, 0)), Multiplier::TripleWord);
/// assert_eq!(layout.get(Coord::new(7, 8)), Multiplier::None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierLayout {
    size: usize,
    cells: FxHashMap<Coord, Multiplier>,
}

impl MultiplierLayout {
    /// A layout of `size`×`size` cells with no multipliers.
    ///
    /// Panics if `size` is 0.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "Board size must be at least 1");
        Self {
            size,
            cells: FxHashMap::default(),
        }
    }

    /// The classic 15×15 layout.
    #[must_use]
    pub fn standard() -> Self {
        // STANDARD_ROWS only contains valid multiplier characters.
        match Self::from_rows(&STANDARD_ROWS) {
            Ok(layout) => layout,
            Err(err) => unreachable!("standard layout is malformed: {err}"),
        }
    }

    /// Parse a layout from text rows (see module docs for the characters).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ParseError> {
        let (size, cells) = parse_square_rows(rows, |c| {
            Multiplier::from_char(c).map(|m| (m != Multiplier::None).then_some(m))
        })?;
        Ok(Self {
            size,
            cells: cells.into_iter().collect(),
        })
    }

    /// Set the multiplier of a cell.
    ///
    /// Panics if `coord` is outside the layout.
    #[must_use]
    pub fn with(mut self, coord: Coord, multiplier: Multiplier) -> Self {
        assert!(coord.in_bounds(self.size), "Coordinate {coord} outside layout");
        if multiplier == Multiplier::None {
            self.cells.remove(&coord);
        } else {
            self.cells.insert(coord, multiplier);
        }
        self
    }

    /// Side length of the layout.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplier at a cell. Out-of-bounds cells have none.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Multiplier {
        self.cells.get(&coord).copied().unwrap_or_default()
    }

    /// Iterate over cells that carry a multiplier.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Multiplier)> + '_ {
        self.cells.iter().map(|(coord, m)| (*coord, *m))
    }
}

impl std::fmt::Display for MultiplierLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|col| self.get(Coord::new(row, col)).as_char())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
