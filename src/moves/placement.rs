//! Placements and moves.
//!
//! A `Move` is the ordered list of tiles a player proposes to add in one
//! turn. Construction never fails on rule grounds: emptiness, bounds,
//! duplicates and shape are all judged by `PlacementValidator`, so that
//! rejected moves are reported as data rather than constructor errors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Axis, Coord, Letter, ParseError, Tile};

/// One tile a player wants to put on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub coord: Coord,
    pub letter: Letter,
    /// Whether the player is playing a blank as `letter`.
    pub is_blank: bool,
}

impl Placement {
    /// A regular tile at `(row, col)`.
    #[must_use]
    pub const fn new(row: usize, col: usize, letter: Letter) -> Self {
        Self {
            coord: Coord::new(row, col),
            letter,
            is_blank: false,
        }
    }

    /// A blank tile at `(row, col)` standing in for `letter`.
    #[must_use]
    pub const fn blank(row: usize, col: usize, letter: Letter) -> Self {
        Self {
            coord: Coord::new(row, col),
            letter,
            is_blank: true,
        }
    }

    /// The tile this placement puts on the board.
    #[must_use]
    pub const fn tile(&self) -> Tile {
        Tile {
            letter: self.letter,
            blank: self.is_blank,
        }
    }
}

/// The placements of one turn, in the order the player gave them.
///
/// ## Example
///
/// ```
/// use rust_scrabble::core::{Axis, Coord};
/// use rust_scrabble::moves::Move;
///
/// // C-A-T across row 7, with the A played as a blank
/// let mv = Move::along(Coord::new(7, 7), Axis::Horizontal, "CaT").unwrap();
/// assert_eq!(mv.len(), 3);
/// assert!(mv.placements()[1].is_blank);
/// assert_eq!(mv.axis(), Some(Axis::Horizontal));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// SmallVec holds a full 7-tile rack without heap allocation.
    placements: SmallVec<[Placement; 7]>,
}

impl Move {
    /// Create a move from placements.
    #[must_use]
    pub fn new(placements: impl IntoIterator<Item = Placement>) -> Self {
        Self {
            placements: placements.into_iter().collect(),
        }
    }

    /// Lay out `letters` on consecutive cells from `start` along `axis`.
    ///
    /// Lowercase letters become blank placements. Coordinates are not
    /// bounds-checked here.
    pub fn along(start: Coord, axis: Axis, letters: &str) -> Result<Self, ParseError> {
        let mut mv = Self::default();
        for (offset, c) in letters.chars().enumerate() {
            let letter = Letter::try_from(c)?;
            let coord = match axis {
                Axis::Horizontal => Coord::new(start.row, start.col + offset),
                Axis::Vertical => Coord::new(start.row + offset, start.col),
            };
            mv.push(Placement {
                coord,
                letter,
                is_blank: c.is_lowercase(),
            });
        }
        Ok(mv)
    }

    /// Append a placement.
    pub fn push(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    /// Number of tiles placed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Check if the move places no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// The placements, in order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Iterate over the placements.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    /// Iterate over the target coordinates.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.placements.iter().map(|p| p.coord)
    }

    /// The line the move lies on.
    ///
    /// `Horizontal` if all placements share a row (including single-tile
    /// moves), `Vertical` if they share a column, `None` if neither or if
    /// the move is empty.
    #[must_use]
    pub fn axis(&self) -> Option<Axis> {
        let first = self.placements.first()?.coord;
        if self.coords().all(|c| c.row == first.row) {
            Some(Axis::Horizontal)
        } else if self.coords().all(|c| c.col == first.col) {
            Some(Axis::Vertical)
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a Move {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

impl FromIterator<Placement> for Move {
    fn from_iter<I: IntoIterator<Item = Placement>>(iter: I) -> Self {
        Self::new(iter)
    }
}
