//! Board coordinates and scan axes.
//!
//! Coordinates are `(row, col)`, 0-based, with row 0 at the top.
//! An `Axis` says which direction a word runs:
//! - `Horizontal`: along a row (columns increase)
//! - `Vertical`: along a column (rows increase)

use serde::{Deserialize, Serialize};

/// A cell position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if this coordinate lies on a board of the given size.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Step one cell backwards along `axis` (left or up).
    ///
    /// Returns `None` at the board edge.
    #[must_use]
    pub fn prev(self, axis: Axis) -> Option<Self> {
        match axis {
            Axis::Horizontal => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
            Axis::Vertical => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
        }
    }

    /// Step one cell forwards along `axis` (right or down).
    ///
    /// Returns `None` past the edge of a board of `size` cells.
    #[must_use]
    pub fn next(self, axis: Axis, size: usize) -> Option<Self> {
        let next = match axis {
            Axis::Horizontal => Self::new(self.row, self.col + 1),
            Axis::Vertical => Self::new(self.row + 1, self.col),
        };
        next.in_bounds(size).then_some(next)
    }

    /// Position of this coordinate along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.col,
            Axis::Vertical => self.row,
        }
    }

    /// Orthogonal neighbours (up, down, left, right) on a board of `size` cells.
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Coord> {
        [
            self.prev(Axis::Vertical),
            self.next(Axis::Vertical, size),
            self.prev(Axis::Horizontal),
            self.next(Axis::Horizontal, size),
        ]
        .into_iter()
        .flatten()
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction a word runs on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}
