//! Immutable board snapshots.
//!
//! `BoardSnapshot` is a read-only view of an N×N grid of optional tiles.
//! It is backed by `im::Vector`, so cloning is O(1) and
//! `with_tiles` shares structure with the snapshot it was derived from.
//! The engine uses this to build the hypothetical "move applied" board
//! without touching the caller's snapshot.
//!
//! ## Text form
//!
//! One string per row: `.` for an empty cell, an uppercase letter for a
//! regular tile, a lowercase letter for a blank tile.
//!
//! ```
//! use rust_scrabble::board::BoardSnapshot;
//! use rust_scrabble::core::{Coord, Letter, Tile};
//!
//! let board = BoardSnapshot::from_rows(&["...", "CaT", "..."]).unwrap();
//! assert_eq!(board.size(), 3);
//!
//! let a = board.get(Coord::new(1, 1)).unwrap();
//! assert!(a.blank);
//! assert_eq!(a.letter, Letter::new('A').unwrap());
//!
//! // Applying tiles returns a new snapshot; the original is unchanged.
//! let s = Tile::new(Letter::new('S').unwrap());
//! let next = board.with_tiles([(Coord::new(2, 2), s)]);
//! assert!(board.get(Coord::new(2, 2)).is_none());
//! assert_eq!(next.get(Coord::new(2, 2)), Some(s));
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::grid::parse_square_rows;
use crate::core::{Coord, ParseError, Tile};

/// Read-only square grid of optional tiles.
///
/// Deserialization rejects data whose cell count does not match its size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct BoardSnapshot {
    size: usize,
    /// Row-major cells, `size * size` entries.
    cells: Vector<Option<Tile>>,
}

/// Unchecked wire form of `BoardSnapshot`.
#[derive(Deserialize)]
struct RawSnapshot {
    size: usize,
    cells: Vector<Option<Tile>>,
}

impl TryFrom<RawSnapshot> for BoardSnapshot {
    type Error = ParseError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        let expected = raw.size.checked_mul(raw.size);
        if raw.size == 0 || expected != Some(raw.cells.len()) {
            return Err(ParseError::SnapshotShape {
                size: raw.size,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl BoardSnapshot {
    /// An empty board of `size`×`size` cells.
    ///
    /// Panics if `size` is 0.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "Board size must be at least 1");
        Self {
            size,
            cells: std::iter::repeat(None).take(size * size).collect(),
        }
    }

    /// Parse a board from text rows (see module docs).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ParseError> {
        let (size, tiles) = parse_square_rows(rows, |c| match c {
            '.' => Ok(None),
            _ => Tile::from_char(c).map(Some).ok_or(()),
        })?;
        Ok(Self::empty(size).with_tiles(tiles))
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Encode this snapshot in a compact binary form.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        // Serializing plain data into a Vec cannot fail.
        bincode::serialize(self).unwrap_or_default()
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a coordinate is on the board.
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.in_bounds(self.size)
    }

    /// Tile at a cell. `None` for empty or out-of-bounds cells.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Tile> {
        if !self.in_bounds(coord) {
            return None;
        }
        self.cells.get(self.index(coord)).copied().flatten()
    }

    /// Check if a cell holds a tile.
    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Check if no cell holds a tile (the first move of a game).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|tile| (Coord::new(i / self.size, i % self.size), tile))
        })
    }

    /// Return a new snapshot with `tiles` placed on it.
    ///
    /// This snapshot is left unchanged. Existing tiles at the same cells are
    /// overwritten; callers validate placements first.
    ///
    /// Panics if a coordinate is out of bounds.
    #[must_use]
    pub fn with_tiles(&self, tiles: impl IntoIterator<Item = (Coord, Tile)>) -> Self {
        let mut next = self.clone();
        for (coord, tile) in tiles {
            assert!(self.in_bounds(coord), "Coordinate {coord} outside board");
            let index = self.index(coord);
            next.cells.set(index, Some(tile));
        }
        next
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }
}

impl std::fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                match self.get(Coord::new(row, col)) {
                    Some(tile) => write!(f, "{tile}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    fn tile(c: char) -> Tile {
        Tile::from_char(c).unwrap()
    }

    #[test]
    fn test_empty_board() {
        let board = BoardSnapshot::empty(15);
        assert_eq!(board.size(), 15);
        assert!(board.is_empty());
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_occupied(Coord::new(7, 7)));
    }

    #[test]
    #[should_panic(expected = "Board size must be at least 1")]
    fn test_zero_size_panics() {
        let _ = BoardSnapshot::empty(0);
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let board = BoardSnapshot::from_rows(&["AB", "CD"]).unwrap();
        assert_eq!(board.get(Coord::new(2, 0)), None);
        assert_eq!(board.get(Coord::new(0, 2)), None);
        assert_eq!(board.get(Coord::new(1, 1)), Some(tile('D')));
    }

    #[test]
    fn test_with_tiles_leaves_original() {
        let board = BoardSnapshot::empty(5);
        let next = board.with_tiles([(Coord::new(2, 2), tile('X'))]);

        assert!(board.is_empty());
        assert_eq!(next.occupied_count(), 1);
        assert_eq!(next.get(Coord::new(2, 2)), Some(tile('X')));
    }

    #[test]
    #[should_panic(expected = "outside board")]
    fn test_with_tiles_out_of_bounds_panics() {
        let _ = BoardSnapshot::empty(3).with_tiles([(Coord::new(3, 0), tile('A'))]);
    }

    #[test]
    fn test_occupied_iteration_order() {
        let board = BoardSnapshot::from_rows(&[".b.", "...", "C.a"]).unwrap();
        let cells: Vec<_> = board.occupied().collect();
        assert_eq!(
            cells,
            vec![
                (Coord::new(0, 1), Tile::blank(Letter::new('B').unwrap())),
                (Coord::new(2, 0), tile('C')),
                (Coord::new(2, 2), tile('a')),
            ]
        );
    }

    #[test]
    fn test_display_round_trips_rows() {
        let rows = ["..Q", "zA.", "..."];
        let board = BoardSnapshot::from_rows(&rows).unwrap();
        assert_eq!(board.to_string(), "..Q\nzA.\n...\n");
    }

    #[test]
    fn test_from_rows_rejects_digits() {
        let err = BoardSnapshot::from_rows(&["1.", ".."]).unwrap_err();
        assert!(matches!(err, ParseError::InvalidCell { row: 0, col: 0, ch: '1' }));
    }

    #[test]
    fn test_bytes_preserve_board() {
        let board = BoardSnapshot::from_rows(&["CAT", "..o", "..."]).unwrap();
        let decoded = BoardSnapshot::from_bytes(&board.to_bytes()).unwrap();
        assert_eq!(decoded, board);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            BoardSnapshot::from_bytes(&[1, 2, 3]),
            Err(ParseError::Snapshot(_))
        ));
    }

    #[test]
    fn test_deserialize_rejects_wrong_cell_count() {
        let short = serde_json::from_str::<BoardSnapshot>(r#"{"size":15,"cells":[]}"#);
        assert!(short.is_err());

        let zero = serde_json::from_str::<BoardSnapshot>(r#"{"size":0,"cells":[]}"#);
        assert!(zero.is_err());
    }

    #[test]
    fn test_from_bytes_rejects_wrong_cell_count() {
        let raw = bincode::serialize(&(3usize, vec![None::<Tile>; 4])).unwrap();
        assert!(matches!(
            BoardSnapshot::from_bytes(&raw),
            Err(ParseError::Snapshot(_))
        ));
    }

    #[test]
    fn test_json_serialization() {
        let board = BoardSnapshot::from_rows(&["A.", ".b"]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
