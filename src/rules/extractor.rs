//! Word extraction.
//!
//! Given a board with a move already applied, finds the main word (along
//! the move's axis) and every cross word (perpendicular, through a single
//! placed tile). Single letters are not words and are never reported.

use smallvec::SmallVec;

use crate::board::BoardSnapshot;
use crate::core::{Axis, Coord};
use crate::moves::Move;

/// A word found on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormedWord {
    /// Letters in reading order, uppercase.
    pub text: String,
    /// Cells in reading order. SmallVec fits any word on a 15×15 board inline.
    pub coords: SmallVec<[Coord; 15]>,
}

impl FormedWord {
    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Check if the word has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// Finds the words a move forms.
pub struct WordExtractor;

impl WordExtractor {
    /// Extract every word of length ≥ 2 that `mv` touches on `board`.
    ///
    /// `board` must already contain the move's tiles. The main word is the
    /// run through the leftmost (or topmost) placed tile and comes first,
    /// then cross words in placement order; duplicates are dropped.
    /// A move that is empty or not on one line forms no words.
    #[must_use]
    pub fn extract(board: &BoardSnapshot, mv: &Move) -> Vec<FormedWord> {
        let Some(axis) = mv.axis() else {
            return Vec::new();
        };
        let Some(first) = mv.coords().min_by_key(|c| c.along(axis)) else {
            return Vec::new();
        };

        let mut words: Vec<FormedWord> = Vec::new();
        let mut push = |word: FormedWord| {
            if word.len() >= 2 && !words.iter().any(|w| w.coords == word.coords) {
                words.push(word);
            }
        };

        push(Self::run_through(board, first, axis));
        for placement in mv {
            push(Self::run_through(board, placement.coord, axis.perpendicular()));
        }

        words
    }

    /// The maximal run of occupied cells through `start` along `axis`.
    ///
    /// Empty if `start` itself is empty.
    #[must_use]
    pub fn run_through(board: &BoardSnapshot, start: Coord, axis: Axis) -> FormedWord {
        let mut coords = SmallVec::new();
        let mut text = String::new();
        if !board.is_occupied(start) {
            return FormedWord { text, coords };
        }

        let mut head = start;
        while let Some(prev) = head.prev(axis).filter(|c| board.is_occupied(*c)) {
            head = prev;
        }

        let mut cursor = Some(head);
        while let Some(cell) = cursor {
            let Some(tile) = board.get(cell) else { break };
            coords.push(cell);
            text.push(tile.letter.as_char());
            cursor = cell.next(axis, board.size());
        }

        FormedWord { text, coords }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Tile};
    use crate::moves::Placement;

    fn apply(board: &BoardSnapshot, mv: &Move) -> BoardSnapshot {
        board.with_tiles(mv.iter().map(|p| (p.coord, p.tile())))
    }

    fn texts(words: &[FormedWord]) -> Vec<&str> {
        words.iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn test_main_word_on_empty_board() {
        let board = BoardSnapshot::empty(15);
        let mv = Move::along(Coord::new(7, 7), Axis::Horizontal, "CAT").unwrap();
        let words = WordExtractor::extract(&apply(&board, &mv), &mv);

        assert_eq!(texts(&words), vec!["CAT"]);
        assert_eq!(
            words[0].coords.as_slice(),
            &[Coord::new(7, 7), Coord::new(7, 8), Coord::new(7, 9)]
        );
    }

    #[test]
    fn test_main_word_extends_through_existing_tiles() {
        let board = BoardSnapshot::from_rows(&[".....", ".....", ".AT..", ".....", "....."]).unwrap();
        let mv = Move::new([Placement::new(2, 0, Letter::new('C').unwrap())]);
        let words = WordExtractor::extract(&apply(&board, &mv), &mv);
        assert_eq!(texts(&words), vec!["CAT"]);
    }

    #[test]
    fn test_single_tile_forms_vertical_word() {
        let board = BoardSnapshot::from_rows(&[".....", "..A..", ".....", ".....", "....."]).unwrap();
        let mv = Move::along(Coord::new(2, 2), Axis::Horizontal, "X").unwrap();
        let words = WordExtractor::extract(&apply(&board, &mv), &mv);

        // Horizontal run is a single letter; the vertical run is the word.
        assert_eq!(texts(&words), vec!["AX"]);
    }

    #[test]
    fn test_cross_words() {
        // AT played under HO: main word AT, cross words HA and OT
        let board = BoardSnapshot::from_rows(&[".....", ".HO..", ".....", ".....", "....."]).unwrap();
        let mv = Move::along(Coord::new(2, 1), Axis::Horizontal, "AT").unwrap();
        let words = WordExtractor::extract(&apply(&board, &mv), &mv);
        assert_eq!(texts(&words), vec!["AT", "HA", "OT"]);
    }

    #[test]
    fn test_vertical_move_cross_words() {
        let board = BoardSnapshot::from_rows(&[".....", "B....", ".....", ".....", "....."]).unwrap();
        let mv = Move::along(Coord::new(0, 1), Axis::Vertical, "AE").unwrap();
        let words = WordExtractor::extract(&apply(&board, &mv), &mv);
        assert_eq!(texts(&words), vec!["AE", "BE"]);
    }

    #[test]
    fn test_gapped_move_main_word_from_leftmost_tile() {
        // Tiles listed right to left, with a gap before X: only CAT joins up.
        let board = BoardSnapshot::empty(15);
        let mv = Move::new([
            Placement::new(7, 12, Letter::new('X').unwrap()),
            Placement::new(7, 9, Letter::new('T').unwrap()),
            Placement::new(7, 8, Letter::new('A').unwrap()),
            Placement::new(7, 7, Letter::new('C').unwrap()),
        ]);
        let words = WordExtractor::extract(&apply(&board, &mv), &mv);

        assert_eq!(texts(&words), vec!["CAT"]);
        assert_eq!(words[0].coords[0], Coord::new(7, 7));
    }

    #[test]
    fn test_blank_letters_read_as_their_letter() {
        let board = BoardSnapshot::empty(5);
        let mv = Move::along(Coord::new(0, 0), Axis::Horizontal, "zA").unwrap();
        let applied = apply(&board, &mv);
        assert_eq!(applied.get(Coord::new(0, 0)), Some(Tile::blank(Letter::new('Z').unwrap())));

        let words = WordExtractor::extract(&applied, &mv);
        assert_eq!(texts(&words), vec!["ZA"]);
    }

    #[test]
    fn test_lone_tile_forms_nothing() {
        let board = BoardSnapshot::empty(5);
        let mv = Move::along(Coord::new(2, 2), Axis::Horizontal, "A").unwrap();
        assert!(WordExtractor::extract(&apply(&board, &mv), &mv).is_empty());
    }

    #[test]
    fn test_run_through_empty_start() {
        let board = BoardSnapshot::empty(5);
        assert!(WordExtractor::run_through(&board, Coord::new(0, 0), Axis::Horizontal).is_empty());
    }

    #[test]
    fn test_run_stops_at_board_edge() {
        let board = BoardSnapshot::from_rows(&["...", "...", "CAT"]).unwrap();
        let word = WordExtractor::run_through(&board, Coord::new(2, 1), Axis::Horizontal);
        assert_eq!(word.text, "CAT");
    }
}
