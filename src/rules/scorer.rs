//! Word and move scoring.
//!
//! ## Rules
//!
//! - Each letter scores its base value; blank tiles score 0.
//! - Premium squares only count for tiles placed by this move: letter
//!   multipliers scale that one letter, word multipliers scale the whole
//!   word (and stack multiplicatively).
//! - A move placing a full rack's worth of tiles earns the bingo bonus once.
//!
//! Arithmetic saturates at `u32::MAX`, so oversized custom letter values
//! cannot overflow.

use rustc_hash::FxHashSet;

use super::extractor::FormedWord;
use crate::board::{BoardSnapshot, MultiplierLayout};
use crate::core::{Coord, EngineConfig};

/// Scores for every word of a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Score {
    /// Points per word, aligned with the scored words.
    pub word_points: Vec<u32>,
    /// Whether the bingo bonus applies.
    pub bingo: bool,
    /// Sum of word points plus the bingo bonus.
    pub total: u32,
}

/// Computes points using the letter values and bonus from an `EngineConfig`.
pub struct Scorer<'a> {
    config: &'a EngineConfig,
}

impl<'a> Scorer<'a> {
    /// Create a scorer for a configuration.
    #[must_use]
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Score a single word.
    ///
    /// `board` must contain the move's tiles; `newly_placed` holds the cells
    /// the move covered.
    #[must_use]
    pub fn score_word(
        &self,
        word: &FormedWord,
        board: &BoardSnapshot,
        multipliers: &MultiplierLayout,
        newly_placed: &FxHashSet<Coord>,
    ) -> u32 {
        let mut letter_sum: u32 = 0;
        let mut word_factor: u32 = 1;

        for &coord in &word.coords {
            let Some(tile) = board.get(coord) else { continue };
            let base = if tile.blank {
                0
            } else {
                self.config.letter_values.value(tile.letter)
            };

            if newly_placed.contains(&coord) {
                let premium = multipliers.get(coord);
                letter_sum = letter_sum.saturating_add(base.saturating_mul(premium.letter_factor()));
                word_factor = word_factor.saturating_mul(premium.word_factor());
            } else {
                letter_sum = letter_sum.saturating_add(base);
            }
        }

        letter_sum.saturating_mul(word_factor)
    }

    /// Score every word of a move placing `tiles_placed` tiles.
    #[must_use]
    pub fn score(
        &self,
        words: &[FormedWord],
        board: &BoardSnapshot,
        multipliers: &MultiplierLayout,
        newly_placed: &FxHashSet<Coord>,
        tiles_placed: usize,
    ) -> Score {
        let word_points: Vec<u32> = words
            .iter()
            .map(|w| self.score_word(w, board, multipliers, newly_placed))
            .collect();

        let bingo = self.config.is_bingo(tiles_placed);
        let bonus = if bingo { self.config.bingo_bonus } else { 0 };
        let total = word_points
            .iter()
            .fold(bonus, |total, points| total.saturating_add(*points));

        Score {
            word_points,
            bingo,
            total,
        }
    }
}
