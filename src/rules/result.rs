//! Evaluation results.

use serde::{Deserialize, Serialize};

use super::error::InvalidReason;
use crate::core::Coord;

/// A word formed by a move, with its score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResult {
    /// The word, uppercase.
    pub text: String,
    /// Every cell of the word in reading order, old tiles included.
    pub coordinates: Vec<Coord>,
    /// Points this word scores, without the bingo bonus.
    pub points: u32,
}

/// Outcome of evaluating a move.
///
/// ## Example
///
/// ```
/// use rust_scrabble::rules::{InvalidReason, MoveResult};
///
/// let rejected = MoveResult::invalid(InvalidReason::NoWordFormed);
/// assert!(!rejected.is_valid());
/// assert_eq!(rejected.total_points(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move is legal.
    Valid {
        /// Sum of word scores plus any bingo bonus.
        total_points: u32,
        /// Main word first, then cross words in placement order.
        words: Vec<WordResult>,
        /// Whether the bingo bonus was added.
        bingo: bool,
    },
    /// The move is rejected.
    Invalid { reason: InvalidReason },
}

impl MoveResult {
    /// Wrap a rejection reason.
    #[must_use]
    pub fn invalid(reason: impl Into<InvalidReason>) -> Self {
        MoveResult::Invalid {
            reason: reason.into(),
        }
    }

    /// Check if the move is legal.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, MoveResult::Valid { .. })
    }

    /// Total score of a legal move.
    #[must_use]
    pub fn total_points(&self) -> Option<u32> {
        match self {
            MoveResult::Valid { total_points, .. } => Some(*total_points),
            MoveResult::Invalid { .. } => None,
        }
    }

    /// Words formed by a legal move (empty if rejected).
    #[must_use]
    pub fn words(&self) -> &[WordResult] {
        match self {
            MoveResult::Valid { words, .. } => words,
            MoveResult::Invalid { .. } => &[],
        }
    }

    /// Rejection reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&InvalidReason> {
        match self {
            MoveResult::Valid { .. } => None,
            MoveResult::Invalid { reason } => Some(reason),
        }
    }
}
