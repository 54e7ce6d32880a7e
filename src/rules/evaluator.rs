//! Move evaluation: validate, apply, extract, look up, score.
//!
//! `MoveEvaluator::evaluate` is a pure function of its inputs. It never
//! mutates the board or rack it is given and performs no I/O, so one
//! evaluator can be shared across threads evaluating candidate moves in
//! parallel against the same board, layout and dictionary.

use rustc_hash::FxHashSet;
use tracing::{debug, instrument, trace};

use super::error::InvalidReason;
use super::extractor::WordExtractor;
use super::result::{MoveResult, WordResult};
use super::scorer::Scorer;
use super::validator::PlacementValidator;
use crate::board::{BoardSnapshot, MultiplierLayout};
use crate::core::{Coord, EngineConfig, Tile};
use crate::dictionary::{canonicalize, Dictionary};
use crate::moves::{Move, Rack, RackAllocation};

/// Judges moves under an `EngineConfig`.
///
/// ## Example
///
/// ```
/// use rust_scrabble::board::{BoardSnapshot, MultiplierLayout};
/// use rust_scrabble::core::{Axis, Coord, EngineConfig};
/// use rust_scrabble::dictionary::WordList;
/// use rust_scrabble::moves::{Move, Rack};
/// use rust_scrabble::rules::MoveEvaluator;
///
/// let evaluator = MoveEvaluator::new(EngineConfig::default());
/// let board = BoardSnapshot::empty(15);
/// let layout = MultiplierLayout::standard();
/// let words = WordList::from_words(["CAT"]);
/// let rack: Rack = "CATXYZQ".parse().unwrap();
///
/// let mv = Move::along(Coord::new(7, 7), Axis::Horizontal, "CAT").unwrap();
/// let result = evaluator.evaluate(&board, &mv, &rack, &words, &layout);
/// assert_eq!(result.total_points(), Some(10));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MoveEvaluator {
    config: EngineConfig,
}

impl MoveEvaluator {
    /// Create an evaluator.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The scoring configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate `mv` played from `rack` onto `board`.
    ///
    /// Panics if `board` and `multipliers` have different sizes.
    #[instrument(skip_all, fields(tiles = mv.len()))]
    pub fn evaluate<D: Dictionary + ?Sized>(
        &self,
        board: &BoardSnapshot,
        mv: &Move,
        rack: &Rack,
        dictionary: &D,
        multipliers: &MultiplierLayout,
    ) -> MoveResult {
        assert_eq!(
            board.size(),
            multipliers.size(),
            "Board and multiplier layout sizes differ"
        );

        let allocation = match PlacementValidator::validate(board, mv, rack) {
            Ok(allocation) => allocation,
            Err(err) => {
                debug!(%err, "move rejected by validator");
                return MoveResult::invalid(err);
            }
        };

        let applied = Self::apply(board, mv, &allocation);
        let words = WordExtractor::extract(&applied, mv);
        if words.is_empty() {
            debug!("move forms no word");
            return MoveResult::invalid(InvalidReason::NoWordFormed);
        }
        trace!(words = ?words.iter().map(|w| w.text.as_str()).collect::<Vec<_>>(), "extracted");

        for word in &words {
            let canonical = canonicalize(&word.text);
            if !dictionary.contains(&canonical) {
                debug!(word = %canonical, "word not in dictionary");
                return MoveResult::invalid(InvalidReason::InvalidWord(canonical));
            }
        }

        let newly_placed: FxHashSet<Coord> = mv.coords().collect();
        let score = Scorer::new(&self.config).score(
            &words,
            &applied,
            multipliers,
            &newly_placed,
            mv.len(),
        );

        let words: Vec<WordResult> = words
            .into_iter()
            .zip(score.word_points)
            .map(|(word, points)| {
                trace!(word = %word.text, points, "scored");
                WordResult {
                    text: word.text,
                    coordinates: word.coords.into_vec(),
                    points,
                }
            })
            .collect();

        debug!(total = score.total, bingo = score.bingo, "move accepted");
        MoveResult::Valid {
            total_points: score.total,
            words,
            bingo: score.bingo,
        }
    }

    /// Place the move's tiles on a copy of `board`.
    ///
    /// Placements the rack pays for with a blank become blank tiles.
    #[must_use]
    pub fn apply(board: &BoardSnapshot, mv: &Move, allocation: &RackAllocation) -> BoardSnapshot {
        board.with_tiles(mv.iter().enumerate().map(|(i, p)| {
            let tile = Tile {
                letter: p.letter,
                blank: p.is_blank || allocation.uses_blank(i),
            };
            (p.coord, tile)
        }))
    }
}
