//! # rust-scrabble
//!
//! Move validation and scoring engine for Scrabble-style word games.
//!
//! Given a board snapshot, a multiplier layout, a proposed placement, the
//! player's rack and a dictionary, the engine decides whether the move is
//! legal and, if so, which words it forms and what it scores.
//!
//! ## Design Principles
//!
//! 1. **Judge, never commit**: The engine works on a cloned snapshot and
//!    returns a `MoveResult`. Applying a move to the real game is the
//!    caller's job.
//!
//! 2. **Violations are data**: Illegal moves come back as
//!    `MoveResult::Invalid` with a reason. Panics are reserved for
//!    programming errors (zero-size boards, mismatched layouts).
//!
//! 3. **Configuration Over Convention**: Letter values, rack capacity and
//!    bingo bonus come from `EngineConfig`; board size comes from the
//!    snapshot.
//!
//! ## Architecture
//!
//! - **Persistent Snapshots**: O(1) board cloning via `im-rs`, so a move
//!   search can evaluate many candidates against one board cheaply.
//!
//! - **Stateless Evaluation**: `MoveEvaluator::evaluate` is pure and
//!   `Send + Sync`; evaluate from as many threads as you like.
//!
//! ## Modules
//!
//! - `core`: Coordinates, letters, tiles, configuration, parse errors
//! - `board`: Board snapshots and multiplier layouts
//! - `moves`: Placements, moves, racks
//! - `dictionary`: Word lookup trait and in-memory word list
//! - `rules`: Validator, extractor, scorer, evaluator
//!
//! ## Example
//!
//! ```
//! use rust_scrabble::{
//!     Axis, BoardSnapshot, Coord, EngineConfig, Move, MoveEvaluator,
//!     MultiplierLayout, Rack, WordList,
//! };
//!
//! let evaluator = MoveEvaluator::new(EngineConfig::default());
//! let layout = MultiplierLayout::standard();
//! let words = WordList::from_words(["CAT", "CATS", "AT"]);
//!
//! let board = BoardSnapshot::empty(15);
//! let rack: Rack = "CATS???".parse().unwrap();
//!
//! let mv = Move::along(Coord::new(7, 7), Axis::Horizontal, "CAT").unwrap();
//! let result = evaluator.evaluate(&board, &mv, &rack, &words, &layout);
//!
//! assert!(result.is_valid());
//! assert_eq!(result.total_points(), Some(10));
//! assert_eq!(result.words()[0].text, "CAT");
//! ```

pub mod board;
pub mod core;
pub mod dictionary;
pub mod moves;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Axis, Coord, EngineConfig, Letter, LetterValues, ParseError, Tile};

pub use crate::board::{BoardSnapshot, Multiplier, MultiplierLayout};

pub use crate::moves::{Move, Placement, Rack, RackAllocation, RackTile};

pub use crate::dictionary::{Dictionary, WordList};

pub use crate::rules::{
    FormedWord, InvalidReason, MoveEvaluator, MoveResult, PlacementValidator, Score, Scorer,
    ValidationError, WordExtractor, WordResult,
};
