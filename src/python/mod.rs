//! Python bindings for the rust-scrabble move engine.
//!
//! This module exposes move evaluation to Python move-search and training code.
//!
//! # Quick Start
//!
//! ```python
//! import rust_scrabble as rs
//!
//! board = rs.Board(15)
//! layout = rs.MultiplierLayout.standard()
//! words = rs.WordList(["cat", "cats"])
//! evaluator = rs.MoveEvaluator()
//!
//! result = evaluator.evaluate(
//!     board,
//!     [rs.Placement(7, 7, "C"), rs.Placement(7, 8, "A"), rs.Placement(7, 9, "T")],
//!     rs.Rack("CATS???"),
//!     words,
//!     layout,
//! )
//! assert result.total_points == 10
//!
//! # Board encoding for a policy network
//! planes = board.to_numpy()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// rust-scrabble: Scrabble-style move validation and scoring.
///
/// This module provides:
/// - Board snapshots, multiplier layouts and racks
/// - Word lists
/// - Move evaluation (legality, formed words, score)
#[pymodule]
fn rust_scrabble(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Board types
    m.add_class::<PyBoard>()?;
    m.add_class::<PyMultiplierLayout>()?;
    m.add_class::<PyRack>()?;

    // Engine types
    m.add_class::<PyPlacement>()?;
    m.add_class::<PyWordList>()?;
    m.add_class::<PyMoveEvaluator>()?;
    m.add_class::<PyMoveResult>()?;

    Ok(())
}
