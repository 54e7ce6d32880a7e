//! Dictionary and evaluator bindings for Python.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use pyo3::prelude::*;

use crate::core::{EngineConfig, Letter, LetterValues};
use crate::dictionary::{Dictionary, WordList};
use crate::moves::{Move, Placement};
use crate::rules::{MoveEvaluator, MoveResult};

use super::py_core::{parse_err, PyBoard, PyMultiplierLayout, PyRack};

/// Python wrapper for Placement.
#[pyclass(name = "Placement")]
#[derive(Clone, Copy, Debug)]
pub struct PyPlacement(pub Placement);

#[pymethods]
impl PyPlacement {
    /// Place `letter` at (row, col); `is_blank` plays it from a blank tile.
    #[new]
    #[pyo3(signature = (row, col, letter, is_blank = false))]
    fn new(row: usize, col: usize, letter: char, is_blank: bool) -> PyResult<Self> {
        let letter = Letter::try_from(letter).map_err(parse_err)?;
        Ok(Self(if is_blank {
            Placement::blank(row, col, letter)
        } else {
            Placement::new(row, col, letter)
        }))
    }

    #[getter]
    fn row(&self) -> usize {
        self.0.coord.row
    }

    #[getter]
    fn col(&self) -> usize {
        self.0.coord.col
    }

    #[getter]
    fn letter(&self) -> char {
        self.0.letter.as_char()
    }

    #[getter]
    fn is_blank(&self) -> bool {
        self.0.is_blank
    }

    fn __repr__(&self) -> String {
        format!(
            "Placement({}, {}, '{}', is_blank={})",
            self.0.coord.row,
            self.0.coord.col,
            self.0.letter,
            if self.0.is_blank { "True" } else { "False" }
        )
    }
}

/// Python wrapper for WordList.
///
/// Shared behind an `Arc` so evaluations on worker threads can hold it.
#[pyclass(name = "WordList")]
#[derive(Clone, Debug)]
pub struct PyWordList(pub Arc<WordList>);

#[pymethods]
impl PyWordList {
    /// Build a word list from words in any case.
    #[new]
    fn new(words: Vec<String>) -> Self {
        Self(Arc::new(WordList::from_words(words)))
    }

    /// Load a word list file with one word per line.
    #[staticmethod]
    fn from_file(path: &str) -> PyResult<Self> {
        let file = File::open(path)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string()))?;
        WordList::from_reader(BufReader::new(file))
            .map(|list| Self(Arc::new(list)))
            .map_err(parse_err)
    }

    fn __contains__(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("WordList({} words)", self.0.len())
    }
}

/// Python wrapper for MoveResult.
#[pyclass(name = "MoveResult")]
#[derive(Clone, Debug)]
pub struct PyMoveResult(pub MoveResult);

#[pymethods]
impl PyMoveResult {
    #[getter]
    fn is_valid(&self) -> bool {
        self.0.is_valid()
    }

    /// Total points, or None if the move was rejected.
    #[getter]
    fn total_points(&self) -> Option<u32> {
        self.0.total_points()
    }

    /// Words as (text, [(row, col), ...], points) tuples.
    #[getter]
    fn words(&self) -> Vec<(String, Vec<(usize, usize)>, u32)> {
        self.0
            .words()
            .iter()
            .map(|w| {
                let coords = w.coordinates.iter().map(|c| (c.row, c.col)).collect();
                (w.text.clone(), coords, w.points)
            })
            .collect()
    }

    #[getter]
    fn bingo(&self) -> bool {
        matches!(self.0, MoveResult::Valid { bingo: true, .. })
    }

    /// Rejection reason as text, or None if the move is valid.
    #[getter]
    fn reason(&self) -> Option<String> {
        self.0.reason().map(ToString::to_string)
    }

    fn __repr__(&self) -> String {
        match &self.0 {
            MoveResult::Valid { total_points, .. } => format!("MoveResult(valid, {total_points} points)"),
            MoveResult::Invalid { reason } => format!("MoveResult(invalid: {reason})"),
        }
    }
}

/// Python wrapper for MoveEvaluator.
#[pyclass(name = "MoveEvaluator")]
#[derive(Clone, Debug)]
pub struct PyMoveEvaluator(pub MoveEvaluator);

#[pymethods]
impl PyMoveEvaluator {
    /// Create an evaluator.
    ///
    /// # Arguments
    /// - rack_capacity: Tiles in a full rack (bingo threshold)
    /// - bingo_bonus: Points added for a bingo
    /// - letter_values: Letter → points; standard English values if omitted
    #[new]
    #[pyo3(signature = (rack_capacity = 7, bingo_bonus = 50, letter_values = None))]
    fn new(
        rack_capacity: usize,
        bingo_bonus: u32,
        letter_values: Option<HashMap<char, u32>>,
    ) -> PyResult<Self> {
        if rack_capacity == 0 {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "Rack capacity must be at least 1",
            ));
        }
        let values = letter_values.map_or_else(LetterValues::english, LetterValues::from_pairs);
        let config = EngineConfig::new(values)
            .with_rack_capacity(rack_capacity)
            .with_bingo_bonus(bingo_bonus);
        Ok(Self(MoveEvaluator::new(config)))
    }

    /// Evaluate a move.
    ///
    /// The GIL is released while the move is judged.
    fn evaluate(
        &self,
        py: Python<'_>,
        board: &PyBoard,
        placements: Vec<PyPlacement>,
        rack: &PyRack,
        dictionary: &PyWordList,
        layout: &PyMultiplierLayout,
    ) -> PyResult<PyMoveResult> {
        if board.0.size() != layout.0.size() {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Board size {} does not match layout size {}",
                board.0.size(),
                layout.0.size()
            )));
        }

        let mv: Move = placements.into_iter().map(|p| p.0).collect();

        let evaluator = &self.0;
        let words = Arc::clone(&dictionary.0);
        let result = py.allow_threads(|| {
            evaluator.evaluate(&board.0, &mv, &rack.0, words.as_ref(), &layout.0)
        });
        Ok(PyMoveResult(result))
    }

    #[getter]
    fn rack_capacity(&self) -> usize {
        self.0.config().rack_capacity
    }

    #[getter]
    fn bingo_bonus(&self) -> u32 {
        self.0.config().bingo_bonus
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveEvaluator(rack_capacity={}, bingo_bonus={})",
            self.0.config().rack_capacity,
            self.0.config().bingo_bonus
        )
    }
}
