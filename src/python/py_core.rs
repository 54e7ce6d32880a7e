//! Board, layout and rack bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::board::{BoardSnapshot, MultiplierLayout};
use crate::core::{Coord, ParseError};
use crate::moves::Rack;

pub(crate) fn parse_err(err: ParseError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Python wrapper for BoardSnapshot.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub BoardSnapshot);

#[pymethods]
impl PyBoard {
    /// Create an empty board of `size`×`size` cells.
    #[new]
    #[pyo3(signature = (size = 15))]
    fn new(size: usize) -> PyResult<Self> {
        if size == 0 {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "Board size must be at least 1",
            ));
        }
        Ok(Self(BoardSnapshot::empty(size)))
    }

    /// Parse a board from text rows ('.' empty, uppercase tile, lowercase blank).
    #[staticmethod]
    fn from_rows(rows: Vec<String>) -> PyResult<Self> {
        BoardSnapshot::from_rows(&rows).map(Self).map_err(parse_err)
    }

    /// Decode a board produced by `to_bytes`.
    #[staticmethod]
    fn from_bytes(data: Vec<u8>) -> PyResult<Self> {
        BoardSnapshot::from_bytes(&data).map(Self).map_err(parse_err)
    }

    /// Encode the board in a compact binary form.
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes()
    }

    #[getter]
    fn size(&self) -> usize {
        self.0.size()
    }

    /// Letter at a cell (lowercase for blanks), or None.
    fn get(&self, row: usize, col: usize) -> Option<String> {
        self.0.get(Coord::new(row, col)).map(|tile| tile.to_string())
    }

    /// Check if no tile has been played yet.
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Board as a [size, size] uint32 array of letter code points (0 = empty).
    fn to_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u32>>> {
        let size = self.0.size();
        let codes: Vec<u32> = (0..size * size)
            .map(|i| {
                self.0
                    .get(Coord::new(i / size, i % size))
                    .map_or(0, |tile| u32::from(tile.letter.as_char()))
            })
            .collect();

        PyArray1::from_vec_bound(py, codes)
            .reshape([size, size])
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Board(size={}, tiles={})",
            self.0.size(),
            self.0.occupied_count()
        )
    }
}

/// Python wrapper for MultiplierLayout.
#[pyclass(name = "MultiplierLayout")]
#[derive(Clone, Debug)]
pub struct PyMultiplierLayout(pub MultiplierLayout);

#[pymethods]
impl PyMultiplierLayout {
    /// The classic 15×15 layout.
    #[staticmethod]
    fn standard() -> Self {
        Self(MultiplierLayout::standard())
    }

    /// A layout with no premium squares.
    #[staticmethod]
    fn empty(size: usize) -> PyResult<Self> {
        if size == 0 {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "Board size must be at least 1",
            ));
        }
        Ok(Self(MultiplierLayout::empty(size)))
    }

    /// Parse a layout ('.' none, 'd' DL, 't' TL, 'D' DW, 'T' TW).
    #[staticmethod]
    fn from_rows(rows: Vec<String>) -> PyResult<Self> {
        MultiplierLayout::from_rows(&rows).map(Self).map_err(parse_err)
    }

    #[getter]
    fn size(&self) -> usize {
        self.0.size()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("MultiplierLayout(size={})", self.0.size())
    }
}

/// Python wrapper for Rack.
#[pyclass(name = "Rack")]
#[derive(Clone, Debug)]
pub struct PyRack(pub Rack);

#[pymethods]
impl PyRack {
    /// Create a rack from letters, with '?' for blanks.
    #[new]
    fn new(tiles: &str) -> PyResult<Self> {
        tiles.parse().map(Self).map_err(parse_err)
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("Rack('{}')", self.0)
    }
}
