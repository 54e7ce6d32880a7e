//! Errors for parsing engine inputs from text and bytes.
//!
//! These cover malformed *input data* (board rows, racks, layouts,
//! word lists, binary snapshots). Rule violations during play are not
//! errors in this sense; see `rules::ValidationError`.

/// Failure to parse a board, layout, rack, word list or snapshot.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseError {
    #[display("'{_0}' is not a letter")]
    #[from(ignore)]
    InvalidLetter(#[error(not(source))] char),

    #[display("invalid cell '{ch}' at ({row}, {col})")]
    #[from(ignore)]
    InvalidCell { row: usize, col: usize, ch: char },

    #[display("row {row} has {found} cells, expected {expected}")]
    #[from(ignore)]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[display("grid has no rows")]
    #[from(ignore)]
    EmptyGrid,

    #[display("'{_0}' is not a valid rack tile")]
    #[from(ignore)]
    InvalidRackTile(#[error(not(source))] char),

    #[display("{cells} cells do not form a {size}x{size} board")]
    #[from(ignore)]
    SnapshotShape { size: usize, cells: usize },

    #[display("invalid board snapshot: {_0}")]
    Snapshot(bincode::Error),

    #[display("failed to read word list: {_0}")]
    Io(std::io::Error),
}
