//! Text-row grid parsing shared by boards and multiplier layouts.

use crate::core::{Coord, ParseError};

/// Parse square text rows into `(coord, cell)` pairs.
///
/// Every row must have exactly as many characters as there are rows.
/// `parse_cell` returns `Ok(None)` for an empty cell and `Err(())` for an
/// unrecognized character. Returns the grid size and the non-empty cells.
pub(crate) fn parse_square_rows<T, S: AsRef<str>>(
    rows: &[S],
    parse_cell: impl Fn(char) -> Result<Option<T>, ()>,
) -> Result<(usize, Vec<(Coord, T)>), ParseError> {
    let size = rows.len();
    if size == 0 {
        return Err(ParseError::EmptyGrid);
    }

    let mut cells = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        let found = line.chars().count();
        if found != size {
            return Err(ParseError::RowLength {
                row,
                expected: size,
                found,
            });
        }

        for (col, ch) in line.chars().enumerate() {
            match parse_cell(ch) {
                Ok(Some(cell)) => cells.push((Coord::new(row, col), cell)),
                Ok(None) => {}
                Err(()) => return Err(ParseError::InvalidCell { row, col, ch }),
            }
        }
    }

    Ok((size, cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(c: char) -> Result<Option<u32>, ()> {
        match c {
            '.' => Ok(None),
            _ => c.to_digit(10).map(Some).ok_or(()),
        }
    }

    #[test]
    fn test_parse_square_rows() {
        let (size, cells) = parse_square_rows(&["1.", ".2"], digit).unwrap();
        assert_eq!(size, 2);
        assert_eq!(cells, vec![(Coord::new(0, 0), 1), (Coord::new(1, 1), 2)]);
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = parse_square_rows(&["1..", ".2"], digit).unwrap_err();
        assert!(matches!(
            err,
            ParseError::RowLength { row: 0, expected: 2, found: 3 }
        ));
    }

    #[test]
    fn test_rejects_unknown_cell() {
        let err = parse_square_rows(&["1x", ".."], digit).unwrap_err();
        assert!(matches!(err, ParseError::InvalidCell { row: 0, col: 1, ch: 'x' }));
    }

    #[test]
    fn test_rejects_empty_grid() {
        let rows: [&str; 0] = [];
        assert!(matches!(
            parse_square_rows(&rows, digit),
            Err(ParseError::EmptyGrid)
        ));
    }
}
