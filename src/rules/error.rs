//! Rule violations.
//!
//! A rejected move is normal gameplay, so these are returned as values and
//! carried inside `MoveResult::Invalid`, never raised as panics.

use serde::{Deserialize, Serialize};

use crate::moves::RackTile;

/// Why a move fails placement validation.
#[derive(
    Clone, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_more::Error,
)]
pub enum ValidationError {
    #[display("move places no tiles")]
    EmptyMove,

    #[display("({_0}, {_1}) is off the board")]
    OutOfBounds(usize, usize),

    #[display("({_0}, {_1}) is already occupied")]
    CellOccupied(usize, usize),

    #[display("tiles are not in a single row or column")]
    NotColinear,

    /// A declared blank with no blank left on the rack reports `RackTile::Blank`.
    #[display("rack has no tile for {_0}")]
    MissingTile(#[error(not(source))] RackTile),

    #[display("move does not touch any tile on the board")]
    NotConnected,
}

/// Why `MoveEvaluator::evaluate` rejected a move.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum InvalidReason {
    #[display("{_0}")]
    Validation(ValidationError),

    #[display("move forms no word")]
    #[from(ignore)]
    NoWordFormed,

    #[display("{_0} is not in the dictionary")]
    #[from(ignore)]
    InvalidWord(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ValidationError::OutOfBounds(15, 3).to_string(),
            "(15, 3) is off the board"
        );
        assert_eq!(
            ValidationError::MissingTile(RackTile::Letter(Letter::new('Q').unwrap())).to_string(),
            "rack has no tile for Q"
        );
        assert_eq!(
            InvalidReason::InvalidWord("XYZZY".into()).to_string(),
            "XYZZY is not in the dictionary"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let reason: InvalidReason = ValidationError::NotConnected.into();
        assert_eq!(reason, InvalidReason::Validation(ValidationError::NotConnected));
        assert_eq!(reason.to_string(), "move does not touch any tile on the board");
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let reason = InvalidReason::from(ValidationError::EmptyMove);
        assert!(reason.source().is_some());
        assert!(InvalidReason::NoWordFormed.source().is_none());
    }
}
