//! Placement legality.
//!
//! `PlacementValidator` checks a move's geometry and rack sufficiency
//! against a board without looking at words or the dictionary.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. Move places at least one tile (`EmptyMove`)
//! 2. Every target is on the board (`OutOfBounds`)
//! 3. Every target is empty and targeted once (`CellOccupied`)
//! 4. Targets share one row or one column (`NotColinear`)
//! 5. The rack can pay for every tile (`MissingTile`)
//! 6. On a non-empty board, some target touches an existing tile (`NotConnected`)
//!
//! The first move of a game has no centre-square requirement.

use rustc_hash::FxHashSet;

use super::error::ValidationError;
use crate::board::BoardSnapshot;
use crate::moves::{Move, Rack, RackAllocation};

/// Validates moves against a board and a rack.
pub struct PlacementValidator;

impl PlacementValidator {
    /// Validate `mv` on `board` for a player holding `rack`.
    ///
    /// On success, returns how the rack pays for the move.
    pub fn validate(
        board: &BoardSnapshot,
        mv: &Move,
        rack: &Rack,
    ) -> Result<RackAllocation, ValidationError> {
        if mv.is_empty() {
            return Err(ValidationError::EmptyMove);
        }

        if let Some(c) = mv.coords().find(|c| !board.in_bounds(*c)) {
            return Err(ValidationError::OutOfBounds(c.row, c.col));
        }

        Self::check_targets_free(board, mv)?;

        if mv.axis().is_none() {
            return Err(ValidationError::NotColinear);
        }

        let allocation = rack.allocate(mv).map_err(ValidationError::MissingTile)?;

        if !board.is_empty() && !Self::touches_existing(board, mv) {
            return Err(ValidationError::NotConnected);
        }

        Ok(allocation)
    }

    /// Every target must be empty, and no cell may be targeted twice.
    fn check_targets_free(board: &BoardSnapshot, mv: &Move) -> Result<(), ValidationError> {
        let mut seen = FxHashSet::default();
        for c in mv.coords() {
            if board.is_occupied(c) || !seen.insert(c) {
                return Err(ValidationError::CellOccupied(c.row, c.col));
            }
        }
        Ok(())
    }

    fn touches_existing(board: &BoardSnapshot, mv: &Move) -> bool {
        mv.coords()
            .any(|c| c.neighbors(board.size()).any(|n| board.is_occupied(n)))
    }
}
