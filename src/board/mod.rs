//! Board state: tile snapshots and premium-square layouts.
//!
//! ## Key Types
//!
//! - `BoardSnapshot`: Immutable N×N grid of optional tiles (O(1) clone)
//! - `MultiplierLayout`: Static cell → multiplier mapping
//! - `Multiplier`: Double/Triple Letter/Word
//!
//! Both are owned by the enclosing game and only read by the engine.

mod grid;
pub mod multiplier;
pub mod snapshot;

pub use multiplier::{Multiplier, MultiplierLayout};
pub use snapshot::BoardSnapshot;
