//! Proposed moves and player racks.
//!
//! ## Key Types
//!
//! - `Placement`: One tile at one cell
//! - `Move`: The placements of one turn
//! - `Rack`: The tiles a player holds (letters and blanks)
//! - `RackAllocation`: Which placements a rack pays for with blanks

pub mod placement;
pub mod rack;

pub use placement::{Move, Placement};
pub use rack::{Rack, RackAllocation, RackTile};
