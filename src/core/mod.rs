//! Core engine types: coordinates, letters, tiles, configuration, parse errors.
//!
//! Everything else in the crate is built from these. They carry no game
//! rules of their own.

pub mod config;
pub mod coord;
pub mod error;
pub mod letter;

pub use config::{EngineConfig, LetterValues};
pub use coord::{Axis, Coord};
pub use error::ParseError;
pub use letter::{Letter, Tile};
