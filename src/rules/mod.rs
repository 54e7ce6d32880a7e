//! Move rules: validation, word extraction, scoring, evaluation.
//!
//! Data flows one way:
//!
//! ```text
//! Move → PlacementValidator → WordExtractor → Dictionary → Scorer → MoveResult
//! ```
//!
//! `MoveEvaluator` runs the whole pipeline; the stages are public for
//! callers (such as move generators) that need them individually.

pub mod error;
pub mod evaluator;
pub mod extractor;
pub mod result;
pub mod scorer;
pub mod validator;

pub use error::{InvalidReason, ValidationError};
pub use evaluator::MoveEvaluator;
pub use extractor::{FormedWord, WordExtractor};
pub use result::{MoveResult, WordResult};
pub use scorer::{Score, Scorer};
pub use validator::PlacementValidator;
