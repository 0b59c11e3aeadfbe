//! Core domain types for Wordle hints
//!
//! Pure value types: the feedback classification, the validated hint record,
//! and the error raised when a hint cannot be built.

mod error;
mod feedback;
mod hint;

pub use error::ValidationError;
pub use feedback::FeedbackKind;
pub use hint::{HintRecord, Tile, WORD_LENGTH};
