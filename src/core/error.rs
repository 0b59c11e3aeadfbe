//! Validation errors raised while building hints

use std::fmt;

/// Error type for invalid hint input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The guessed word does not have exactly 5 letters
    InvalidLength(usize),
    /// The word and the feedback sequence differ in length
    LengthMismatch { letters: usize, hints: usize },
    /// A pattern contained a character that names no feedback kind
    InvalidFeedback(char),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be 5 letters long, got {len}")
            }
            Self::LengthMismatch { letters, hints } => write!(
                f,
                "word and hints must have the same length ({letters} letters, {hints} hints)"
            ),
            Self::InvalidFeedback(ch) => write!(f, "invalid feedback character '{ch}'"),
        }
    }
}

impl std::error::Error for ValidationError {}
