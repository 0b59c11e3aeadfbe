//! Hint rendering command
//!
//! Builds a hint from a word and a pattern string typed on the command line.

use crate::core::{HintRecord, ValidationError};

/// Input for rendering a single hint
pub struct RenderConfig {
    pub word: String,
    pub pattern: String,
}

impl RenderConfig {
    #[must_use]
    pub fn new(word: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            pattern: pattern.into(),
        }
    }
}

/// Build the hint described by `config`
///
/// Surrounding whitespace is ignored in both the word and the pattern.
///
/// # Errors
///
/// Returns an error if:
/// - The pattern contains a character that names no feedback
/// - The word is not 5 letters, or the pattern length differs from it
pub fn render_hint(config: &RenderConfig) -> Result<HintRecord, ValidationError> {
    HintRecord::from_pattern(config.word.trim(), config.pattern.trim())
}
