//! Feedback for a single guessed word
//!
//! A `HintRecord` pairs each letter of a 5-letter guess with its feedback and
//! renders the result as two lines: the uppercased letters, then the squares.
//!
//! ```text
//! A P P L E
//! 🟩 ⬜ ⬜ 🟨 🟩
//! ```

use super::{FeedbackKind, ValidationError};
use std::fmt;

/// Number of letters in a guess
pub const WORD_LENGTH: usize = 5;

/// One letter of a guess together with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub letter: char,
    pub feedback: FeedbackKind,
}

/// Validated, immutable feedback for one guess
///
/// Letters and feedback are stored together as tiles, so they stay aligned by position.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HintRecord {
    word: String,
    tiles: [Tile; WORD_LENGTH],
}

impl HintRecord {
    /// Create a hint from a guessed word and its per-letter feedback
    ///
    /// The word is kept exactly as given; case only changes when rendering.
    ///
    /// # Errors
    /// Returns `ValidationError` if:
    /// - The word is not exactly 5 letters (`InvalidLength`)
    /// - The number of hints differs from the number of letters (`LengthMismatch`)
    ///
    /// # Examples
    /// ```
    /// use wordle_hint::core::{FeedbackKind::*, HintRecord};
    ///
    /// let hint = HintRecord::new("apple", &[Correct, Absent, Absent, Present, Correct]).unwrap();
    /// assert_eq!(hint.letters_line(), "A P P L E");
    /// assert_eq!(hint.glyphs_line(), "🟩 ⬜ ⬜ 🟨 🟩");
    ///
    /// assert!(HintRecord::new("cat", &[Absent; 5]).is_err());
    /// ```
    pub fn new(word: impl Into<String>, hints: &[FeedbackKind]) -> Result<Self, ValidationError> {
        let word: String = word.into();
        let letters: Vec<char> = word.chars().collect();

        if letters.len() != WORD_LENGTH {
            tracing::debug!(word = %word, len = letters.len(), "rejected hint: bad word length");
            return Err(ValidationError::InvalidLength(letters.len()));
        }

        if hints.len() != letters.len() {
            tracing::debug!(
                word = %word,
                hints = hints.len(),
                "rejected hint: feedback length mismatch"
            );
            return Err(ValidationError::LengthMismatch {
                letters: letters.len(),
                hints: hints.len(),
            });
        }

        let tiles = std::array::from_fn(|i| Tile {
            letter: letters[i],
            feedback: hints[i],
        });

        tracing::debug!(word = %word, "built hint");
        Ok(Self { word, tiles })
    }

    /// Create a hint from a word and a pattern string such as "G--YG"
    ///
    /// See [`FeedbackKind::parse_pattern`] for the accepted characters.
    ///
    /// # Errors
    /// Returns `ValidationError` if the pattern has an unknown character or
    /// either input has the wrong length.
    ///
    /// # Examples
    /// ```
    /// use wordle_hint::core::HintRecord;
    ///
    /// let hint = HintRecord::from_pattern("crane", "-Y--G").unwrap();
    /// assert_eq!(hint.to_emoji(), "⬜🟨⬜⬜🟩");
    /// ```
    pub fn from_pattern(word: impl Into<String>, pattern: &str) -> Result<Self, ValidationError> {
        let hints = FeedbackKind::parse_pattern(pattern)?;
        Self::new(word, &hints)
    }

    /// The guessed word as given
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Letter/feedback tiles in guess order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.tiles
    }

    /// `(letter, feedback)` pairs in guess order
    pub fn pairs(&self) -> impl Iterator<Item = (char, FeedbackKind)> + '_ {
        self.tiles.iter().map(|tile| (tile.letter, tile.feedback))
    }

    /// Feedback values in guess order
    pub fn feedback(&self) -> impl Iterator<Item = FeedbackKind> + '_ {
        self.tiles.iter().map(|tile| tile.feedback)
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback().all(|kind| kind == FeedbackKind::Correct)
    }

    /// Count the tiles carrying a given feedback
    #[must_use]
    pub fn count(&self, kind: FeedbackKind) -> usize {
        self.feedback().filter(|&k| k == kind).count()
    }

    /// Uppercased letters separated by single spaces
    #[must_use]
    pub fn letters_line(&self) -> String {
        self.tiles
            .iter()
            .map(|tile| tile.letter.to_uppercase().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Feedback squares separated by single spaces
    #[must_use]
    pub fn glyphs_line(&self) -> String {
        self.tiles
            .iter()
            .map(|tile| tile.feedback.glyph().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Feedback squares with no separators, e.g. "🟩⬜⬜🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.feedback().map(FeedbackKind::glyph).collect()
    }

    /// Print the letters line and the squares line to stdout
    ///
    /// # Examples
    /// ```
    /// use wordle_hint::core::HintRecord;
    ///
    /// let hint = HintRecord::from_pattern("crane", "-----").unwrap();
    /// // C R A N E
    /// // ⬜ ⬜ ⬜ ⬜ ⬜
    /// hint.visualize();
    /// hint.visualize();
    /// ```
    pub fn visualize(&self) {
        println!("{self}");
    }
}

impl fmt::Display for HintRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.letters_line(), self.glyphs_line())
    }
}

impl fmt::Debug for HintRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HintRecord")
            .field("word", &self.word)
            .field("feedback", &self.feedback().collect::<Vec<_>>())
            .finish()
    }
}
