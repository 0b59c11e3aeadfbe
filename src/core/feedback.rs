//! Per-letter feedback classification
//!
//! Each letter of a guess is classified as one of:
//! - Correct (green): letter in the word and in the right position
//! - Present (yellow): letter in the word, wrong position
//! - Absent (gray): letter not in the word

use super::ValidationError;
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    Correct,
    Present,
    Absent,
}

impl FeedbackKind {
    /// Every feedback kind, in green-yellow-gray order
    pub const ALL: [Self; 3] = [Self::Correct, Self::Present, Self::Absent];

    /// The emoji square shown for this feedback
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character code used by the older hint encoding
    #[inline]
    #[must_use]
    pub const fn legacy_code(self) -> char {
        match self {
            Self::Correct => 'W',
            Self::Present => '*',
            Self::Absent => 'L',
        }
    }

    /// Decode a character of the older hint encoding
    ///
    /// # Examples
    /// ```
    /// use wordle_hint::core::FeedbackKind;
    ///
    /// assert_eq!(FeedbackKind::from_legacy_code('*'), Some(FeedbackKind::Present));
    /// assert_eq!(FeedbackKind::from_legacy_code('G'), None);
    /// ```
    #[must_use]
    pub const fn from_legacy_code(code: char) -> Option<Self> {
        match code {
            'W' => Some(Self::Correct),
            '*' => Some(Self::Present),
            'L' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Single-character code used by the grading server ('O', '~', 'X')
    #[inline]
    #[must_use]
    pub const fn server_code(self) -> char {
        match self {
            Self::Correct => 'O',
            Self::Present => '~',
            Self::Absent => 'X',
        }
    }

    /// Decode a character of the grading server's hint encoding
    ///
    /// # Examples
    /// ```
    /// use wordle_hint::core::FeedbackKind;
    ///
    /// assert_eq!(FeedbackKind::from_server_code('~'), Some(FeedbackKind::Present));
    /// assert_eq!(FeedbackKind::from_server_code('W'), None);
    /// ```
    #[must_use]
    pub const fn from_server_code(code: char) -> Option<Self> {
        match code {
            'O' => Some(Self::Correct),
            '~' => Some(Self::Present),
            'X' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Parse a pattern string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩/'W'/'O' for correct
    /// - 'Y'/'y'/🟨/'*'/'~' for present
    /// - '-'/'_'/⬜/'L'/'X' for absent
    ///
    /// The length is not checked here; [`HintRecord::new`](super::HintRecord::new) does that.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidFeedback` for the first unrecognized character.
    ///
    /// # Examples
    /// ```
    /// use wordle_hint::core::FeedbackKind;
    ///
    /// let p1 = FeedbackKind::parse_pattern("GY-GY").unwrap();
    /// let p2 = FeedbackKind::parse_pattern("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    pub fn parse_pattern(pattern: &str) -> Result<Vec<Self>, ValidationError> {
        pattern.chars().map(Self::try_from).collect()
    }
}

impl TryFrom<char> for FeedbackKind {
    type Error = ValidationError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'G' | 'g' | '🟩' => Ok(Self::Correct),
            'Y' | 'y' | '🟨' => Ok(Self::Present),
            '-' | '_' | '⬜' => Ok(Self::Absent),
            _ => Self::from_legacy_code(ch)
                .or_else(|| Self::from_server_code(ch))
                .ok_or(ValidationError::InvalidFeedback(ch)),
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_mapping_is_exact() {
        assert_eq!(FeedbackKind::Correct.glyph(), '🟩');
        assert_eq!(FeedbackKind::Present.glyph(), '🟨');
        assert_eq!(FeedbackKind::Absent.glyph(), '⬜');
    }

    #[test]
    fn glyphs_are_distinct() {
        let glyphs: std::collections::HashSet<char> =
            FeedbackKind::ALL.iter().map(|k| k.glyph()).collect();
        assert_eq!(glyphs.len(), FeedbackKind::ALL.len());
    }

    #[test]
    fn legacy_codes_decode_back() {
        for kind in FeedbackKind::ALL {
            assert_eq!(FeedbackKind::from_legacy_code(kind.legacy_code()), Some(kind));
        }
        assert_eq!(FeedbackKind::from_legacy_code('O'), None);
    }

    #[test]
    fn server_codes_decode_back() {
        for kind in FeedbackKind::ALL {
            assert_eq!(FeedbackKind::from_server_code(kind.server_code()), Some(kind));
            assert_eq!(FeedbackKind::try_from(kind.server_code()), Ok(kind));
        }
        assert_eq!(FeedbackKind::from_server_code('L'), None);
    }

    #[test]
    fn encodings_do_not_overlap() {
        for a in FeedbackKind::ALL {
            for b in FeedbackKind::ALL {
                assert_ne!(a.legacy_code(), b.server_code());
            }
        }
    }

    #[test]
    fn parse_pattern_aliases() {
        let expected = vec![
            FeedbackKind::Correct,
            FeedbackKind::Present,
            FeedbackKind::Absent,
            FeedbackKind::Absent,
            FeedbackKind::Correct,
        ];

        assert_eq!(FeedbackKind::parse_pattern("GY--G").unwrap(), expected);
        assert_eq!(FeedbackKind::parse_pattern("gy__g").unwrap(), expected);
        assert_eq!(FeedbackKind::parse_pattern("🟩🟨⬜⬜🟩").unwrap(), expected);
        assert_eq!(FeedbackKind::parse_pattern("W*LLW").unwrap(), expected);
        assert_eq!(FeedbackKind::parse_pattern("O~XXO").unwrap(), expected);
    }

    #[test]
    fn parse_pattern_rejects_unknown() {
        assert_eq!(
            FeedbackKind::parse_pattern("GYZGY"),
            Err(ValidationError::InvalidFeedback('Z'))
        );
        assert_eq!(
            FeedbackKind::parse_pattern("GY GY"),
            Err(ValidationError::InvalidFeedback(' '))
        );
    }

    #[test]
    fn parse_pattern_keeps_length() {
        // Length is validated by HintRecord, not here
        assert_eq!(FeedbackKind::parse_pattern("").unwrap(), vec![]);
        assert_eq!(FeedbackKind::parse_pattern("GGG").unwrap().len(), 3);
    }

    #[test]
    fn display_writes_glyph() {
        assert_eq!(FeedbackKind::Present.to_string(), "🟨");
    }
}
