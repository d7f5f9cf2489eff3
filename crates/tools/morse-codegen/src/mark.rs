//! Morse marks and their textual form.
//!
//! A character's Morse representation is authored as a string of `.` and `-`
//! (e.g. `".-"` for `A`). Parsing turns that string into a sequence of
//! [`Mark`]s and rejects anything else, so the encoder never sees an
//! unknown element.

use std::fmt;

use crate::error::CodegenError;

/// A single Morse element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Short element: one unit keyed.
    Dot,
    /// Long element: three units keyed.
    Dash,
}

impl Mark {
    /// Parses a single mark character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Dot),
            '-' => Some(Self::Dash),
            _ => None,
        }
    }

    /// Returns the authoring character for this mark.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Dot => '.',
            Self::Dash => '-',
        }
    }

    /// Number of keyed units.
    #[must_use]
    pub const fn units(self) -> u32 {
        match self {
            Self::Dot => 1,
            Self::Dash => 3,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parses the mark string for `symbol`.
///
/// Fails with [`CodegenError::EmptySequence`] for an empty string and
/// [`CodegenError::InvalidMark`] on the first character that is not `.`/`-`.
pub fn parse_marks(symbol: char, text: &str) -> Result<Vec<Mark>, CodegenError> {
    if text.is_empty() {
        return Err(CodegenError::EmptySequence(symbol));
    }
    text.chars()
        .map(|mark| Mark::from_char(mark).ok_or(CodegenError::InvalidMark { symbol, mark }))
        .collect()
}

/// Formats marks back into their authoring string.
#[must_use]
pub fn format_marks(marks: &[Mark]) -> String {
    marks.iter().map(|m| m.as_char()).collect()
}
