//! Bit-packed Morse codes.
//!
//! Each code bit is one unit of time: `1` keyed, `0` silent. Bits are read
//! from the low end. A dot takes two bits (`01`: one unit keyed, one unit
//! gap) and a dash four (`0111`). Every code ends in the terminator `100`:
//! two more silent units, completing the letter space, followed by an end
//! marker bit that is never keyed.
//!
//! Encoding starts from the terminator and pushes marks in from the top,
//! last mark first, so the first mark lands in the lowest bits:
//!
//! ```text
//! A = .-    100 -> 100_0111 -> 100_0111_01 = 0x11D
//! ```

use std::fmt;

use crate::error::CodegenError;
use crate::mark::Mark;

/// Code of the empty mark sequence: the letter-space tail and end marker.
pub const TERMINATOR: u32 = 0b100;

/// A bit-packed Morse code as stored in the keyer's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Code(u32);

impl Code {
    /// Sentinel for characters without a Morse equivalent.
    pub const NONE: Self = Self(0);

    /// Word space: four extra silent units after the previous letter space.
    pub const WORD_SPACE: Self = Self(0x10);

    /// Wraps a raw table value.
    #[must_use]
    pub const fn from_raw(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw table value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` for the "no encoding" sentinel.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` for the word space.
    #[must_use]
    pub const fn is_word_space(self) -> bool {
        self.0 == Self::WORD_SPACE.0
    }

    /// Returns the keyed/silent state of each unit, lowest bit first.
    ///
    /// Stops before the end marker, the same way the keyer shifts a code
    /// out until only the marker bit is left.
    #[must_use]
    pub const fn key_units(self) -> KeyUnits {
        KeyUnits { bits: self.0 }
    }

    /// Total length in units, including trailing silence.
    #[must_use]
    pub fn duration(self) -> usize {
        self.key_units().count()
    }
}

impl fmt::UpperHex for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl From<Code> for u32 {
    fn from(code: Code) -> Self {
        code.0
    }
}

/// Iterator over the units of a [`Code`]; `true` means keyed.
#[derive(Debug, Clone)]
pub struct KeyUnits {
    bits: u32,
}

impl Iterator for KeyUnits {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.bits <= 1 {
            return None;
        }
        let keyed = self.bits & 1 == 1;
        self.bits >>= 1;
        Some(keyed)
    }
}

/// Packs a mark sequence into a code.
///
/// Returns `None` if the sequence does not fit in 32 bits. Every code
/// produced here is at least [`TERMINATOR`], so it can never be mistaken
/// for [`Code::NONE`].
#[must_use]
pub fn encode(marks: &[Mark]) -> Option<Code> {
    let mut acc = TERMINATOR;
    for mark in marks.iter().rev() {
        acc = match mark {
            Mark::Dot => acc.checked_mul(1 << 2)?.checked_add(0b01)?,
            Mark::Dash => acc.checked_mul(1 << 4)?.checked_add(0b0111)?,
        };
    }
    Some(Code(acc))
}

/// Unpacks a code into its mark sequence.
///
/// Fails with [`CodegenError::MalformedCode`] for anything [`encode`] could
/// not have produced, including [`Code::NONE`] and [`Code::WORD_SPACE`].
pub fn decode(code: Code) -> Result<Vec<Mark>, CodegenError> {
    let mut bits = code.0;
    let mut marks = Vec::new();
    while bits != TERMINATOR {
        if bits & 0b11 == 0b01 {
            marks.push(Mark::Dot);
            bits >>= 2;
        } else if bits & 0b1111 == 0b0111 {
            marks.push(Mark::Dash);
            bits >>= 4;
        } else {
            return Err(CodegenError::MalformedCode(code.0));
        }
    }
    Ok(marks)
}
