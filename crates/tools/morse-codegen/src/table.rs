//! The Morse symbol table.
//!
//! [`STANDARD_TABLE`] is the hand-authored source of truth: whitespace
//! separated pairs of a character and its marks, laid out in columns for
//! readability. [`SymbolTable`] validates it into ordered records, and
//! [`CodeTable`] flattens the records into the dense ASCII-indexed array the
//! keyer compiles in.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use crate::code::{self, Code};
use crate::error::CodegenError;
use crate::mark::{self, Mark};

/// Characters the keyer table covers: printable ASCII from space to `Z`.
pub const KEYER_RANGE: RangeInclusive<char> = ' '..='Z';

/// Authored Morse table.
pub const STANDARD_TABLE: &str = r#"
A .-    F ..-.  K -.-   P .--.  U ..-   Z --..    = -...-   / -..-.   + .-.-.
B -...  G --.   L .-..  Q --.-  V ...-  . .-.-.-  : ---...  " .-..-.  @ .--.-.
C -.-.  H ....  M --    R .-.   W .--   , --..--  ; -.-.-.  $ ...-.-
D -..   I ..    N -.    S ...   X -..-  ? ..--..  ( -.--.   ' .----.
E .     J .---  O ---   T -     Y -.--  - -....-  ) -.--.-  _ ..--.-

0 ----- 5 .....
1 .---- 6 -....
2 ..--- 7 --...
3 ...-- 8 ---..
4 ....- 9 ----.
"#;

/// One validated table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// The character being encoded.
    pub ch: char,
    /// Its marks, first to last.
    pub marks: Vec<Mark>,
    /// The packed code for `marks`.
    pub code: Code,
}

/// Ordered, validated set of Morse symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// Parses and validates [`STANDARD_TABLE`].
    pub fn standard() -> Result<Self, CodegenError> {
        Self::parse(STANDARD_TABLE)
    }

    /// Parses the authoring form: whitespace separated `char marks` pairs.
    ///
    /// A key left without marks at the end of the text is an
    /// [`CodegenError::UnbalancedTable`].
    pub fn parse(text: &str) -> Result<Self, CodegenError> {
        let mut tokens = text.split_whitespace();
        let mut records = Vec::new();

        while let Some(key) = tokens.next() {
            let marks = tokens
                .next()
                .ok_or_else(|| CodegenError::UnbalancedTable(key.to_string()))?;
            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => return Err(CodegenError::InvalidSymbol(key.to_string())),
            };
            records.push((ch, marks));
        }

        Self::from_records(records)
    }

    /// Builds a table from `(character, marks)` records, keeping their order.
    ///
    /// Rejects malformed marks, duplicate characters, codes that overflow,
    /// and any attempt to give the word space marks.
    pub fn from_records<'a, I>(records: I) -> Result<Self, CodegenError>
    where
        I: IntoIterator<Item = (char, &'a str)>,
    {
        let mut seen = HashSet::new();
        let mut symbols = Vec::new();

        for (ch, text) in records {
            if ch == ' ' {
                return Err(CodegenError::ReservedSymbol(ch));
            }
            if !seen.insert(ch) {
                return Err(CodegenError::DuplicateSymbol(ch));
            }
            let marks = mark::parse_marks(ch, text)?;
            let code = code::encode(&marks).ok_or(CodegenError::CodeOverflow(ch))?;
            symbols.push(Symbol { ch, marks, code });
        }

        Ok(Self { symbols })
    }

    /// Looks up the entry for `ch`.
    #[must_use]
    pub fn get(&self, ch: char) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.ch == ch)
    }

    /// Returns the code for `ch`: the word space for `' '`, the table code
    /// if there is one, [`Code::NONE`] otherwise.
    #[must_use]
    pub fn code_for(&self, ch: char) -> Code {
        if ch == ' ' {
            return Code::WORD_SPACE;
        }
        self.get(ch).map_or(Code::NONE, |s| s.code)
    }

    /// Iterates entries in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Number of entries, excluding the implicit word space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Flattens the table into one code per character of `range`.
    #[must_use]
    pub fn code_table(&self, range: RangeInclusive<char>) -> CodeTable {
        let first = *range.start();
        let codes = range.map(|ch| self.code_for(ch)).collect();
        CodeTable { first, codes }
    }
}

/// Dense code array indexed by character offset, as compiled into the keyer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    first: char,
    codes: Vec<Code>,
}

impl CodeTable {
    /// Looks up a character the way the keyer does: ASCII lower case is
    /// folded to upper case, and anything outside the table is
    /// [`Code::NONE`].
    #[must_use]
    pub fn lookup(&self, ch: char) -> Code {
        let ch = ch.to_ascii_uppercase();
        (ch as u32)
            .checked_sub(self.first as u32)
            .and_then(|offset| self.codes.get(offset as usize))
            .copied()
            .unwrap_or(Code::NONE)
    }

    /// Iterates `(character, code)` pairs in array order.
    pub fn entries(&self) -> impl Iterator<Item = (char, Code)> + '_ {
        (self.first..).zip(self.codes.iter().copied())
    }

    /// Number of array elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
