//! Error types for the code generator.

use std::fmt;
use std::io;

/// Errors that can occur during code generation.
#[derive(Debug)]
pub enum CodegenError {
    /// A mark string contains something other than `.` or `-`.
    InvalidMark {
        /// Character whose mark string is malformed.
        symbol: char,
        /// The offending mark.
        mark: char,
    },
    /// A symbol has an empty mark string.
    EmptySequence(char),
    /// A symbol appears more than once in the table.
    DuplicateSymbol(char),
    /// A symbol is reserved and cannot be given marks (the word space).
    ReservedSymbol(char),
    /// A table key is not exactly one character.
    InvalidSymbol(String),
    /// A table key has no mark string after it.
    UnbalancedTable(String),
    /// A mark sequence is too long to pack into 32 bits.
    CodeOverflow(char),
    /// A value is not the code of any mark sequence.
    MalformedCode(u32),
    /// A rendering layout is unusable.
    InvalidLayout(String),
    /// Failed to parse the codegen configuration.
    Config(toml::de::Error),
    /// I/O error reading input or writing output.
    Io(io::Error),
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMark { symbol, mark } => {
                write!(f, "invalid mark {mark:?} in code for {symbol:?} (expected '.' or '-')")
            }
            Self::EmptySequence(symbol) => write!(f, "empty code for {symbol:?}"),
            Self::DuplicateSymbol(symbol) => write!(f, "duplicate table entry for {symbol:?}"),
            Self::ReservedSymbol(symbol) => write!(f, "{symbol:?} is reserved and cannot have marks"),
            Self::InvalidSymbol(key) => write!(f, "table key {key:?} is not a single character"),
            Self::UnbalancedTable(key) => write!(f, "table key {key:?} has no code"),
            Self::CodeOverflow(symbol) => write!(f, "code for {symbol:?} does not fit in 32 bits"),
            Self::MalformedCode(bits) => write!(f, "malformed code: 0x{bits:07X}"),
            Self::InvalidLayout(msg) => write!(f, "invalid layout: {msg}"),
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CodegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodegenError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for CodegenError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e)
    }
}
