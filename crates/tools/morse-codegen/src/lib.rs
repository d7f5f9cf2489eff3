//! Build-time code generator for the Morse keyer.
//!
//! This crate produces the static data the keyer runtime compiles in: the
//! bit-packed Morse code table and the help text as one string literal.
//! Everything here is pure; callers decide where the generated text goes.
//!
//! # Usage
//!
//! Invoke via `cargo xtask table` or `cargo xtask help` to print a single
//! fragment, or `cargo xtask codegen`, which reads `codegen.toml` at the
//! workspace root and writes every configured fragment to its output path.

pub mod array;
pub mod code;
pub mod config;
pub mod error;
pub mod help;
pub mod mark;
pub mod table;

pub use code::{Code, decode, encode};
pub use error::CodegenError;
pub use mark::Mark;
pub use table::{CodeTable, Symbol, SymbolTable};
