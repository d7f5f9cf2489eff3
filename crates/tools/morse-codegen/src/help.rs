//! Embedding of the help text as a C string constant.
//!
//! Each input line becomes one quoted literal ending in `\n`; the compiler
//! concatenates adjacent literals into a single string. Lines are handled
//! one at a time, so the streaming form never buffers more than a line.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::array::is_c_identifier;
use crate::config::HelpSpec;
use crate::error::CodegenError;

/// Comment placed above the declaration, followed by a blank line.
const HEADER: [&str; 3] = [
    "/* DO NOT EDIT!  The following declaration and its initializer are",
    " * generated from the plain-text help file by `cargo xtask help`.",
    " */",
];

/// Shape of the generated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpLayout {
    /// Identifier of the string constant.
    pub name: String,
}

impl Default for HelpLayout {
    fn default() -> Self {
        Self {
            name: "HelpString".into(),
        }
    }
}

impl HelpLayout {
    /// Checks that the declaration name is a C identifier.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if is_c_identifier(&self.name) {
            Ok(())
        } else {
            Err(CodegenError::InvalidLayout(format!(
                "{:?} is not a valid string name",
                self.name
            )))
        }
    }
}

/// Escapes one line for use inside a C string literal.
///
/// Trailing whitespace (including any line ending) is dropped; `"` and `\`
/// are backslash-escaped.
#[must_use]
pub fn escape_line(line: &str) -> String {
    let line = line.trim_end();
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Formats one input line as a literal of the initializer.
#[must_use]
pub fn quote_line(line: &str) -> String {
    format!("  \"{}\\n\"", escape_line(line))
}

fn header(layout: &HelpLayout) -> String {
    let mut out = String::new();
    for line in HEADER {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format!("static char* {} =\n", layout.name));
    out
}

/// Streams `input` into `output` as a help string declaration.
///
/// Returns the number of lines embedded. An invalid layout is rejected
/// before anything is written; read and write errors, including input that
/// is not UTF-8, abort the pass.
pub fn embed_help<R, W>(input: R, mut output: W, layout: &HelpLayout) -> Result<usize, CodegenError>
where
    R: BufRead,
    W: Write,
{
    layout.validate()?;
    output.write_all(header(layout).as_bytes())?;
    let mut count = 0;
    for line in input.lines() {
        writeln!(output, "{}", quote_line(&line?))?;
        count += 1;
    }
    writeln!(output, ";")?;
    output.flush()?;
    Ok(count)
}

/// Renders `text` as a help string declaration.
pub fn render_help(text: &str, layout: &HelpLayout) -> Result<String, CodegenError> {
    layout.validate()?;
    let mut out = header(layout);
    for line in text.lines() {
        out.push_str(&quote_line(line));
        out.push('\n');
    }
    out.push_str(";\n");
    Ok(out)
}

/// Generates the declaration for `spec`, reading its input relative to
/// `workspace_root`.
pub fn generate(spec: &HelpSpec, workspace_root: &Path) -> Result<String, CodegenError> {
    let input = BufReader::new(File::open(workspace_root.join(&spec.input))?);
    let mut out = Vec::new();
    embed_help(input, &mut out, &spec.layout())?;
    String::from_utf8(out)
        .map_err(|e| CodegenError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
