//! Rendering of the code table as a C array initializer.
//!
//! Output is one element per character of the layout's range, several per
//! line, each line followed by a comment naming its characters:
//!
//! ```text
//! static unsigned Code[] = {
//!   0x0000010, 0x0000000, 0x0045D5D, 0x0000000, // ' ', '!', '"', '#'
//!   ...
//!   0x0004757, 0x0011DD7, 0x0004577,            // 'X', 'Y', 'Z'
//! };
//! ```
//!
//! A short last line is padded with blank cells so its comment lines up
//! with the others.

use std::ops::RangeInclusive;

use crate::config::TableSpec;
use crate::error::CodegenError;
use crate::table::{KEYER_RANGE, SymbolTable};

/// Printable ASCII; comments can only name characters from here.
const PRINTABLE: RangeInclusive<char> = ' '..='~';

/// Shape of a rendered code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Array identifier.
    pub name: String,
    /// C element type.
    pub element_type: String,
    /// Elements per line.
    pub items_per_line: usize,
    /// Characters covered, one element each.
    pub range: RangeInclusive<char>,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            name: "Code".into(),
            element_type: "unsigned".into(),
            items_per_line: 4,
            range: KEYER_RANGE,
        }
    }
}

impl TableLayout {
    /// Checks that the layout can be rendered.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if self.items_per_line == 0 {
            return Err(CodegenError::InvalidLayout(
                "items_per_line must be at least 1".into(),
            ));
        }
        if !is_c_identifier(&self.name) {
            return Err(CodegenError::InvalidLayout(format!(
                "{:?} is not a valid array name",
                self.name
            )));
        }
        if self.element_type.trim().is_empty() {
            return Err(CodegenError::InvalidLayout("element type is empty".into()));
        }
        let (start, end) = (*self.range.start(), *self.range.end());
        if start > end {
            return Err(CodegenError::InvalidLayout(format!(
                "empty character range {start:?}..={end:?}"
            )));
        }
        if !PRINTABLE.contains(&start) || !PRINTABLE.contains(&end) {
            return Err(CodegenError::InvalidLayout(format!(
                "character range {start:?}..={end:?} is not printable ASCII"
            )));
        }
        Ok(())
    }
}

/// Renders `table` as a C array initializer.
pub fn render_table(table: &SymbolTable, layout: &TableLayout) -> Result<String, CodegenError> {
    layout.validate()?;

    let cells: Vec<(char, String)> = table
        .code_table(layout.range.clone())
        .entries()
        .map(|(ch, code)| (ch, format!("0x{code:07X},")))
        .collect();
    let width = cells.iter().map(|(_, cell)| cell.len()).max().unwrap_or(0);
    let blank = " ".repeat(width + 1);

    let mut out = format!("static {} {}[] = {{\n", layout.element_type, layout.name);
    for line in cells.chunks(layout.items_per_line) {
        out.push_str("  ");
        for (_, cell) in line {
            out.push_str(&format!("{cell:<width$} "));
        }
        for _ in line.len()..layout.items_per_line {
            out.push_str(&blank);
        }
        let chars: Vec<String> = line.iter().map(|&(ch, _)| quote_char(ch)).collect();
        out.push_str("// ");
        out.push_str(&chars.join(", "));
        out.push('\n');
    }
    out.push_str("};\n");

    Ok(out)
}

/// Generates the standard table with the layout from `spec`.
pub fn generate(spec: &TableSpec) -> Result<String, CodegenError> {
    render_table(&SymbolTable::standard()?, &spec.layout())
}

/// Quotes a character for the line comment.
fn quote_char(ch: char) -> String {
    if ch == '\'' {
        "\"'\"".into()
    } else {
        format!("'{ch}'")
    }
}

/// Returns `true` if `name` can be used as a C identifier.
pub(crate) fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
