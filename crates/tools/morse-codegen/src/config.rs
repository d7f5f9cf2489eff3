//! Configuration types for the code generator.
//!
//! Deserialized from `codegen.toml` at the workspace root.

use serde::Deserialize;
use std::path::PathBuf;

use crate::array::TableLayout;
use crate::error::CodegenError;
use crate::help::HelpLayout;

/// Specification for one generated code table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSpec {
    /// Identifier of the generated array (e.g. "Code").
    pub name: String,
    /// C element type of the array.
    #[serde(default = "default_element_type")]
    pub element_type: String,
    /// Array elements per output line.
    #[serde(default = "default_items_per_line")]
    pub items_per_line: usize,
    /// Output file path, relative to workspace root.
    pub output: PathBuf,
}

impl TableSpec {
    /// Layout described by this spec, over the keyer's character range.
    #[must_use]
    pub fn layout(&self) -> TableLayout {
        TableLayout {
            name: self.name.clone(),
            element_type: self.element_type.clone(),
            items_per_line: self.items_per_line,
            ..TableLayout::default()
        }
    }
}

/// Specification for one embedded help string.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelpSpec {
    /// Identifier of the generated string (e.g. "HelpString").
    #[serde(default = "default_help_name")]
    pub name: String,
    /// Plain-text help file, relative to workspace root.
    pub input: PathBuf,
    /// Output file path, relative to workspace root.
    pub output: PathBuf,
}

impl HelpSpec {
    /// Layout described by this spec.
    #[must_use]
    pub fn layout(&self) -> HelpLayout {
        HelpLayout {
            name: self.name.clone(),
        }
    }
}

/// Top-level codegen configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodegenConfig {
    /// Code table generation specifications.
    #[serde(default)]
    pub tables: Vec<TableSpec>,
    /// Help string generation specifications.
    #[serde(default)]
    pub help: Vec<HelpSpec>,
}

impl CodegenConfig {
    /// Parses a `codegen.toml` document.
    pub fn parse(source: &str) -> Result<Self, CodegenError> {
        Ok(toml::from_str(source)?)
    }
}

fn default_element_type() -> String {
    TableLayout::default().element_type
}

fn default_items_per_line() -> usize {
    TableLayout::default().items_per_line
}

fn default_help_name() -> String {
    HelpLayout::default().name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config = CodegenConfig::parse(
            r#"
[[tables]]
name = "Code"
element_type = "int"
items_per_line = 8
output = "generated/code.inc"

[[help]]
name = "Help"
input = "doc/help.txt"
output = "generated/help.inc"
"#,
        )
        .unwrap();

        assert_eq!(config.tables.len(), 1);
        let layout = config.tables[0].layout();
        assert_eq!(layout.name, "Code");
        assert_eq!(layout.element_type, "int");
        assert_eq!(layout.items_per_line, 8);
        assert_eq!(config.help[0].layout().name, "Help");
        assert_eq!(config.help[0].input, PathBuf::from("doc/help.txt"));
    }

    #[test]
    fn optional_fields_take_defaults() {
        let config = CodegenConfig::parse(
            r#"
[[tables]]
name = "Code"
output = "code.inc"

[[help]]
input = "help.txt"
output = "help.inc"
"#,
        )
        .unwrap();

        assert_eq!(config.tables[0].items_per_line, 4);
        assert_eq!(config.tables[0].element_type, "unsigned");
        assert_eq!(config.help[0].name, "HelpString");
    }

    #[test]
    fn empty_config_generates_nothing() {
        let config = CodegenConfig::parse("").unwrap();
        assert!(config.tables.is_empty());
        assert!(config.help.is_empty());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = CodegenConfig::parse(
            r#"
[[tables]]
name = "Code"
output = "code.inc"
columns = 4
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::Config(_)));
    }
}
