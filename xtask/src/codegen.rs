//! Code generation command for `cargo xtask codegen`.
//!
//! Reads `codegen.toml` from the workspace root, generates the C source
//! fragment for each configured table and help string, and writes them to
//! the specified output paths.

use anyhow::{Context, Result};
use std::path::Path;

use morse_codegen::config::CodegenConfig;
use morse_codegen::{array, help};

use crate::config::Config;
use crate::verbose::{Timer, dprintln, vprintln};

/// Runs the code generation pipeline.
///
/// Reads the codegen configuration, generates all configured fragments, and
/// writes output files. Returns the number of files whose contents changed.
pub fn run_codegen(config: &Config) -> Result<usize> {
    let _t = Timer::start("codegen");
    let root = &config.workspace_root;
    let config_path = &config.codegen_config;
    let config_str = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let codegen = CodegenConfig::parse(&config_str)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    let mut written = 0;

    for spec in &codegen.tables {
        dprintln!("Generating table '{}'...", spec.name);

        let source = array::generate(spec)
            .with_context(|| format!("Failed to generate table '{}'", spec.name))?;

        if write_output(root, &spec.output, &source)? {
            written += 1;
        }
    }

    for spec in &codegen.help {
        dprintln!("Embedding help '{}' from {}...", spec.name, spec.input.display());

        let source = help::generate(spec, root)
            .with_context(|| format!("Failed to embed {}", spec.input.display()))?;

        if write_output(root, &spec.output, &source)? {
            written += 1;
        }
    }

    dprintln!("Code generation complete ({written} file(s) updated).");
    Ok(written)
}

/// Writes `source` to `relative` under `root`, leaving identical files
/// untouched so their timestamps do not trigger rebuilds.
///
/// Returns `true` if the file was written.
fn write_output(root: &Path, relative: &Path, source: &str) -> Result<bool> {
    let output_path = root.join(relative);

    if std::fs::read_to_string(&output_path).is_ok_and(|existing| existing == source) {
        vprintln!("  -> {} (unchanged)", relative.display());
        return Ok(false);
    }

    // Ensure parent directory exists.
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&output_path, source)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    dprintln!("  -> {}", relative.display());
    Ok(true)
}
