//! Configuration loading from workspace metadata.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Codegen file used when the workspace metadata does not name one.
const DEFAULT_CODEGEN_CONFIG: &str = "codegen.toml";

/// Morse workspace metadata from Cargo.toml.
#[derive(Debug, Deserialize)]
struct MorseMetadata {
    /// Path of the codegen configuration, relative to the workspace root.
    #[serde(rename = "codegen-config")]
    codegen_config: Option<PathBuf>,
}

/// Workspace configuration.
#[derive(Debug, Deserialize)]
struct WorkspaceConfig {
    workspace: WorkspaceSection,
}

#[derive(Debug, Deserialize)]
struct WorkspaceSection {
    metadata: Option<MetadataSection>,
}

#[derive(Debug, Deserialize)]
struct MetadataSection {
    morse: Option<MorseMetadata>,
}

/// Configuration for xtask commands.
#[derive(Debug, Clone)]
pub struct Config {
    /// Workspace root directory.
    pub workspace_root: PathBuf,
    /// Absolute path of the codegen configuration.
    pub codegen_config: PathBuf,
}

impl Config {
    /// Load configuration from the workspace containing the current directory.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from(&cwd)
    }

    /// Load configuration from the workspace containing `dir`.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let workspace_root = find_workspace_root(dir)?;
        let cargo_toml = workspace_root.join("Cargo.toml");
        let content = std::fs::read_to_string(&cargo_toml)
            .with_context(|| format!("Failed to read {}", cargo_toml.display()))?;

        let config: WorkspaceConfig =
            toml::from_str(&content).context("Failed to parse Cargo.toml")?;

        let codegen_config = config
            .workspace
            .metadata
            .and_then(|m| m.morse)
            .and_then(|m| m.codegen_config)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CODEGEN_CONFIG));

        Ok(Self {
            codegen_config: workspace_root.join(codegen_config),
            workspace_root,
        })
    }
}

/// Find the workspace root by looking for Cargo.toml with [workspace].
fn find_workspace_root(start: &Path) -> Result<PathBuf> {
    let mut dir = start.to_path_buf();

    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists() {
            let content = std::fs::read_to_string(&cargo_toml)
                .with_context(|| format!("Failed to read {}", cargo_toml.display()))?;
            if content.contains("[workspace]") {
                return Ok(dir);
            }
        }

        if !dir.pop() {
            anyhow::bail!("Could not find workspace root (no Cargo.toml with [workspace] found)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_root_from_nested_dir() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("Cargo.toml"), "[workspace]\nmembers = []\n").unwrap();
        let nested = root.path().join("crates/tools/member");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("Cargo.toml"), "[package]\nname = \"member\"\n").unwrap();

        let config = Config::load_from(&nested).unwrap();
        assert_eq!(config.workspace_root, root.path());
        assert_eq!(config.codegen_config, root.path().join("codegen.toml"));
    }

    #[test]
    fn metadata_overrides_codegen_path() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join("Cargo.toml"),
            "[workspace]\nmembers = []\n\n[workspace.metadata.morse]\ncodegen-config = \"gen/codegen.toml\"\n",
        )
        .unwrap();

        let config = Config::load_from(root.path()).unwrap();
        assert_eq!(config.codegen_config, root.path().join("gen/codegen.toml"));
    }
}
