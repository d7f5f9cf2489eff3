//! Common cargo invocation for host-side workspace commands.

use crate::config::Config;
use anyhow::Result;
use xshell::{Shell, cmd};

/// A cargo command run from the workspace root.
pub struct CargoCommand {
    /// Cargo subcommand: "test", "clippy".
    pub subcommand: String,
    /// Package to operate on (-p flag). If `None`, `--workspace` is passed.
    pub package: Option<String>,
    /// Extra arguments appended after `--`.
    pub extra_args: Vec<String>,
}

impl CargoCommand {
    /// Arguments passed to `cargo`.
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = vec![self.subcommand.clone()];

        if let Some(ref pkg) = self.package {
            args.push("-p".into());
            args.push(pkg.clone());
        } else {
            args.push("--workspace".into());
        }

        if !self.extra_args.is_empty() {
            args.push("--".into());
            args.extend(self.extra_args.iter().cloned());
        }

        args
    }

    /// Execute the cargo command.
    pub fn run(&self, config: &Config) -> Result<()> {
        let sh = Shell::new()?;
        sh.change_dir(&config.workspace_root);

        let args = self.args();
        let subcommand = &self.subcommand;
        cmd!(sh, "cargo {args...}")
            .run()
            .map_err(|e| anyhow::anyhow!("cargo {subcommand} failed: {e}"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_and_extra_args() {
        let cmd = CargoCommand {
            subcommand: "test".into(),
            package: Some("morse-codegen".into()),
            extra_args: vec!["--nocapture".into()],
        };
        assert_eq!(cmd.args(), ["test", "-p", "morse-codegen", "--", "--nocapture"]);
    }

    #[test]
    fn whole_workspace_without_package() {
        let cmd = CargoCommand {
            subcommand: "clippy".into(),
            package: None,
            extra_args: vec![],
        };
        assert_eq!(cmd.args(), ["clippy", "--workspace"]);
    }
}
