//! Code generation and build automation for the Morse keyer.
//!
//! Usage:
//!   cargo xtask table             - Print the Morse code table as a C array
//!   cargo xtask help < help.txt   - Print help text as a C string constant
//!   cargo xtask codegen           - Write every fragment listed in codegen.toml
//!   cargo xtask test              - Run host unit tests
//!   cargo xtask clippy            - Run clippy lints on the workspace

mod cargo;
mod codegen;
mod config;
mod verbose;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use morse_codegen::array::{self, TableLayout};
use morse_codegen::help::{self, HelpLayout};
use morse_codegen::SymbolTable;

use crate::cargo::CargoCommand;
use crate::config::Config;
use crate::verbose::{Timer, vprintln};

#[derive(Parser)]
#[command(name = "xtask", version, disable_help_subcommand = true)]
#[command(about = "Code generation and build automation for the Morse keyer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print nothing but errors.
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Print timings and per-file detail.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Morse code table as a C array initializer
    Table {
        /// Array identifier
        #[arg(long, default_value = "Code")]
        name: String,

        /// Array elements per line
        #[arg(long, default_value_t = 4)]
        items_per_line: usize,
    },

    /// Read help text from stdin and print it as a C string constant
    Help {
        /// String identifier
        #[arg(long, default_value = "HelpString")]
        name: String,
    },

    /// Run code generators from codegen.toml
    Codegen,

    /// Run host tests
    Test {
        /// Package to test (default: every host-testable crate)
        #[arg(short, long)]
        package: Option<String>,

        /// Extra arguments passed after -- (forwarded to the test binary)
        #[arg(last = true)]
        extra_args: Vec<String>,
    },

    /// Run clippy lints on the workspace
    Clippy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    verbose::init(cli.quiet, cli.verbose);

    match cli.command {
        Commands::Table {
            name,
            items_per_line,
        } => {
            print_table(TableLayout {
                name,
                items_per_line,
                ..TableLayout::default()
            })?;
        }

        Commands::Help { name } => {
            print_help(&HelpLayout { name })?;
        }

        Commands::Codegen => {
            let config = Config::load()?;
            codegen::run_codegen(&config)?;
        }

        Commands::Test {
            package,
            extra_args,
        } => {
            let config = Config::load()?;
            test::run_tests(&config, package.as_deref(), extra_args)?;
        }

        Commands::Clippy => {
            let config = Config::load()?;
            CargoCommand {
                subcommand: "clippy".into(),
                package: None,
                extra_args: vec!["-D".into(), "warnings".into()],
            }
            .run(&config)?;
        }
    }

    Ok(())
}

/// Renders the standard table and writes it to stdout.
fn print_table(layout: TableLayout) -> Result<()> {
    let _t = Timer::start("table");
    let table = SymbolTable::standard().context("Invalid Morse symbol table")?;
    let source = array::render_table(&table, &layout).context("Failed to render code table")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(source.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write to stdout")?;

    vprintln!("{} symbols, {} array elements", table.len(), layout.range.clone().count());
    Ok(())
}

/// Streams stdin to stdout as a help string declaration.
fn print_help(layout: &HelpLayout) -> Result<()> {
    let _t = Timer::start("help");
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    let lines = help::embed_help(stdin, stdout, layout).context("Failed to embed help text")?;

    vprintln!("{lines} line(s) embedded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn help_is_our_subcommand() {
        let cli = Cli::try_parse_from(["xtask", "help", "--name", "Usage"]).unwrap();
        assert!(matches!(cli.command, Commands::Help { name } if name == "Usage"));
    }
}
