// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. The calculator takes
// no arguments; clap is here for --help and --version and to
// reject anything else typed after the binary name.
//
// All of the real interaction happens in the shell:
//   menu.rs  — menu text, selection parsing, operand prompts
//   shell.rs — the read/dispatch/print loop

pub mod menu;
pub mod shell;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use shell::{Shell, ShellConfig};

#[derive(Parser, Debug)]
#[command(
    name = "calculadora",
    version,
    about = "Interactive console calculator: add, subtract, multiply, divide, power and square root."
)]
pub struct Cli {}

impl Cli {
    /// Start an interactive session on the process's stdin/stdout.
    pub fn run(self) -> Result<()> {
        let config = ShellConfig::default();
        tracing::info!(title = %config.title.trim(), "Starting calculator session");

        let stdin  = io::stdin();
        let stdout = io::stdout();
        let mut shell = Shell::new(stdin.lock(), stdout.lock(), config);

        shell.run().context("Console I/O failed")?;

        tracing::info!(state = ?shell.state(), "Calculator session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_accepted() {
        assert!(Cli::try_parse_from(["calculadora"]).is_ok());
    }

    #[test]
    fn test_extra_arguments_rejected() {
        assert!(Cli::try_parse_from(["calculadora", "1"]).is_err());
        assert!(Cli::try_parse_from(["calculadora", "--verbose"]).is_err());
    }
}
