// ============================================================
// Layer 1 — Interactive Shell
// ============================================================
// The menu loop the user talks to. One iteration:
//
//   show menu → read selection ─┬─ exit selection → farewell, Stopped
//                               ├─ operation → read operands → print result
//                               └─ anything else → "invalid option"
//
// Errors from an operation never leave the loop: they are
// printed and the menu comes back. Two exceptions:
//   - the input stream closing stops the shell quietly
//   - a failing console (I/O error) is returned to main
//
// The shell is generic over BufRead/Write so tests can feed it
// a Cursor and capture everything it prints in a Vec<u8>.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::application::calculate_use_case::CalculateUseCase;
use crate::cli::menu::{self, MenuOption};
use crate::domain::error::CalcError;
use crate::domain::operation::Operation;
use crate::infra::number_format::{format_number, parse_number};

const SELECTION_PROMPT: &str = "Seleccione una opción: ";
const FAREWELL: &str = "Saliendo de la calculadora. ¡Hasta luego!";
const INVALID_OPTION: &str = "Opción no válida. Por favor, seleccione una opción del 1 al 7.";
const RETRY_NUMBER: &str =
    "Entrada no válida. Intente de nuevo usando formato numérico correcto (por ejemplo: 12.5).";

// ─── Shell Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Heading line shown inside the menu box
    pub title: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: menu::TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Stopped,
}

// ─── Shell ────────────────────────────────────────────────────────────────────
pub struct Shell<R, W> {
    input:    R,
    output:   W,
    config:   ShellConfig,
    use_case: CalculateUseCase,
    state:    ShellState,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            config,
            use_case: CalculateUseCase::new(),
            state:    ShellState::Running,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Give back the output sink to inspect a test transcript
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Loop until the user exits or the input runs out.
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!("Shell running");
        while self.state == ShellState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// One pass through the menu.
    fn step(&mut self) -> Result<()> {
        write!(self.output, "{}", menu::render(&self.config.title))?;

        let Some(selection) = self.prompt_line(SELECTION_PROMPT)? else {
            self.stop("input closed at the menu");
            return Ok(());
        };

        match MenuOption::parse(&selection) {
            Some(MenuOption::Exit) => {
                writeln!(self.output, "{FAREWELL}")?;
                self.output.flush()?;
                self.stop("exit selected");
                return Ok(());
            }
            Some(MenuOption::Run(operation)) => {
                if let Err(err) = self.run_operation(operation) {
                    // Only the console itself failing is fatal
                    if err.downcast_ref::<io::Error>().is_some() {
                        return Err(err);
                    }
                    if let Some(CalcError::EndOfInput) = err.downcast_ref::<CalcError>() {
                        self.stop("input closed while reading operands");
                        return Ok(());
                    }
                    writeln!(self.output, "Ocurrió un error: {err}")?;
                }
            }
            None => {
                tracing::debug!(%selection, "Unrecognised menu selection");
                writeln!(self.output, "{INVALID_OPTION}")?;
            }
        }

        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read every operand `operation` needs, run it, print the result.
    fn run_operation(&mut self, operation: Operation) -> Result<()> {
        let prompts      = menu::operand_prompts(operation);
        let mut operands = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            operands.push(self.read_number(prompt)?);
        }

        let calc = self.use_case.execute(operation, &operands)?;
        writeln!(
            self.output,
            "Resultado ({}): {}",
            calc.operation,
            format_number(calc.result)
        )?;
        Ok(())
    }

    /// Keep asking until the user types a valid number.
    fn read_number(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let line = self.prompt_line(prompt)?.ok_or(CalcError::EndOfInput)?;
            match parse_number(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!("Rejected operand: {e}");
                    writeln!(self.output, "{RETRY_NUMBER}")?;
                }
            }
        }
    }

    /// Print `prompt` and read one line without its terminator.
    /// `None` means the input stream is exhausted.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so such a line is just
    /// an invalid selection or operand rather than a console failure.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn stop(&mut self, reason: &str) {
        tracing::debug!(reason, "Shell stopped");
        self.state = ShellState::Stopped;
    }
}
