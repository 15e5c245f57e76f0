//! Line handling shared by the interactive editor and pipe mode.

use std::io::{self, Write};

use decicalc::{
    Calculator, CalculatorOptions, Decimal, Diagnostic, EvalError, Notation, calculator_for,
    render_error_to_string, render_error_to_string_no_color, render_warnings_to_string,
    render_warnings_to_string_no_color,
};
use nu_ansi_term::Color;

use crate::commands::{Command, parse_command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

pub struct Shell {
    calculator: Box<dyn Calculator>,
    color: bool,
}

impl Shell {
    pub fn new(notation: Notation, options: CalculatorOptions, color: bool) -> Self {
        Self {
            calculator: calculator_for(notation, options),
            color,
        }
    }

    pub fn notation(&self) -> Notation {
        self.calculator.notation()
    }

    pub fn banner(&self, out: &mut dyn Write) -> io::Result<()> {
        let other = self.notation().toggled();
        writeln!(
            out,
            "Calculator initialised in {} mode with scale {}",
            self.notation(),
            self.calculator.scale()
        )?;
        writeln!(out, "Type \":scale <num>\" to amend scale")?;
        writeln!(out, "Type \":{other}\" to switch to {other} mode")?;
        writeln!(out, "Type \":quit\" to exit (or press Ctrl+D)")?;
        writeln!(out)
    }

    /// Handles one input line. Evaluation errors are written to `err` and
    /// never end the session.
    pub fn handle_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<Outcome> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Outcome::Continue);
        }

        match parse_command(line) {
            Some(command) => self.run_command(command, out, err),
            None => {
                self.evaluate(line, out, err)?;
                Ok(Outcome::Continue)
            }
        }
    }

    fn run_command(
        &mut self,
        command: Command,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<Outcome> {
        match command {
            Command::ShowScale => writeln!(out, "{}\n", self.calculator.scale())?,
            Command::SetScale(scale) => match self.calculator.set_scale(scale) {
                Ok(()) => writeln!(out)?,
                Err(e) => write!(err, "{}", self.render_error(&e, ""))?,
            },
            Command::Switch(notation) => {
                let options = CalculatorOptions::with_scale(self.calculator.scale());
                self.calculator = calculator_for(notation, options);
                tracing::debug!(%notation, "switched notation");

                let other = notation.toggled();
                let text = format!(
                    "Switch to {notation} mode\nType \":{other}\" to switch to {other} mode"
                );
                writeln!(out, "{}\n", self.paint(&text))?;
            }
            Command::Quit => return Ok(Outcome::Quit),
            Command::Unrecognised(text) => writeln!(
                out,
                "Unrecognised command, or argument(s) not fitting pattern: {text}\n"
            )?,
        }
        Ok(Outcome::Continue)
    }

    fn evaluate(&self, line: &str, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<()> {
        match self.calculator.evaluate(line) {
            Ok(evaluation) => {
                if !evaluation.warnings.is_empty() {
                    write!(err, "{}", self.render_warnings(&evaluation.warnings, line))?;
                }
                writeln!(out, "{}\n", self.paint(&format_value(&evaluation.value)))
            }
            Err(e) => writeln!(err, "{}", self.render_error(&e, line)),
        }
    }

    fn render_error(&self, error: &EvalError, source: &str) -> String {
        if self.color {
            render_error_to_string(error, source)
        } else {
            render_error_to_string_no_color(error, source)
        }
    }

    fn render_warnings(&self, warnings: &[Diagnostic], source: &str) -> String {
        if self.color {
            render_warnings_to_string(warnings, source)
        } else {
            render_warnings_to_string_no_color(warnings, source)
        }
    }

    fn paint(&self, text: &str) -> String {
        if self.color {
            Color::Green.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Prints whole numbers written with a positive exponent (`1e3`) in full.
pub fn format_value(value: &Decimal) -> String {
    let (_, exponent) = value.as_bigint_and_exponent();
    if exponent < 0 {
        value.with_scale(0).to_string()
    } else {
        value.to_string()
    }
}
