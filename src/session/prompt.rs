//! Line-oriented prompts for the interactive session.

use anyhow::anyhow;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Input ended while a prompt was waiting for an answer.
#[derive(Debug, thiserror::Error)]
#[error("end of input")]
pub struct EndOfInput;

/// Whether `err` was caused by the end of input.
pub fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.downcast_ref::<EndOfInput>().is_some()
}

/// Reads answers from `input` and writes prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Print `label` and read one trimmed line.
    pub fn ask(&mut self, label: &str) -> anyhow::Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input is piped
            writeln!(self.output)?;
            return Err(EndOfInput.into());
        }
        Ok(line.trim().to_string())
    }

    /// Ask for a value, using `default` for an empty answer.
    pub fn ask_or<T>(&mut self, label: &str, default: T) -> anyhow::Result<T>
    where
        T: FromStr + Display,
        T::Err: Display,
    {
        let answer = self.ask(&format!("{label} [{default}]"))?;
        if answer.is_empty() {
            return Ok(default);
        }
        answer
            .parse()
            .map_err(|e| anyhow!("Invalid value '{answer}': {e}"))
    }

    /// Ask a yes/no question.
    pub fn confirm(&mut self, label: &str, default: bool) -> anyhow::Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        let answer = self.ask(&format!("{label} [{hint}]"))?;
        match answer.to_lowercase().as_str() {
            "" => Ok(default),
            "y" | "yes" | "д" | "да" => Ok(true),
            "n" | "no" | "н" | "нет" => Ok(false),
            other => Err(anyhow!("Invalid answer '{other}': expected y or n")),
        }
    }
}
