//! Line-based prompting
//!
//! Menus read from any `BufRead` and write to any `Write`, so the same code
//! drives stdin/stdout and in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{FinanceError, FinanceResult};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` and read one line
    ///
    /// Returns `None` once the input is exhausted. The line terminator is
    /// stripped; other whitespace is kept.
    pub fn prompt(&mut self, label: &str) -> FinanceResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| FinanceError::Io(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Print a line of output
    pub fn say(&mut self, text: impl std::fmt::Display) -> FinanceResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print text as-is (it carries its own newlines)
    pub fn write_raw(&mut self, text: &str) -> FinanceResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
