//! # Console Module
//!
//! Line-oriented wrapper over an input and an output stream. The binary
//! wires it to locked stdin/stdout; tests use `Cursor` and `Vec<u8>`.

use crate::error::ToolcheckResult;

use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn line(&mut self, text: impl AsRef<str>) -> ToolcheckResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    pub fn blank(&mut self) -> ToolcheckResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Writes `text` with no newline.
    pub fn text(&mut self, text: impl AsRef<str>) -> ToolcheckResult<()> {
        write!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Prints a prompt, then reads one line from input.
    ///
    /// The line terminator (`\n` or `\r\n`) is stripped. End of input
    /// yields an empty string.
    pub fn prompt(&mut self, prompt: &str) -> ToolcheckResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }

    pub fn flush(&mut self) -> ToolcheckResult<()> {
        self.output.flush()?;
        Ok(())
    }

    /// Consumes the console and hands back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
