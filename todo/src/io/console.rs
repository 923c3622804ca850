//! Line-oriented console used by the interactive session.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Prompts on `output` and reads answers from `input`, one line at a time.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` (no newline) and read the next line.
    ///
    /// Returns `None` at end of input. The line terminator is stripped; the
    /// rest of the answer is returned verbatim, with invalid UTF-8 replaced
    /// by U+FFFD.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("write prompt")?;
        self.output.flush().context("flush prompt")?;

        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .context("read input line")?;
        if read == 0 {
            return Ok(None);
        }
        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    /// Print `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("write output")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
