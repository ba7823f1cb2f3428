//! Line-oriented prompt/answer I/O
//!
//! Generic over the reader and writer so flows can be driven by stdin or by
//! a scripted buffer in tests.

use std::io::{BufRead, Write};

use log::debug;

use super::error::{ConsoleError, InputError};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Show `label` and read one line without its terminator. Bytes that are
    /// not UTF-8 become U+FFFD so the answer is rejected and asked again.
    pub fn prompt(&mut self, label: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Keep asking until `parse` accepts the answer. Every rejection prints
    /// its diagnostic and shows the prompt again; there is no retry limit.
    pub fn ask_until<T>(
        &mut self,
        label: &str,
        mut parse: impl FnMut(&str) -> Result<T, InputError>,
    ) -> Result<T, ConsoleError> {
        loop {
            let answer = self.prompt(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    debug!("Rejected input {:?}: {:?}", answer, rejection);
                    self.say(rejection.to_string())?;
                }
            }
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
