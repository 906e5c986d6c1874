//! Line-oriented console abstraction for the interactive shell.

use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors surfaced by console I/O.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading or writing the console stream failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream reached end-of-file while a prompt was outstanding.
    #[error("input closed while a prompt was outstanding")]
    InputClosed,
}

/// Result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Paired input and output streams owned by the shell for the session.
///
/// Exactly one prompt is outstanding at any time: [`Console::prompt`] blocks
/// until a full line arrives, and the shell advances only on that line. The
/// generic handles keep the shell runnable against scripted buffers in tests
/// and locked stdio in the binary.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given stream pair.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a single line of output.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Io`] when the write fails.
    pub fn say(&mut self, line: &str) -> ShellResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes an empty line.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Io`] when the write fails.
    pub fn blank(&mut self) -> ShellResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Prints a prompt label and reads one full line of input.
    ///
    /// The returned line has its trailing newline removed but is otherwise
    /// untouched; callers decide whether to trim.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::InputClosed`] on end-of-file and
    /// [`ShellError::Io`] when the underlying stream fails.
    pub fn prompt(&mut self, label: &str) -> ShellResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
