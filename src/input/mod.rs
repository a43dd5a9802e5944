//! # Input Module
//!
//! Line-based prompting and the interactive sessions built on it.

pub mod session;

pub use session::*;

use crate::{AmbushError, AmbushResult};
use std::io::{BufRead, Write};

/// Asks questions on a writer and reads trimmed answers from a reader.
///
/// Generic over its streams so sessions can be scripted in tests.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambush::Prompter;
    /// use std::io::Cursor;
    ///
    /// let mut prompter = Prompter::new(Cursor::new("swamp\n"), Vec::new());
    /// assert_eq!(prompter.ask("Where? ").unwrap(), "swamp");
    /// ```
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prints `question` and returns the next line with surrounding
    /// whitespace removed.
    ///
    /// # Errors
    ///
    /// Returns [`AmbushError::InputClosed`] when the reader is exhausted.
    pub fn ask(&mut self, question: &str) -> AmbushResult<String> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(AmbushError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until the answer parses as a number.
    pub fn ask_number(&mut self, question: &str) -> AmbushResult<u32> {
        loop {
            let answer = self.ask(question)?;
            match answer.parse() {
                Ok(number) => return Ok(number),
                Err(_) => self.say(&format!("'{}' is not a whole number.", answer))?,
            }
        }
    }

    /// Prints one line.
    pub fn say(&mut self, line: &str) -> AmbushResult<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
