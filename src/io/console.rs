//! Line-based interactive console
//!
//! Wraps an input source and an output sink and provides the prompt
//! primitives every menu and the purchase flow are built from.
//!
//! Every read blocks until a full line is available. End of input is reported
//! as `StoreError::InputClosed` so that callers can unwind instead of
//! re-prompting forever.
//!
//! Invalid input is recovered locally: `ask_number` keeps re-prompting the
//! same question until a whole number is entered, and `ask_yes_no` keeps
//! re-prompting until the answer is `y` or `n`.

use crate::types::StoreError;
use std::io::{BufRead, Write};

/// Message printed when a number was expected
pub const INVALID_INPUT: &str = "Invalid input!!";

/// Interactive console over any line source and writer
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console reading lines from `input` and writing to `output`
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Write `text` followed by a newline
    pub fn say(&mut self, text: &str) -> Result<(), StoreError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write an empty line
    pub fn blank(&mut self) -> Result<(), StoreError> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Writer used for table rendering
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` (without newline) and read one line, line ending stripped
    pub fn ask(&mut self, prompt: &str) -> Result<String, StoreError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("Input stream closed");
            return Err(StoreError::InputClosed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until the answer parses as a whole number
    ///
    /// Negative numbers are returned as-is so that callers can apply their
    /// own range rules (e.g. a quantity below 1 is handled differently from
    /// text that is not a number at all).
    pub fn ask_number(&mut self, prompt: &str) -> Result<i64, StoreError> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.trim().parse::<i64>() {
                Ok(number) => return Ok(number),
                Err(_) => {
                    tracing::debug!(input = %answer, "Rejected non-numeric input");
                    self.say(INVALID_INPUT)?;
                }
            }
        }
    }

    /// Ask until the answer parses as a non-negative number that fits `T`
    pub fn ask_amount<T>(&mut self, prompt: &str) -> Result<T, StoreError>
    where
        T: TryFrom<i64>,
    {
        loop {
            let number = self.ask_number(prompt)?;
            match T::try_from(number) {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::debug!(number, "Rejected out-of-range amount");
                    self.say(INVALID_INPUT)?;
                }
            }
        }
    }

    /// Ask until the answer is `y` or `n` (any case)
    ///
    /// There is no retry limit: only a definite answer ends the loop.
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, StoreError> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Invalid Input!!")?,
            }
        }
    }

    /// Consume the console, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
