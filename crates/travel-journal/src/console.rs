use std::io::{BufRead, Write};

use chrono::NaiveDate;
use journal_types::parse_date;
use thiserror::Error;
use tracing::debug;

pub const INVALID_DATE_MESSAGE: &str = "Invalid date format. Please use YYYY-MM-DD.";
pub const INVALID_AGE_MESSAGE: &str = "Invalid age. Please enter a whole number.";

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("unexpected end of input")]
    EndOfInput,
    #[error("no valid {what} after {attempts} attempt(s)")]
    TooManyAttempts { what: &'static str, attempts: u32 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Line-oriented dialogue over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    max_attempts: Option<u32>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, max_attempts: Option<u32>) -> Self {
        Self {
            input,
            output,
            max_attempts,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes `prompt` without a newline and returns the next line with its
    /// line ending removed. Other whitespace is kept.
    pub fn prompt(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn prompt_date(&mut self, prompt: &str) -> Result<NaiveDate, PromptError> {
        self.prompt_valid(prompt, "date", INVALID_DATE_MESSAGE, |s| parse_date(s).ok())
    }

    pub fn prompt_age(&mut self, prompt: &str) -> Result<u32, PromptError> {
        self.prompt_valid(prompt, "age", INVALID_AGE_MESSAGE, |s| s.trim().parse().ok())
    }

    fn prompt_valid<T>(
        &mut self,
        prompt: &str,
        what: &'static str,
        error_message: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, PromptError> {
        let mut attempts = 0;
        loop {
            let line = self.prompt(prompt)?;
            if let Some(value) = parse(&line) {
                return Ok(value);
            }
            attempts += 1;
            debug!("Rejected {} input (attempt {})", what, attempts);
            self.say(error_message)?;

            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(PromptError::TooManyAttempts { what, attempts });
            }
        }
    }
}
