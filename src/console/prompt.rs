//! Field prompts and validators.
//!
//! This module provides the pure single-line validators for the numeric
//! fields and the [`Prompter`], which wraps them in prompt/validate/retry
//! loops over the console streams. The loops print the validation error and
//! prompt again; only I/O errors escape.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;

use crate::error::{TrackerError, TrackerResult};
use crate::models::EmployeeId;
use crate::registry::EmployeeRegistry;

/// Parses a strictly positive decimal value from one line of input.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidNumber`] if the trimmed input is not a
/// decimal number, or [`TrackerError::NonPositive`] if it is zero or
/// negative.
///
/// # Examples
///
/// ```
/// use payroll_tracker::console::parse_positive_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_positive_decimal(" 20.50 ").unwrap(), Decimal::new(2050, 2));
/// assert!(parse_positive_decimal("abc").is_err());
/// assert!(parse_positive_decimal("0").is_err());
/// ```
pub fn parse_positive_decimal(input: &str) -> TrackerResult<Decimal> {
    let trimmed = input.trim();
    let value: Decimal = trimmed.parse().map_err(|_| TrackerError::InvalidNumber {
        input: trimmed.to_string(),
    })?;
    if value <= Decimal::ZERO {
        return Err(TrackerError::NonPositive {
            input: trimmed.to_string(),
        });
    }
    Ok(value)
}

/// Parses a strictly positive integer count from one line of input.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidNumber`] if the trimmed input is not an
/// integer, or [`TrackerError::NonPositive`] if it is zero.
pub fn parse_positive_count(input: &str) -> TrackerResult<u32> {
    let trimmed = input.trim();
    let value: u32 = trimmed.parse().map_err(|_| TrackerError::InvalidNumber {
        input: trimmed.to_string(),
    })?;
    if value == 0 {
        return Err(TrackerError::NonPositive {
            input: trimmed.to_string(),
        });
    }
    Ok(value)
}

/// Prompt/validate/retry loops over a pair of console streams.
///
/// Generic over the reader and writer so tests can drive prompts from
/// scripted input and inspect the transcript.
#[derive(Debug)]
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes raw text to the output stream and flushes it.
    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    /// Writes `prompt` without a trailing newline, flushes, and reads one
    /// line of input with the line terminator stripped.
    ///
    /// # Errors
    ///
    /// Reaching end of input is reported as an
    /// [`io::ErrorKind::UnexpectedEof`] error; other I/O failures pass
    /// through unchanged.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        let bytes_read = self.reader.read_line(&mut line)?;
        if bytes_read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prompts until a non-blank name is entered.
    pub fn read_name(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            let line = self.read_line(prompt)?;
            let name = line.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
            writeln!(self.writer, "Invalid input! Name cannot be empty.")?;
        }
    }

    /// Prompts until a strictly positive decimal is entered.
    pub fn read_positive_decimal(&mut self, prompt: &str) -> io::Result<Decimal> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_positive_decimal(&line) {
                Ok(value) => return Ok(value),
                Err(err) => writeln!(self.writer, "{}", err)?,
            }
        }
    }

    /// Prompts until a strictly positive integer is entered.
    pub fn read_positive_count(&mut self, prompt: &str) -> io::Result<u32> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_positive_count(&line) {
                Ok(value) => return Ok(value),
                Err(err) => writeln!(self.writer, "{}", err)?,
            }
        }
    }

    /// Prompts until a well-formed, previously unissued ID is entered.
    ///
    /// On success the ID has been recorded in the registry's issued set and
    /// will never be accepted again in this session.
    pub fn read_unique_id(
        &mut self,
        prompt: &str,
        registry: &mut EmployeeRegistry,
    ) -> io::Result<EmployeeId> {
        loop {
            let line = self.read_line(prompt)?;
            let issued: TrackerResult<EmployeeId> =
                EmployeeId::parse(&line).and_then(|id| registry.issue_id(id));
            match issued {
                Ok(id) => return Ok(id),
                Err(err) => writeln!(self.writer, "{}", err)?,
            }
        }
    }
}
