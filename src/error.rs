//! Error types for the payroll tracker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every input validation failure that can occur while collecting
//! employee data from the console.

use thiserror::Error;

/// The main error type for the payroll tracker.
///
/// Every variant is recoverable: the console prompt loops print the error's
/// display text and prompt again, so none of these ever terminate a session.
///
/// # Example
///
/// ```
/// use payroll_tracker::error::TrackerError;
///
/// let error = TrackerError::DuplicateId {
///     id: "101".to_string(),
/// };
/// assert_eq!(error.to_string(), "Duplicate ID! Please enter a unique ID.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// Numeric input could not be parsed as a number.
    #[error("Invalid input! Please enter a number.")]
    InvalidNumber {
        /// The input that failed to parse.
        input: String,
    },

    /// Numeric input parsed, but the value was zero or negative.
    #[error("Invalid input! Please enter a value greater than zero.")]
    NonPositive {
        /// The input holding the non-positive value.
        input: String,
    },

    /// An employee ID was empty or contained non-alphanumeric characters.
    #[error("Invalid ID! Please enter letters and digits only.")]
    InvalidId {
        /// The input that failed ID validation.
        input: String,
    },

    /// An employee ID has already been issued in this session.
    #[error("Duplicate ID! Please enter a unique ID.")]
    DuplicateId {
        /// The ID that was already taken.
        id: String,
    },

    /// Menu input was not one of the choices 1 through 5.
    #[error("Invalid choice! Please enter a number between 1-5.")]
    InvalidMenuChoice {
        /// The input that was not a valid choice.
        input: String,
    },
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;
