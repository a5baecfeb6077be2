//! Menu choices and parsing.
//!
//! Pure command parsing for the numbered menu, kept separate from the I/O
//! loop so it can be tested without streams.

use crate::error::{TrackerError, TrackerResult};

/// The menu displayed before every choice prompt.
pub const MENU_TEXT: &str = "\n----- Menu -----\n\
    1 - Full-time Employee\n\
    2 - Part-time Employee\n\
    3 - Contractual Employee\n\
    4 - Display Payroll Report\n\
    5 - Exit\n";

/// A parsed menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a full-time employee.
    AddFullTime,
    /// Add a part-time employee.
    AddPartTime,
    /// Add a contractual employee.
    AddContractual,
    /// Print the payroll report.
    DisplayReport,
    /// End the session.
    Exit,
}

impl MenuChoice {
    /// Parses a raw input line into a menu choice.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidMenuChoice`] for anything that is not
    /// one of the digits 1 through 5 after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_tracker::console::MenuChoice;
    ///
    /// assert_eq!(MenuChoice::parse("4\n").unwrap(), MenuChoice::DisplayReport);
    /// assert!(MenuChoice::parse("9").is_err());
    /// ```
    pub fn parse(input: &str) -> TrackerResult<Self> {
        match input.trim() {
            "1" => Ok(MenuChoice::AddFullTime),
            "2" => Ok(MenuChoice::AddPartTime),
            "3" => Ok(MenuChoice::AddContractual),
            "4" => Ok(MenuChoice::DisplayReport),
            "5" => Ok(MenuChoice::Exit),
            other => Err(TrackerError::InvalidMenuChoice {
                input: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_valid_choices() {
        assert_eq!(MenuChoice::parse("1").unwrap(), MenuChoice::AddFullTime);
        assert_eq!(MenuChoice::parse("2").unwrap(), MenuChoice::AddPartTime);
        assert_eq!(MenuChoice::parse("3").unwrap(), MenuChoice::AddContractual);
        assert_eq!(MenuChoice::parse("4").unwrap(), MenuChoice::DisplayReport);
        assert_eq!(MenuChoice::parse("5").unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        assert_eq!(MenuChoice::parse(" 5 \n").unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_out_of_range_choice_is_rejected() {
        match MenuChoice::parse("9") {
            Err(TrackerError::InvalidMenuChoice { input }) => assert_eq!(input, "9"),
            other => panic!("Expected InvalidMenuChoice, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(MenuChoice::parse("0").is_err());
    }

    #[test]
    fn test_non_numeric_choice_is_rejected() {
        assert!(MenuChoice::parse("exit").is_err());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(MenuChoice::parse("").is_err());
        assert!(MenuChoice::parse("\n").is_err());
    }

    #[test]
    fn test_padded_digits_are_rejected() {
        assert!(MenuChoice::parse("01").is_err());
        assert!(MenuChoice::parse("5 5").is_err());
    }
}
