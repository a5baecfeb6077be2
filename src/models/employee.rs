//! Employee model and related types.
//!
//! This module defines the Employee struct, the EmployeeId newtype,
//! and the Engagement enum covering the three employment variants
//! tracked by the payroll.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// A unique employee identifier chosen by the user at creation time.
///
/// IDs are free-form alphanumeric tokens, so both "101" and "EMP101" are
/// accepted. Format is checked by [`EmployeeId::parse`]; uniqueness is
/// enforced by the registry when the ID is issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Parses an ID from raw console input.
    ///
    /// The input is trimmed; the remainder must be non-empty and consist
    /// entirely of alphanumeric characters.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidId`] if the trimmed input is empty or
    /// contains a non-alphanumeric character.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_tracker::models::EmployeeId;
    ///
    /// let id = EmployeeId::parse(" EMP101 ").unwrap();
    /// assert_eq!(id.as_str(), "EMP101");
    /// assert!(EmployeeId::parse("emp 001").is_err());
    /// ```
    pub fn parse(input: &str) -> TrackerResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.chars().all(char::is_alphanumeric) {
            return Err(TrackerError::InvalidId {
                input: input.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The employment arrangement and its pay basis.
///
/// Each variant carries exactly the fields its salary formula reads, so a
/// gross pay calculation is a pure function of the stored data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Engagement {
    /// Full-time employment paid a fixed monthly salary.
    FullTime {
        /// The fixed monthly salary in dollars.
        monthly_salary: Decimal,
    },
    /// Part-time employment paid by the hour.
    PartTime {
        /// The hourly wage in dollars.
        hourly_wage: Decimal,
        /// Hours worked in the pay period.
        hours_worked: u32,
    },
    /// Contractual engagement paid per completed project.
    Contractual {
        /// The payment per project in dollars.
        payment_per_project: Decimal,
        /// Number of projects completed.
        projects_completed: u32,
    },
}

impl Engagement {
    /// Returns the snake_case label for this variant, used in log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Engagement::FullTime { .. } => "full_time",
            Engagement::PartTime { .. } => "part_time",
            Engagement::Contractual { .. } => "contractual",
        }
    }
}

/// An employee on the payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// The employee's name as entered.
    pub name: String,
    /// The employment arrangement determining the pay formula.
    pub engagement: Engagement,
}
