//! Payroll report models.
//!
//! This module contains the [`PayrollReport`] type and its associated
//! structures that capture the output of a report run: one entry per
//! employee in registration order, plus aggregated totals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmployeeId, Engagement};

/// A single employee's entry in the payroll report.
///
/// Each entry captures the identity of the employee, the engagement the pay
/// was computed from, and the resulting gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// The employee's unique identifier.
    pub employee_id: EmployeeId,
    /// The employee's name.
    pub name: String,
    /// The employment arrangement the pay was computed from.
    pub engagement: Engagement,
    /// The computed gross pay for this employee.
    pub gross_pay: Decimal,
}

impl ReportEntry {
    /// Renders this entry as its console block.
    ///
    /// The block starts with the employee line and then lists the pay
    /// fields of the engagement. Amounts are printed with trailing zeros
    /// normalized, so an entered `5000` renders as `$5000`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_tracker::models::{EmployeeId, Engagement, ReportEntry};
    /// use rust_decimal::Decimal;
    ///
    /// let entry = ReportEntry {
    ///     employee_id: EmployeeId::parse("101").unwrap(),
    ///     name: "Alice".to_string(),
    ///     engagement: Engagement::FullTime {
    ///         monthly_salary: Decimal::new(5000, 0),
    ///     },
    ///     gross_pay: Decimal::new(5000, 0),
    /// };
    /// assert_eq!(
    ///     entry.render(),
    ///     "Employee: Alice (ID: 101)\nFixed Monthly Salary: $5000\n"
    /// );
    /// ```
    pub fn render(&self) -> String {
        let mut out = format!("Employee: {} (ID: {})\n", self.name, self.employee_id);
        match &self.engagement {
            Engagement::FullTime { monthly_salary } => {
                out.push_str(&format!(
                    "Fixed Monthly Salary: ${}\n",
                    monthly_salary.normalize()
                ));
            }
            Engagement::PartTime {
                hourly_wage,
                hours_worked,
            } => {
                out.push_str(&format!("Hourly Wage: ${}\n", hourly_wage.normalize()));
                out.push_str(&format!("Hours Worked: {}\n", hours_worked));
                out.push_str(&format!("Total Salary: ${}\n", self.gross_pay.normalize()));
            }
            Engagement::Contractual {
                payment_per_project,
                projects_completed,
            } => {
                out.push_str(&format!(
                    "Contract Payment Per Project: ${}\n",
                    payment_per_project.normalize()
                ));
                out.push_str(&format!("Projects Completed: {}\n", projects_completed));
                out.push_str(&format!("Total Salary: ${}\n", self.gross_pay.normalize()));
            }
        }
        out
    }
}

/// Aggregated totals for a payroll report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of gross pay across all entries.
    pub gross_pay: Decimal,
    /// Number of employees on the report.
    pub employee_count: usize,
}

/// The complete payroll report.
///
/// Entries appear in registration order. The report carries its own ID and
/// generation timestamp so a rendered report can be correlated with the log
/// line that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this report run.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// One entry per employee, in registration order.
    pub entries: Vec<ReportEntry>,
    /// Aggregated totals across all entries.
    pub totals: PayrollTotals,
}

impl PayrollReport {
    /// Renders the full report as console text.
    ///
    /// The output is the report header, one block per employee separated by
    /// blank lines, and the total payroll footer.
    pub fn render(&self) -> String {
        let mut out = String::from("\n------ Employee Payroll Report ------\n");
        for entry in &self.entries {
            out.push_str(&entry.render());
            out.push('\n');
        }
        out.push_str(&format!(
            "Total Payroll: ${}\n",
            self.totals.gross_pay.normalize()
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_entry(name: &str, id: &str, engagement: Engagement, gross_pay: Decimal) -> ReportEntry {
        ReportEntry {
            employee_id: EmployeeId::parse(id).unwrap(),
            name: name.to_string(),
            engagement,
            gross_pay,
        }
    }

    fn create_report(entries: Vec<ReportEntry>) -> PayrollReport {
        let gross_pay = entries.iter().map(|e| e.gross_pay).sum();
        let employee_count = entries.len();
        PayrollReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            entries,
            totals: PayrollTotals {
                gross_pay,
                employee_count,
            },
        }
    }

    #[test]
    fn test_full_time_entry_renders_fixed_salary_line() {
        let entry = create_entry(
            "Alice",
            "101",
            Engagement::FullTime {
                monthly_salary: dec("5000"),
            },
            dec("5000"),
        );

        assert_eq!(
            entry.render(),
            "Employee: Alice (ID: 101)\nFixed Monthly Salary: $5000\n"
        );
    }

    #[test]
    fn test_part_time_entry_renders_wage_hours_and_total() {
        let entry = create_entry(
            "Bob",
            "102",
            Engagement::PartTime {
                hourly_wage: dec("20"),
                hours_worked: 80,
            },
            dec("1600"),
        );

        assert_eq!(
            entry.render(),
            "Employee: Bob (ID: 102)\nHourly Wage: $20\nHours Worked: 80\nTotal Salary: $1600\n"
        );
    }

    #[test]
    fn test_contractual_entry_renders_payment_projects_and_total() {
        let entry = create_entry(
            "Cara",
            "C7",
            Engagement::Contractual {
                payment_per_project: dec("250"),
                projects_completed: 4,
            },
            dec("1000"),
        );

        assert_eq!(
            entry.render(),
            "Employee: Cara (ID: C7)\nContract Payment Per Project: $250\nProjects Completed: 4\nTotal Salary: $1000\n"
        );
    }

    #[test]
    fn test_trailing_zeros_are_normalized() {
        let entry = create_entry(
            "Alice",
            "101",
            Engagement::FullTime {
                monthly_salary: dec("5000.00"),
            },
            dec("5000.00"),
        );

        assert!(entry.render().contains("Fixed Monthly Salary: $5000\n"));
    }

    #[test]
    fn test_report_renders_header_entries_and_footer() {
        let report = create_report(vec![
            create_entry(
                "Alice",
                "101",
                Engagement::FullTime {
                    monthly_salary: dec("5000"),
                },
                dec("5000"),
            ),
            create_entry(
                "Bob",
                "102",
                Engagement::PartTime {
                    hourly_wage: dec("20"),
                    hours_worked: 80,
                },
                dec("1600"),
            ),
        ]);

        let rendered = report.render();
        assert!(rendered.starts_with("\n------ Employee Payroll Report ------\n"));
        assert!(rendered.contains("Employee: Alice (ID: 101)\n"));
        assert!(rendered.contains("Employee: Bob (ID: 102)\n"));
        assert!(rendered.ends_with("Total Payroll: $6600\n"));
    }

    #[test]
    fn test_entries_render_in_order() {
        let report = create_report(vec![
            create_entry(
                "First",
                "1",
                Engagement::FullTime {
                    monthly_salary: dec("100"),
                },
                dec("100"),
            ),
            create_entry(
                "Second",
                "2",
                Engagement::FullTime {
                    monthly_salary: dec("200"),
                },
                dec("200"),
            ),
        ]);

        let rendered = report.render();
        let first = rendered.find("First").unwrap();
        let second = rendered.find("Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_report_renders_header_and_zero_total() {
        let report = create_report(vec![]);

        assert_eq!(
            report.render(),
            "\n------ Employee Payroll Report ------\nTotal Payroll: $0\n"
        );
    }

    #[test]
    fn test_report_serialization_round_trip() {
        let report = create_report(vec![create_entry(
            "Alice",
            "101",
            Engagement::FullTime {
                monthly_salary: dec("5000"),
            },
            dec("5000"),
        )]);

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: PayrollReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
