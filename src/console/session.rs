//! The interactive session.
//!
//! This module owns the registry and the prompter and runs the menu state
//! machine: collect the fields for an employee variant and append the
//! record, print the payroll report, or exit.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::calculation::build_report;
use crate::models::{Employee, Engagement};
use crate::registry::EmployeeRegistry;

use super::menu::{MENU_TEXT, MenuChoice};
use super::prompt::Prompter;

/// An interactive payroll session bound to a pair of console streams.
///
/// The session owns all process state (the employee registry, including the
/// issued-ID set) and loops on the menu until the user chooses to exit.
pub struct Session<R, W> {
    registry: EmployeeRegistry,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading from `reader` and writing to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            registry: EmployeeRegistry::new(),
            prompter: Prompter::new(reader, writer),
        }
    }

    /// Read access to the registry, mainly for assertions in tests.
    pub fn registry(&self) -> &EmployeeRegistry {
        &self.registry
    }

    /// Runs the menu loop until the user chooses to exit.
    ///
    /// Every iteration prints the menu, reads a choice, and dispatches it.
    /// An invalid choice prints a message and returns to the menu. End of
    /// input at the menu prompt ends the session as if the user had chosen
    /// to exit; end of input while collecting employee fields is an error.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the underlying streams. Validation
    /// failures never escape; they are handled by the retry loops.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.prompter.write_text(MENU_TEXT)?;
            let line = match self.prompter.read_line("Enter choice: ") {
                Ok(line) => line,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    warn!("input stream closed at menu prompt, ending session");
                    return Ok(());
                }
                Err(err) => return Err(err),
            };

            match MenuChoice::parse(&line) {
                Ok(MenuChoice::AddFullTime) => self.add_full_time()?,
                Ok(MenuChoice::AddPartTime) => self.add_part_time()?,
                Ok(MenuChoice::AddContractual) => self.add_contractual()?,
                Ok(MenuChoice::DisplayReport) => self.display_report()?,
                Ok(MenuChoice::Exit) => {
                    self.prompter.write_text("Exiting...\n")?;
                    info!(employees = self.registry.len(), "session ended");
                    return Ok(());
                }
                Err(err) => self.prompter.write_text(&format!("{}\n", err))?,
            }
        }
    }

    fn add_full_time(&mut self) -> io::Result<()> {
        let id = self
            .prompter
            .read_unique_id("Enter Employee ID: ", &mut self.registry)?;
        let name = self.prompter.read_name("Enter Employee Name: ")?;
        let monthly_salary = self
            .prompter
            .read_positive_decimal("Enter Fixed Monthly Salary: $")?;

        self.finish_add(Employee {
            id,
            name,
            engagement: Engagement::FullTime { monthly_salary },
        });
        Ok(())
    }

    fn add_part_time(&mut self) -> io::Result<()> {
        let id = self
            .prompter
            .read_unique_id("Enter Employee ID: ", &mut self.registry)?;
        let name = self.prompter.read_name("Enter Employee Name: ")?;
        let hourly_wage = self.prompter.read_positive_decimal("Enter Hourly Wage: $")?;
        let hours_worked = self.prompter.read_positive_count("Enter Hours Worked: ")?;

        self.finish_add(Employee {
            id,
            name,
            engagement: Engagement::PartTime {
                hourly_wage,
                hours_worked,
            },
        });
        Ok(())
    }

    fn add_contractual(&mut self) -> io::Result<()> {
        let id = self
            .prompter
            .read_unique_id("Enter Employee ID: ", &mut self.registry)?;
        let name = self.prompter.read_name("Enter Employee Name: ")?;
        let payment_per_project = self
            .prompter
            .read_positive_decimal("Enter Contract Payment Per Project: $")?;
        let projects_completed = self
            .prompter
            .read_positive_count("Enter Projects Completed: ")?;

        self.finish_add(Employee {
            id,
            name,
            engagement: Engagement::Contractual {
                payment_per_project,
                projects_completed,
            },
        });
        Ok(())
    }

    fn finish_add(&mut self, employee: Employee) {
        info!(
            employee_id = %employee.id,
            kind = employee.engagement.label(),
            "employee registered"
        );
        self.registry.push(employee);
    }

    fn display_report(&mut self) -> io::Result<()> {
        let report = build_report(&self.registry);
        info!(
            report_id = %report.report_id,
            employees = report.totals.employee_count,
            total = %report.totals.gross_pay,
            "payroll report rendered"
        );
        self.prompter.write_text(&report.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_scripted(script: &str) -> (String, Vec<Employee>) {
        let mut output = Vec::new();
        let employees = {
            let mut session = Session::new(Cursor::new(script.to_string()), &mut output);
            session.run().unwrap();
            session.registry().employees().to_vec()
        };
        (String::from_utf8(output).unwrap(), employees)
    }

    #[test]
    fn test_exit_prints_exiting_and_stops() {
        let (output, employees) = run_scripted("5\n");
        assert!(output.contains("Exiting...\n"));
        assert!(employees.is_empty());
    }

    #[test]
    fn test_invalid_choice_returns_to_menu() {
        let (output, employees) = run_scripted("9\n5\n");
        assert!(output.contains("Invalid choice! Please enter a number between 1-5.\n"));
        assert_eq!(output.matches("----- Menu -----").count(), 2);
        assert!(employees.is_empty());
    }

    #[test]
    fn test_eof_at_menu_prompt_ends_session_cleanly() {
        let (output, employees) = run_scripted("");
        assert!(output.contains("----- Menu -----"));
        assert!(!output.contains("Exiting..."));
        assert!(employees.is_empty());
    }

    #[test]
    fn test_add_full_time_registers_employee() {
        let (_, employees) = run_scripted("1\n101\nAlice\n5000\n5\n");
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].name, "Alice");
    }

    #[test]
    fn test_eof_while_collecting_fields_is_an_error() {
        let mut session = Session::new(Cursor::new("1\n101\n".to_string()), Vec::new());
        let err = session.run().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
