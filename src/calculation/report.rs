//! Payroll report assembly.
//!
//! This module builds the [`PayrollReport`] from the registry: one entry per
//! employee in registration order, gross pay computed per variant, and the
//! aggregated totals.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{PayrollReport, PayrollTotals, ReportEntry};
use crate::registry::EmployeeRegistry;

use super::gross_pay;

/// Builds the payroll report for every registered employee.
///
/// Entries appear in registration order. The totals sum the gross pay of
/// every entry; an empty registry yields a report with no entries and a zero
/// total.
pub fn build_report(registry: &EmployeeRegistry) -> PayrollReport {
    let entries: Vec<ReportEntry> = registry
        .employees()
        .iter()
        .map(|employee| ReportEntry {
            employee_id: employee.id.clone(),
            name: employee.name.clone(),
            engagement: employee.engagement.clone(),
            gross_pay: gross_pay(&employee.engagement),
        })
        .collect();

    let total: Decimal = entries.iter().map(|entry| entry.gross_pay).sum();
    let totals = PayrollTotals {
        gross_pay: total,
        employee_count: entries.len(),
    };

    PayrollReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        entries,
        totals,
    }
}
