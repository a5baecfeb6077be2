//! Gross pay calculation.
//!
//! This module provides the gross pay formula for each engagement variant.
//! Dispatch is by variant tag, and every formula is a pure, side-effect-free
//! function of the variant's stored fields.

use rust_decimal::Decimal;

use crate::models::Engagement;

/// Computes the gross pay for an engagement.
///
/// The formula depends on the variant:
/// - full-time: the fixed monthly salary
/// - part-time: `hourly_wage * hours_worked`
/// - contractual: `payment_per_project * projects_completed`
///
/// # Examples
///
/// ```
/// use payroll_tracker::calculation::gross_pay;
/// use payroll_tracker::models::Engagement;
/// use rust_decimal::Decimal;
///
/// let engagement = Engagement::PartTime {
///     hourly_wage: Decimal::new(20, 0),
///     hours_worked: 80,
/// };
/// assert_eq!(gross_pay(&engagement), Decimal::new(1600, 0));
/// ```
pub fn gross_pay(engagement: &Engagement) -> Decimal {
    match engagement {
        Engagement::FullTime { monthly_salary } => *monthly_salary,
        Engagement::PartTime {
            hourly_wage,
            hours_worked,
        } => hourly_wage * Decimal::from(*hours_worked),
        Engagement::Contractual {
            payment_per_project,
            projects_completed,
        } => payment_per_project * Decimal::from(*projects_completed),
    }
}
