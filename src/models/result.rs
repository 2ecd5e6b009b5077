//! Calculation result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete result of one salary calculation.
///
/// All monetary values share the unit of the input base salary and are
/// unrounded; 2-decimal rounding happens only at the display boundary.
/// `normal_overtime_hours` is signed: a negative value is the shortfall
/// below the monthly minimum, a non-negative value is overtime beyond it.
/// [`CalculationResult::is_shortfall`] makes the discriminant explicit
/// without changing the arithmetic.
///
/// # Example
///
/// ```
/// use salary_engine::models::CalculationResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let result = CalculationResult {
///     hourly_rate: dec("80"),
///     minimum_required_hours: dec("180"),
///     normal_overtime_hours: dec("-10"),
///     holiday_overtime_hours: Decimal::ZERO,
///     normal_overtime_pay: Decimal::ZERO,
///     holiday_overtime_pay: Decimal::ZERO,
///     total_overtime_pay: Decimal::ZERO,
///     deduction: dec("800"),
///     net_salary: dec("17200"),
/// };
/// assert!(result.is_shortfall());
/// assert_eq!(result.shortfall_hours(), dec("10"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The derived hourly rate: base salary divided by the standard
    /// monthly hours.
    pub hourly_rate: Decimal,
    /// The minimum required hours for the calculation period.
    pub minimum_required_hours: Decimal,
    /// Hours beyond the monthly minimum excluding holiday hours; negative
    /// when the minimum was not met.
    pub normal_overtime_hours: Decimal,
    /// Hours worked on official holidays, echoed from the input.
    pub holiday_overtime_hours: Decimal,
    /// Pay for positive normal overtime at the normal multiplier; zero in
    /// shortfall.
    pub normal_overtime_pay: Decimal,
    /// Pay for holiday hours at the holiday multiplier.
    pub holiday_overtime_pay: Decimal,
    /// Sum of the two overtime pay components.
    pub total_overtime_pay: Decimal,
    /// Deduction for the shortfall at the plain hourly rate; zero when
    /// the minimum was met.
    pub deduction: Decimal,
    /// The resulting net salary.
    pub net_salary: Decimal,
}

impl CalculationResult {
    /// Returns true when worked hours fell short of the monthly minimum.
    pub fn is_shortfall(&self) -> bool {
        self.normal_overtime_hours < Decimal::ZERO
    }

    /// Returns the unsigned shortfall hours, or zero when the minimum
    /// was met.
    pub fn shortfall_hours(&self) -> Decimal {
        if self.is_shortfall() {
            -self.normal_overtime_hours
        } else {
            Decimal::ZERO
        }
    }
}
