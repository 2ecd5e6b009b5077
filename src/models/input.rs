//! Calculation input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete set of inputs for one salary calculation.
///
/// All quantities are plain numbers and booleans; the surrounding form
/// layer is responsible for converting raw text-field values before
/// constructing this type. Monetary values are currency-agnostic and
/// share one unit throughout.
///
/// # Example
///
/// ```
/// use salary_engine::models::CalculationInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = CalculationInput {
///     base_salary: Decimal::from_str("18000").unwrap(),
///     month: 2,
///     year: 2021,
///     total_worked_hours: Decimal::from_str("190").unwrap(),
///     has_holiday_work: false,
///     holiday_overtime_hours: Decimal::ZERO,
///     daily_work_hours: None,
/// };
/// assert_eq!(input.month, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Monthly base salary before overtime adjustments. Must be positive
    /// and at least the configured statutory minimum wage.
    pub base_salary: Decimal,
    /// Calculation month, 1-based (1 = January).
    pub month: u32,
    /// Calculation year. Years before the configured floor are rejected.
    pub year: i32,
    /// Total hours worked in the month, including holiday hours.
    pub total_worked_hours: Decimal,
    /// Whether any work was performed on official holidays. Must agree
    /// with `holiday_overtime_hours`.
    #[serde(default)]
    pub has_holiday_work: bool,
    /// Hours worked on official holidays.
    #[serde(default)]
    pub holiday_overtime_hours: Decimal,
    /// Standard daily shift length used for the monthly baseline. When
    /// absent, the policy default (9 hours) applies.
    #[serde(default)]
    pub daily_work_hours: Option<Decimal>,
}

impl CalculationInput {
    /// Returns the daily shift length to use for the monthly baseline,
    /// falling back to the supplied policy default.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::models::CalculationInput;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let mut input = CalculationInput {
    ///     base_salary: Decimal::from_str("18000").unwrap(),
    ///     month: 2,
    ///     year: 2021,
    ///     total_worked_hours: Decimal::from_str("190").unwrap(),
    ///     has_holiday_work: false,
    ///     holiday_overtime_hours: Decimal::ZERO,
    ///     daily_work_hours: None,
    /// };
    /// let nine = Decimal::from_str("9").unwrap();
    /// assert_eq!(input.effective_daily_hours(nine), nine);
    ///
    /// input.daily_work_hours = Some(Decimal::from_str("8").unwrap());
    /// assert_eq!(
    ///     input.effective_daily_hours(nine),
    ///     Decimal::from_str("8").unwrap()
    /// );
    /// ```
    pub fn effective_daily_hours(&self, default: Decimal) -> Decimal {
        self.daily_work_hours.unwrap_or(default)
    }
}
