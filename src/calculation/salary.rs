//! Net salary calculation.
//!
//! Derives the hourly rate from the base salary, compares the worked
//! hours against the calendar baseline for the period, and prices normal
//! overtime, holiday overtime, and shortfall deductions. No intermediate
//! rounding is applied anywhere; results carry full precision to the
//! display boundary.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::error::EngineResult;
use crate::models::{CalculationInput, CalculationResult};

use super::minimum_hours::minimum_required_hours;
use super::validation::validate_input;

/// Calculates the monthly net salary for a validated input.
///
/// The calculation proceeds in the following order:
///
/// 1. Validate every precondition (first failure is returned).
/// 2. Derive the hourly rate: base salary / standard monthly hours.
/// 3. Compute the monthly minimum from the calendar baseline.
/// 4. Split the worked hours into normal overtime (or shortfall) and
///    holiday overtime.
/// 5. Price overtime at the policy multipliers; in shortfall, deduct the
///    missing hours at the plain hourly rate instead.
///
/// The function is pure: identical inputs produce bit-identical results,
/// and concurrent callers need no coordination.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::calculate_salary;
/// use salary_engine::config::PolicyConfig;
/// use salary_engine::models::CalculationInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let policy = PolicyConfig::default();
///
/// // February 2021 has 20 weekdays, so the baseline is 180 hours.
/// let input = CalculationInput {
///     base_salary: dec("18000"),
///     month: 2,
///     year: 2021,
///     total_worked_hours: dec("190"),
///     has_holiday_work: false,
///     holiday_overtime_hours: Decimal::ZERO,
///     daily_work_hours: None,
/// };
///
/// let result = calculate_salary(&input, &policy).unwrap();
/// assert_eq!(result.hourly_rate, dec("80"));
/// assert_eq!(result.normal_overtime_hours, dec("10"));
/// assert_eq!(result.net_salary, dec("19200"));
/// ```
pub fn calculate_salary(
    input: &CalculationInput,
    policy: &PolicyConfig,
) -> EngineResult<CalculationResult> {
    validate_input(input, policy)?;

    let hourly_rate = input.base_salary / policy.hours.standard_monthly;
    let daily_hours = input.effective_daily_hours(policy.hours.standard_daily);
    let minimum_required = minimum_required_hours(input.year, input.month, daily_hours)?;

    let normal_overtime_hours =
        input.total_worked_hours - minimum_required - input.holiday_overtime_hours;

    // Holiday hours are paid at the holiday multiplier whether or not
    // the monthly minimum was met.
    let holiday_overtime_pay =
        input.holiday_overtime_hours * hourly_rate * policy.multipliers.holiday;

    if normal_overtime_hours < Decimal::ZERO {
        // Shortfall: the missing hours are deducted at the plain hourly
        // rate and no normal overtime is paid. The sign of
        // normal_overtime_hours carries the shortfall to the caller.
        let deduction = -normal_overtime_hours * hourly_rate;

        return Ok(CalculationResult {
            hourly_rate,
            minimum_required_hours: minimum_required,
            normal_overtime_hours,
            holiday_overtime_hours: input.holiday_overtime_hours,
            normal_overtime_pay: Decimal::ZERO,
            holiday_overtime_pay,
            total_overtime_pay: holiday_overtime_pay,
            deduction,
            net_salary: input.base_salary + holiday_overtime_pay - deduction,
        });
    }

    let normal_overtime_pay = normal_overtime_hours * hourly_rate * policy.multipliers.normal;
    let total_overtime_pay = normal_overtime_pay + holiday_overtime_pay;

    Ok(CalculationResult {
        hourly_rate,
        minimum_required_hours: minimum_required,
        normal_overtime_hours,
        holiday_overtime_hours: input.holiday_overtime_hours,
        normal_overtime_pay,
        holiday_overtime_pay,
        total_overtime_pay,
        deduction: Decimal::ZERO,
        net_salary: input.base_salary + total_overtime_pay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn policy() -> PolicyConfig {
        PolicyConfig::default()
    }

    /// Base input for February 2021: 20 weekdays, 180-hour baseline,
    /// 18000 / 225 = 80 per hour, so every expectation is exact.
    fn feb_2021_input(worked: &str) -> CalculationInput {
        CalculationInput {
            base_salary: dec("18000"),
            month: 2,
            year: 2021,
            total_worked_hours: dec(worked),
            has_holiday_work: false,
            holiday_overtime_hours: Decimal::ZERO,
            daily_work_hours: None,
        }
    }

    #[test]
    fn test_overtime_month() {
        let result = calculate_salary(&feb_2021_input("190"), &policy()).unwrap();

        assert_eq!(result.hourly_rate, dec("80"));
        assert_eq!(result.minimum_required_hours, dec("180"));
        assert_eq!(result.normal_overtime_hours, dec("10"));
        assert_eq!(result.normal_overtime_pay, dec("1200"));
        assert_eq!(result.holiday_overtime_pay, Decimal::ZERO);
        assert_eq!(result.total_overtime_pay, dec("1200"));
        assert_eq!(result.deduction, Decimal::ZERO);
        assert_eq!(result.net_salary, dec("19200"));
        assert!(!result.is_shortfall());
    }

    #[test]
    fn test_shortfall_month() {
        let result = calculate_salary(&feb_2021_input("170"), &policy()).unwrap();

        assert_eq!(result.normal_overtime_hours, dec("-10"));
        assert_eq!(result.normal_overtime_pay, Decimal::ZERO);
        assert_eq!(result.total_overtime_pay, Decimal::ZERO);
        assert_eq!(result.deduction, dec("800"));
        assert_eq!(result.net_salary, dec("17200"));
        assert!(result.is_shortfall());
        assert_eq!(result.shortfall_hours(), dec("10"));
    }

    #[test]
    fn test_exact_minimum_pays_base_salary() {
        let result = calculate_salary(&feb_2021_input("180"), &policy()).unwrap();

        assert_eq!(result.normal_overtime_hours, Decimal::ZERO);
        assert_eq!(result.total_overtime_pay, Decimal::ZERO);
        assert_eq!(result.deduction, Decimal::ZERO);
        assert_eq!(result.net_salary, dec("18000"));
        assert!(!result.is_shortfall());
    }

    #[test]
    fn test_holiday_hours_at_double_rate() {
        let mut input = feb_2021_input("190");
        input.has_holiday_work = true;
        input.holiday_overtime_hours = dec("10");

        // 190 - 180 - 10 = 0 normal overtime, 10 holiday hours at 160.
        let result = calculate_salary(&input, &policy()).unwrap();
        assert_eq!(result.normal_overtime_hours, Decimal::ZERO);
        assert_eq!(result.normal_overtime_pay, Decimal::ZERO);
        assert_eq!(result.holiday_overtime_pay, dec("1600"));
        assert_eq!(result.total_overtime_pay, dec("1600"));
        assert_eq!(result.net_salary, dec("19600"));
    }

    #[test]
    fn test_mixed_overtime_and_holiday() {
        let mut input = feb_2021_input("200");
        input.has_holiday_work = true;
        input.holiday_overtime_hours = dec("5");

        // 200 - 180 - 5 = 15 normal overtime hours.
        let result = calculate_salary(&input, &policy()).unwrap();
        assert_eq!(result.normal_overtime_hours, dec("15"));
        assert_eq!(result.normal_overtime_pay, dec("1800"));
        assert_eq!(result.holiday_overtime_pay, dec("800"));
        assert_eq!(result.total_overtime_pay, dec("2600"));
        assert_eq!(result.net_salary, dec("20600"));
    }

    #[test]
    fn test_shortfall_with_holiday_hours_still_pays_holiday_rate() {
        let mut input = feb_2021_input("200");
        input.has_holiday_work = true;
        input.holiday_overtime_hours = dec("30");

        // 200 - 180 - 30 = -10: ten missing hours despite holiday work.
        let result = calculate_salary(&input, &policy()).unwrap();
        assert_eq!(result.normal_overtime_hours, dec("-10"));
        assert_eq!(result.normal_overtime_pay, Decimal::ZERO);
        assert_eq!(result.holiday_overtime_pay, dec("4800"));
        assert_eq!(result.total_overtime_pay, dec("4800"));
        assert_eq!(result.deduction, dec("800"));
        assert_eq!(result.net_salary, dec("22000"));
    }

    #[test]
    fn test_holiday_hours_consuming_entire_worked_total() {
        let mut input = feb_2021_input("100");
        input.has_holiday_work = true;
        input.holiday_overtime_hours = dec("100");

        // 100 - 180 - 100 = -180: the whole baseline is missing, but all
        // 100 worked hours earn the holiday rate.
        let result = calculate_salary(&input, &policy()).unwrap();
        assert_eq!(result.normal_overtime_hours, dec("-180"));
        assert_eq!(result.holiday_overtime_pay, dec("16000"));
        assert_eq!(result.deduction, dec("14400"));
        assert_eq!(result.net_salary, dec("19600"));
    }

    #[test]
    fn test_explicit_daily_hours_lower_the_baseline() {
        let mut input = feb_2021_input("170");
        input.daily_work_hours = Some(dec("8"));

        // 20 weekdays x 8 hours = 160, so 170 is overtime now.
        let result = calculate_salary(&input, &policy()).unwrap();
        assert_eq!(result.minimum_required_hours, dec("160"));
        assert_eq!(result.normal_overtime_hours, dec("10"));
        assert_eq!(result.net_salary, dec("19200"));
    }

    #[test]
    fn test_leap_february_overtime_rounds_at_display_only() {
        let input = CalculationInput {
            base_salary: dec("20000"),
            month: 2,
            year: 2024,
            total_worked_hours: dec("230"),
            has_holiday_work: false,
            holiday_overtime_hours: Decimal::ZERO,
            daily_work_hours: None,
        };

        // 29 days - 8 weekend days = 21 weekdays x 9 = 189 hours.
        let result = calculate_salary(&input, &policy()).unwrap();
        assert_eq!(result.hourly_rate, dec("20000") / dec("225"));
        assert_eq!(result.hourly_rate.round_dp(2), dec("88.89"));
        assert_eq!(result.minimum_required_hours, dec("189"));
        assert_eq!(result.normal_overtime_hours, dec("41"));
        assert_eq!(result.normal_overtime_pay.round_dp(2), dec("5466.67"));
        assert_eq!(result.net_salary.round_dp(2), dec("25466.67"));
    }

    #[test]
    fn test_leap_february_shortfall() {
        let input = CalculationInput {
            base_salary: dec("20000"),
            month: 2,
            year: 2024,
            total_worked_hours: dec("170"),
            has_holiday_work: false,
            holiday_overtime_hours: Decimal::ZERO,
            daily_work_hours: None,
        };

        let result = calculate_salary(&input, &policy()).unwrap();
        assert_eq!(result.normal_overtime_hours, dec("-19"));
        assert_eq!(result.deduction.round_dp(2), dec("1688.89"));
        assert_eq!(result.net_salary.round_dp(2), dec("18311.11"));
    }

    #[test]
    fn test_identical_inputs_yield_identical_results() {
        let input = feb_2021_input("190");
        let first = calculate_salary(&input, &policy()).unwrap();
        let second = calculate_salary(&input, &policy()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_first_failing_validation_is_reported() {
        // Below-minimum salary and an invalid month: the month check runs
        // first.
        let mut input = feb_2021_input("190");
        input.base_salary = dec("5000");
        input.month = 13;
        assert!(matches!(
            calculate_salary(&input, &policy()),
            Err(EngineError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_below_minimum_wage_rejected() {
        let mut input = feb_2021_input("190");
        input.base_salary = dec("5000");
        assert!(matches!(
            calculate_salary(&input, &policy()),
            Err(EngineError::BelowMinimumWage { .. })
        ));
    }

    #[test]
    fn test_year_before_floor_rejected() {
        let mut input = feb_2021_input("190");
        input.year = 2019;
        assert!(matches!(
            calculate_salary(&input, &policy()),
            Err(EngineError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_january_of_floor_year_accepted() {
        let input = CalculationInput {
            base_salary: dec("18000"),
            month: 1,
            year: 2020,
            total_worked_hours: dec("207"),
            has_holiday_work: false,
            holiday_overtime_hours: Decimal::ZERO,
            daily_work_hours: None,
        };

        // January 2020 has 23 weekdays: exactly the baseline.
        let result = calculate_salary(&input, &policy()).unwrap();
        assert_eq!(result.minimum_required_hours, dec("207"));
        assert_eq!(result.net_salary, dec("18000"));
    }

    #[test]
    fn test_custom_policy_multipliers_are_honoured() {
        let mut custom = policy();
        custom.multipliers.normal = dec("2.0");
        custom.multipliers.holiday = dec("3.0");

        let mut input = feb_2021_input("190");
        input.has_holiday_work = true;
        input.holiday_overtime_hours = dec("5");

        // 190 - 180 - 5 = 5 normal overtime hours.
        let result = calculate_salary(&input, &custom).unwrap();
        assert_eq!(result.normal_overtime_pay, dec("800"));
        assert_eq!(result.holiday_overtime_pay, dec("1200"));
        assert_eq!(result.net_salary, dec("20000"));
    }
}
