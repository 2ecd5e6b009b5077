//! Input validation for salary calculations.
//!
//! Every precondition is checked locally, in a fixed order, and the first
//! violated check is reported. All failures are deterministic input
//! errors; the caller aborts the calculation attempt and surfaces the
//! message.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::CalculationInput;

/// Upper bound for an explicit daily shift length.
pub const DAILY_HOURS_CEILING: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Validates a calculation input against the policy.
///
/// Checks run in a fixed order and the first failure is returned:
///
/// 1. base salary is positive
/// 2. month is within 1-12
/// 3. year is not before the supported floor
/// 4. total worked hours are not negative
/// 5. holiday overtime hours are not negative
/// 6. the holiday flag agrees with the holiday hours
/// 7. base salary is not below the statutory minimum wage
/// 8. total worked hours do not exceed the monthly ceiling
/// 9. holiday hours do not exceed total worked hours
/// 10. an explicit daily shift length is positive and at most 24
///
/// # Example
///
/// ```
/// use salary_engine::calculation::validate_input;
/// use salary_engine::config::PolicyConfig;
/// use salary_engine::models::CalculationInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = PolicyConfig::default();
/// let input = CalculationInput {
///     base_salary: Decimal::from_str("18000").unwrap(),
///     month: 2,
///     year: 2021,
///     total_worked_hours: Decimal::from_str("190").unwrap(),
///     has_holiday_work: false,
///     holiday_overtime_hours: Decimal::ZERO,
///     daily_work_hours: None,
/// };
/// assert!(validate_input(&input, &policy).is_ok());
/// ```
pub fn validate_input(input: &CalculationInput, policy: &PolicyConfig) -> EngineResult<()> {
    if input.base_salary <= Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            message: "base salary must be positive".to_string(),
        });
    }

    if input.month < 1 || input.month > 12 {
        return Err(EngineError::InvalidPeriod {
            message: format!("month must be between 1 and 12, got {}", input.month),
        });
    }

    if input.year < policy.limits.min_supported_year {
        return Err(EngineError::InvalidPeriod {
            message: format!(
                "years before {} are not supported, got {}",
                policy.limits.min_supported_year, input.year
            ),
        });
    }

    if input.total_worked_hours < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            message: "total worked hours cannot be negative".to_string(),
        });
    }

    if input.holiday_overtime_hours < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            message: "holiday overtime hours cannot be negative".to_string(),
        });
    }

    if input.has_holiday_work && input.holiday_overtime_hours.is_zero() {
        return Err(EngineError::InconsistentHolidayFlag {
            message: "holiday work enabled but no holiday hours entered".to_string(),
        });
    }

    if !input.has_holiday_work && input.holiday_overtime_hours > Decimal::ZERO {
        return Err(EngineError::InconsistentHolidayFlag {
            message: "holiday hours entered but holiday work not enabled".to_string(),
        });
    }

    if input.base_salary < policy.limits.minimum_wage {
        return Err(EngineError::BelowMinimumWage {
            base_salary: input.base_salary,
            minimum_wage: policy.limits.minimum_wage,
        });
    }

    if input.total_worked_hours > policy.hours.max_monthly {
        return Err(EngineError::HoursCeilingExceeded {
            hours: input.total_worked_hours,
            ceiling: policy.hours.max_monthly,
        });
    }

    if input.holiday_overtime_hours > input.total_worked_hours {
        return Err(EngineError::HolidayHoursExceedTotal {
            holiday_hours: input.holiday_overtime_hours,
            total_hours: input.total_worked_hours,
        });
    }

    if let Some(daily_hours) = input.daily_work_hours {
        if daily_hours <= Decimal::ZERO || daily_hours > DAILY_HOURS_CEILING {
            return Err(EngineError::InvalidAmount {
                message: format!(
                    "daily work hours must be between 0 and 24, got {}",
                    daily_hours
                ),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn valid_input() -> CalculationInput {
        CalculationInput {
            base_salary: dec("18000"),
            month: 2,
            year: 2021,
            total_worked_hours: dec("190"),
            has_holiday_work: false,
            holiday_overtime_hours: Decimal::ZERO,
            daily_work_hours: None,
        }
    }

    fn policy() -> PolicyConfig {
        PolicyConfig::default()
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_input(&valid_input(), &policy()).is_ok());
    }

    #[test]
    fn test_zero_base_salary_rejected() {
        let mut input = valid_input();
        input.base_salary = Decimal::ZERO;
        let error = validate_input(&input, &policy()).unwrap_err();
        assert!(matches!(error, EngineError::InvalidAmount { .. }));
        assert_eq!(
            error.to_string(),
            "Invalid amount: base salary must be positive"
        );
    }

    #[test]
    fn test_negative_base_salary_rejected() {
        let mut input = valid_input();
        input.base_salary = dec("-1");
        assert!(matches!(
            validate_input(&input, &policy()),
            Err(EngineError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        for month in [0u32, 13] {
            let mut input = valid_input();
            input.month = month;
            assert!(
                matches!(
                    validate_input(&input, &policy()),
                    Err(EngineError::InvalidPeriod { .. })
                ),
                "month {} should be rejected",
                month
            );
        }
    }

    #[test]
    fn test_year_below_floor_rejected() {
        let mut input = valid_input();
        input.year = 2019;
        let error = validate_input(&input, &policy()).unwrap_err();
        assert!(matches!(error, EngineError::InvalidPeriod { .. }));
        assert!(error.to_string().contains("2019"));
    }

    #[test]
    fn test_floor_year_accepted() {
        let mut input = valid_input();
        input.year = 2020;
        input.month = 1;
        input.total_worked_hours = dec("210");
        assert!(validate_input(&input, &policy()).is_ok());
    }

    #[test]
    fn test_negative_worked_hours_rejected() {
        let mut input = valid_input();
        input.total_worked_hours = dec("-5");
        let error = validate_input(&input, &policy()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid amount: total worked hours cannot be negative"
        );
    }

    #[test]
    fn test_negative_holiday_hours_rejected() {
        let mut input = valid_input();
        input.has_holiday_work = true;
        input.holiday_overtime_hours = dec("-2");
        let error = validate_input(&input, &policy()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid amount: holiday overtime hours cannot be negative"
        );
    }

    #[test]
    fn test_holiday_flag_without_hours_rejected() {
        let mut input = valid_input();
        input.has_holiday_work = true;
        input.holiday_overtime_hours = Decimal::ZERO;
        assert!(matches!(
            validate_input(&input, &policy()),
            Err(EngineError::InconsistentHolidayFlag { .. })
        ));
    }

    #[test]
    fn test_holiday_hours_without_flag_rejected() {
        let mut input = valid_input();
        input.has_holiday_work = false;
        input.holiday_overtime_hours = dec("4");
        assert!(matches!(
            validate_input(&input, &policy()),
            Err(EngineError::InconsistentHolidayFlag { .. })
        ));
    }

    #[test]
    fn test_below_minimum_wage_rejected() {
        let mut input = valid_input();
        input.base_salary = dec("5000");
        assert!(matches!(
            validate_input(&input, &policy()),
            Err(EngineError::BelowMinimumWage { .. })
        ));
    }

    #[test]
    fn test_exact_minimum_wage_accepted() {
        let mut input = valid_input();
        input.base_salary = dec("11402");
        assert!(validate_input(&input, &policy()).is_ok());
    }

    #[test]
    fn test_positivity_is_checked_before_minimum_wage() {
        // A non-positive salary is also below the minimum wage; the
        // positivity check must win.
        let mut input = valid_input();
        input.base_salary = Decimal::ZERO;
        assert!(matches!(
            validate_input(&input, &policy()),
            Err(EngineError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_hours_above_ceiling_rejected() {
        let mut input = valid_input();
        input.total_worked_hours = dec("400.5");
        assert!(matches!(
            validate_input(&input, &policy()),
            Err(EngineError::HoursCeilingExceeded { .. })
        ));
    }

    #[test]
    fn test_ceiling_hours_accepted() {
        let mut input = valid_input();
        input.total_worked_hours = dec("400");
        assert!(validate_input(&input, &policy()).is_ok());
    }

    #[test]
    fn test_holiday_hours_above_total_rejected() {
        let mut input = valid_input();
        input.has_holiday_work = true;
        input.total_worked_hours = dec("100");
        input.holiday_overtime_hours = dec("101");
        assert!(matches!(
            validate_input(&input, &policy()),
            Err(EngineError::HolidayHoursExceedTotal { .. })
        ));
    }

    #[test]
    fn test_holiday_hours_equal_to_total_accepted() {
        let mut input = valid_input();
        input.has_holiday_work = true;
        input.total_worked_hours = dec("100");
        input.holiday_overtime_hours = dec("100");
        assert!(validate_input(&input, &policy()).is_ok());
    }

    #[test]
    fn test_explicit_daily_hours_bounds() {
        let mut input = valid_input();
        input.daily_work_hours = Some(dec("24"));
        assert!(validate_input(&input, &policy()).is_ok());

        input.daily_work_hours = Some(dec("24.5"));
        assert!(matches!(
            validate_input(&input, &policy()),
            Err(EngineError::InvalidAmount { .. })
        ));

        input.daily_work_hours = Some(Decimal::ZERO);
        assert!(matches!(
            validate_input(&input, &policy()),
            Err(EngineError::InvalidAmount { .. })
        ));
    }
}
