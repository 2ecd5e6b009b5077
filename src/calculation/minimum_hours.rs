//! Calendar baseline for the monthly minimum required hours.
//!
//! The minimum an employee is expected to work in a month is the number
//! of weekdays in that month multiplied by the daily shift length. The
//! computation operates on calendar dates only, so no timezone can shift
//! a day across a midnight boundary.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Determines whether a date falls on a weekend.
///
/// Saturday and Sunday count as non-working days for the monthly
/// baseline.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2024-02-03 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 2, 3).unwrap()));
/// // 2024-02-05 is a Monday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the number of calendar days in the given month.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - The 1-based month (1 = January)
///
/// # Errors
///
/// Returns `InvalidPeriod` when the month is outside 1-12 or the year is
/// outside the calendar range.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29); // leap year
/// assert_eq!(days_in_month(2021, 2).unwrap(), 28);
/// ```
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    let first = first_of_month(year, month)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| EngineError::InvalidPeriod {
        message: format!("cannot construct a calendar for {}-{:02}", year, month),
    })?;

    Ok(next_first.signed_duration_since(first).num_days() as u32)
}

/// Counts the Saturdays and Sundays in the given month.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::count_weekend_days;
///
/// // February 2021 spans exactly four weeks
/// assert_eq!(count_weekend_days(2021, 2).unwrap(), 8);
/// ```
pub fn count_weekend_days(year: i32, month: u32) -> EngineResult<u32> {
    let first = first_of_month(year, month)?;
    let days = days_in_month(year, month)?;

    let weekend_days = first
        .iter_days()
        .take(days as usize)
        .filter(|date| is_weekend(*date))
        .count();

    Ok(weekend_days as u32)
}

/// Computes the minimum required working hours for a month.
///
/// The baseline is `(days in month - weekend days) x daily_hours`. The
/// result is deterministic and depends only on the Gregorian weekday
/// pattern of the month.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - The 1-based month (1 = January)
/// * `daily_hours` - The standard daily shift length, must be positive
///
/// # Errors
///
/// Returns `InvalidPeriod` for a month outside 1-12 and `InvalidAmount`
/// for a non-positive daily shift length. Callers normally validate both
/// upstream; the checks here keep the function safe to call directly.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::minimum_required_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let nine = Decimal::from_str("9").unwrap();
/// // February 2021: 20 weekdays x 9 hours
/// let minimum = minimum_required_hours(2021, 2, nine).unwrap();
/// assert_eq!(minimum, Decimal::from_str("180").unwrap());
/// ```
pub fn minimum_required_hours(year: i32, month: u32, daily_hours: Decimal) -> EngineResult<Decimal> {
    if daily_hours <= Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            message: format!("daily work hours must be positive, got {}", daily_hours),
        });
    }

    let days = days_in_month(year, month)?;
    let weekend_days = count_weekend_days(year, month)?;
    let working_days = days - weekend_days;

    Ok(Decimal::from(working_days) * daily_hours)
}

/// Computes the minimum required hours for every month of a year.
///
/// Index 0 holds January. The period picker of a form layer uses this to
/// label each month with its baseline.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::{minimum_hours_for_year, minimum_required_hours};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let nine = Decimal::from_str("9").unwrap();
/// let year = minimum_hours_for_year(2024, nine).unwrap();
/// assert_eq!(year[1], minimum_required_hours(2024, 2, nine).unwrap());
/// ```
pub fn minimum_hours_for_year(year: i32, daily_hours: Decimal) -> EngineResult<[Decimal; 12]> {
    let mut months = [Decimal::ZERO; 12];
    for month in 1..=12u32 {
        months[(month - 1) as usize] = minimum_required_hours(year, month, daily_hours)?;
    }
    Ok(months)
}

/// Constructs the first day of a month, rejecting out-of-range periods.
fn first_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| EngineError::InvalidPeriod {
        message: format!("month must be between 1 and 12, got {}", month),
    })
}
