//! Display-boundary formatting helpers.
//!
//! The calculation itself never rounds; these helpers exist for the
//! presentation layer only. Monetary values render with two decimal
//! places and hours with one, matching what a salary form displays.
//! Currency symbols are the caller's concern.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to two decimal places, away from zero on
/// midpoints.
///
/// # Example
///
/// ```
/// use salary_engine::format::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("1866.66666").unwrap();
/// assert_eq!(round_money(value), Decimal::from_str("1866.67").unwrap());
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a monetary value with exactly two decimal places.
///
/// # Example
///
/// ```
/// use salary_engine::format::format_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_money(Decimal::from_str("19200").unwrap()), "19200.00");
/// assert_eq!(format_money(Decimal::from_str("88.8888").unwrap()), "88.89");
/// ```
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}

/// Formats an hour quantity with exactly one decimal place.
///
/// # Example
///
/// ```
/// use salary_engine::format::format_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_hours(Decimal::from_str("189").unwrap()), "189.0");
/// assert_eq!(format_hours(Decimal::from_str("-16").unwrap()), "-16.0");
/// ```
pub fn format_hours(value: Decimal) -> String {
    format!(
        "{:.1}",
        value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    )
}
