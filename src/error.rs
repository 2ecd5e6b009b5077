//! Error types for the salary engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a salary calculation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the salary engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every
/// calculation error is a deterministic input error: retrying with the
/// same input reproduces the same failure, so callers are expected to
/// surface the message and abort the attempt.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::InvalidPeriod {
///     message: "month must be between 1 and 12, got 13".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid period: month must be between 1 and 12, got 13"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A monetary or hour quantity was outside its permitted range.
    #[error("Invalid amount: {message}")]
    InvalidAmount {
        /// A description of the offending amount.
        message: String,
    },

    /// The requested month/year period cannot be calculated.
    #[error("Invalid period: {message}")]
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },

    /// The holiday-work flag disagrees with the holiday overtime hours.
    #[error("Holiday flag mismatch: {message}")]
    InconsistentHolidayFlag {
        /// A description of the disagreement.
        message: String,
    },

    /// The base salary is below the configured statutory minimum wage.
    #[error("Base salary {base_salary} is below the statutory minimum wage {minimum_wage}")]
    BelowMinimumWage {
        /// The base salary that was supplied.
        base_salary: Decimal,
        /// The configured minimum wage floor.
        minimum_wage: Decimal,
    },

    /// The total worked hours exceed the monthly sanity ceiling.
    #[error("Worked hours {hours} exceed the monthly ceiling of {ceiling}")]
    HoursCeilingExceeded {
        /// The worked hours that were supplied.
        hours: Decimal,
        /// The configured ceiling.
        ceiling: Decimal,
    },

    /// More holiday overtime hours were logged than hours worked in total.
    #[error("Holiday overtime hours {holiday_hours} exceed total worked hours {total_hours}")]
    HolidayHoursExceedTotal {
        /// The holiday overtime hours that were supplied.
        holiday_hours: Decimal,
        /// The total worked hours that were supplied.
        total_hours: Decimal,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
