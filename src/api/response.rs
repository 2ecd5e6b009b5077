//! Response types for the salary engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API, including the display-formatted view of a calculation that
//! a form renders directly.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::format::{format_hours, format_money};
use crate::models::CalculationResult;

/// Successful response body of the `/calculate` endpoint.
///
/// Carries both the unrounded result and a display view with fixed
/// decimal places, so the form never rounds on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// The unrounded calculation result.
    pub result: CalculationResult,
    /// Display-formatted totals (two decimals for money, one for hours).
    pub display: DisplayTotals,
}

impl From<CalculationResult> for CalculationResponse {
    fn from(result: CalculationResult) -> Self {
        let display = DisplayTotals {
            hourly_rate: format_money(result.hourly_rate),
            minimum_required_hours: format_hours(result.minimum_required_hours),
            normal_overtime_hours: format_hours(result.normal_overtime_hours),
            holiday_overtime_hours: format_hours(result.holiday_overtime_hours),
            normal_overtime_pay: format_money(result.normal_overtime_pay),
            holiday_overtime_pay: format_money(result.holiday_overtime_pay),
            total_overtime_pay: format_money(result.total_overtime_pay),
            deduction: format_money(result.deduction),
            net_salary: format_money(result.net_salary),
        };
        Self { result, display }
    }
}

/// Display-formatted totals of a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayTotals {
    /// Hourly rate, two decimals.
    pub hourly_rate: String,
    /// Minimum required hours, one decimal.
    pub minimum_required_hours: String,
    /// Normal overtime hours (signed), one decimal.
    pub normal_overtime_hours: String,
    /// Holiday overtime hours, one decimal.
    pub holiday_overtime_hours: String,
    /// Normal overtime pay, two decimals.
    pub normal_overtime_pay: String,
    /// Holiday overtime pay, two decimals.
    pub holiday_overtime_pay: String,
    /// Total overtime pay, two decimals.
    pub total_overtime_pay: String,
    /// Shortfall deduction, two decimals.
    pub deduction: String,
    /// Net salary, two decimals.
    pub net_salary: String,
}

/// Response body for a single-month minimum-hours lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimumHoursResponse {
    /// The requested year.
    pub year: i32,
    /// The requested 1-based month.
    pub month: u32,
    /// The daily shift length the baseline was computed with.
    pub daily_hours: Decimal,
    /// The minimum required hours for the month.
    pub minimum_hours: Decimal,
}

/// Response body for a full-year minimum-hours listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearMinimumHoursResponse {
    /// The requested year.
    pub year: i32,
    /// The daily shift length the baselines were computed with.
    pub daily_hours: Decimal,
    /// One entry per month, January first.
    pub months: Vec<MonthMinimum>,
}

/// One month's baseline in the year listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthMinimum {
    /// The 1-based month.
    pub month: u32,
    /// The minimum required hours for that month.
    pub minimum_hours: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let status = match &error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        };

        let code = match &error {
            EngineError::InvalidAmount { .. } => "INVALID_AMOUNT",
            EngineError::InvalidPeriod { .. } => "INVALID_PERIOD",
            EngineError::InconsistentHolidayFlag { .. } => "INCONSISTENT_HOLIDAY_FLAG",
            EngineError::BelowMinimumWage { .. } => "BELOW_MINIMUM_WAGE",
            EngineError::HoursCeilingExceeded { .. } => "HOURS_CEILING_EXCEEDED",
            EngineError::HolidayHoursExceedTotal { .. } => "HOLIDAY_HOURS_EXCEED_TOTAL",
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                "CONFIG_ERROR"
            }
        };

        // The message is the error's display text, verbatim; a form shows
        // it to the end user without rewriting.
        ApiErrorResponse {
            status,
            error: ApiError::new(code, error.to_string()),
        }
    }
}
