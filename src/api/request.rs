//! Request types for the salary engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint and the query parameters of the minimum-hours lookups.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CalculationInput;

/// Request body for the `/calculate` endpoint.
///
/// Mirrors [`CalculationInput`]; the form layer sends the raw numeric
/// values it collected and the engine validates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Monthly base salary before overtime adjustments.
    pub base_salary: Decimal,
    /// Calculation month, 1-based.
    pub month: u32,
    /// Calculation year.
    pub year: i32,
    /// Total hours worked in the month.
    pub total_worked_hours: Decimal,
    /// Whether any work was performed on official holidays.
    #[serde(default)]
    pub has_holiday_work: bool,
    /// Hours worked on official holidays.
    #[serde(default)]
    pub holiday_overtime_hours: Decimal,
    /// Standard daily shift length; policy default applies when absent.
    #[serde(default)]
    pub daily_work_hours: Option<Decimal>,
}

impl From<CalculationRequest> for CalculationInput {
    fn from(request: CalculationRequest) -> Self {
        CalculationInput {
            base_salary: request.base_salary,
            month: request.month,
            year: request.year,
            total_worked_hours: request.total_worked_hours,
            has_holiday_work: request.has_holiday_work,
            holiday_overtime_hours: request.holiday_overtime_hours,
            daily_work_hours: request.daily_work_hours,
        }
    }
}

/// Query parameters for the minimum-hours endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MinimumHoursQuery {
    /// Daily shift length override; policy default applies when absent.
    #[serde(default)]
    pub daily_hours: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_request_converts_to_input() {
        let request = CalculationRequest {
            base_salary: dec("18000"),
            month: 2,
            year: 2021,
            total_worked_hours: dec("190"),
            has_holiday_work: true,
            holiday_overtime_hours: dec("10"),
            daily_work_hours: Some(dec("8")),
        };

        let input: CalculationInput = request.into();
        assert_eq!(input.base_salary, dec("18000"));
        assert_eq!(input.month, 2);
        assert!(input.has_holiday_work);
        assert_eq!(input.daily_work_hours, Some(dec("8")));
    }

    #[test]
    fn test_optional_request_fields_default() {
        let json = r#"{
            "base_salary": "18000",
            "month": 2,
            "year": 2021,
            "total_worked_hours": "190"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert!(!request.has_holiday_work);
        assert_eq!(request.holiday_overtime_hours, Decimal::ZERO);
        assert_eq!(request.daily_work_hours, None);
    }

    #[test]
    fn test_minimum_hours_query_defaults() {
        let query: MinimumHoursQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.daily_hours, None);
    }
}
