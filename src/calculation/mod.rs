//! Calculation logic for the salary engine.
//!
//! This module contains the calendar baseline for minimum required hours,
//! input validation, and the net salary calculation that combines them.

mod minimum_hours;
mod salary;
mod validation;

pub use minimum_hours::{
    count_weekend_days, days_in_month, is_weekend, minimum_hours_for_year, minimum_required_hours,
};
pub use salary::calculate_salary;
pub use validation::{validate_input, DAILY_HOURS_CEILING};
