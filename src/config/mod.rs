//! Policy configuration for the salary engine.
//!
//! All policy values the calculation depends on (standard monthly hours,
//! overtime multipliers, the statutory minimum wage) live here rather than
//! as literals inside the calculation, so that a jurisdiction update never
//! touches calculation logic.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    HourRules, OvertimeMultipliers, PolicyConfig, PolicyMetadata, WageLimits,
    MAX_MONTHLY_HOURS, MIN_SUPPORTED_YEAR, MINIMUM_WAGE, NORMAL_OVERTIME_MULTIPLIER,
    HOLIDAY_OVERTIME_MULTIPLIER, STANDARD_DAILY_HOURS, STANDARD_MONTHLY_HOURS,
};
