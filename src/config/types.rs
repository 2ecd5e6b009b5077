//! Configuration types for salary calculation policy.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files, together with the
//! compiled-in default values used when no configuration file is supplied.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Default divisor used to derive the hourly rate from a monthly salary.
pub const STANDARD_MONTHLY_HOURS: Decimal = Decimal::from_parts(225, 0, 0, false, 0);

/// Default multiplier applied to overtime beyond the monthly minimum.
pub const NORMAL_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Default multiplier applied to hours worked on official holidays.
pub const HOLIDAY_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(20, 0, 0, false, 1);

/// Default statutory minimum wage floor (monthly, point-in-time snapshot).
pub const MINIMUM_WAGE: Decimal = Decimal::from_parts(11402, 0, 0, false, 0);

/// Default standard daily shift length in hours.
pub const STANDARD_DAILY_HOURS: Decimal = Decimal::from_parts(9, 0, 0, false, 0);

/// Default sanity ceiling for hours worked in one month.
pub const MAX_MONTHLY_HOURS: Decimal = Decimal::from_parts(400, 0, 0, false, 0);

/// Earliest year the engine supports.
pub const MIN_SUPPORTED_YEAR: i32 = 2020;

/// Metadata about the policy.
///
/// Identifies which jurisdiction and revision the policy values were
/// taken from, since the minimum wage in particular goes stale.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The human-readable name of the policy.
    pub name: String,
    /// The jurisdiction the policy values apply to (e.g. "TR").
    pub region: String,
    /// The revision or effective year of the policy values.
    pub version: String,
}

/// Hour rules for the monthly baseline and sanity checks.
#[derive(Debug, Clone, Deserialize)]
pub struct HourRules {
    /// Divisor used to derive the hourly rate from the monthly salary.
    pub standard_monthly: Decimal,
    /// Standard daily shift length used for the monthly minimum.
    pub standard_daily: Decimal,
    /// Sanity ceiling for hours worked in one month.
    pub max_monthly: Decimal,
}

/// Pay multipliers for the two overtime categories.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeMultipliers {
    /// Multiplier for overtime beyond the monthly minimum.
    pub normal: Decimal,
    /// Multiplier for hours worked on official holidays.
    pub holiday: Decimal,
}

/// Statutory limits enforced during validation.
#[derive(Debug, Clone, Deserialize)]
pub struct WageLimits {
    /// The statutory minimum monthly wage.
    pub minimum_wage: Decimal,
    /// The earliest supported calculation year.
    pub min_supported_year: i32,
}

/// The complete calculation policy.
///
/// Deserialized from `policy.yaml` by [`super::ConfigLoader`], or
/// constructed from compiled-in defaults via [`PolicyConfig::default`].
///
/// # Example
///
/// ```
/// use salary_engine::config::PolicyConfig;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(policy.hours.standard_monthly.to_string(), "225");
/// assert_eq!(policy.multipliers.normal.to_string(), "1.5");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Policy metadata.
    pub metadata: PolicyMetadata,
    /// Hour rules for the baseline and ceilings.
    pub hours: HourRules,
    /// Overtime pay multipliers.
    pub multipliers: OvertimeMultipliers,
    /// Statutory limits.
    pub limits: WageLimits,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            metadata: PolicyMetadata {
                name: "Monthly overtime policy".to_string(),
                region: "TR".to_string(),
                version: "2024".to_string(),
            },
            hours: HourRules {
                standard_monthly: STANDARD_MONTHLY_HOURS,
                standard_daily: STANDARD_DAILY_HOURS,
                max_monthly: MAX_MONTHLY_HOURS,
            },
            multipliers: OvertimeMultipliers {
                normal: NORMAL_OVERTIME_MULTIPLIER,
                holiday: HOLIDAY_OVERTIME_MULTIPLIER,
            },
            limits: WageLimits {
                minimum_wage: MINIMUM_WAGE,
                min_supported_year: MIN_SUPPORTED_YEAR,
            },
        }
    }
}
