//! Bounded calculation history.
//!
//! The surrounding application keeps the most recent calculations so a
//! user can recall them. The list is a fixed-size, newest-first snapshot
//! store with no durable persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CalculationInput, CalculationResult};

/// Maximum number of entries the history retains.
pub const HISTORY_CAPACITY: usize = 5;

/// One recorded calculation: the input, its result, and when it ran.
///
/// # Example
///
/// ```
/// use salary_engine::models::{CalculationInput, CalculationResult, HistoryEntry};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let entry = HistoryEntry {
///     id: Uuid::new_v4(),
///     recorded_at: Utc::now(),
///     input: CalculationInput {
///         base_salary: dec("18000"),
///         month: 2,
///         year: 2021,
///         total_worked_hours: dec("190"),
///         has_holiday_work: false,
///         holiday_overtime_hours: Decimal::ZERO,
///         daily_work_hours: None,
///     },
///     result: CalculationResult {
///         hourly_rate: dec("80"),
///         minimum_required_hours: dec("180"),
///         normal_overtime_hours: dec("10"),
///         holiday_overtime_hours: Decimal::ZERO,
///         normal_overtime_pay: dec("1200"),
///         holiday_overtime_pay: Decimal::ZERO,
///         total_overtime_pay: dec("1200"),
///         deduction: Decimal::ZERO,
///         net_salary: dec("19200"),
///     },
/// };
/// assert_eq!(entry.input.month, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier for this recorded calculation.
    pub id: Uuid,
    /// When the calculation was performed.
    pub recorded_at: DateTime<Utc>,
    /// The input the calculation ran with.
    pub input: CalculationInput,
    /// The result the calculation produced.
    pub result: CalculationResult,
}

/// A bounded, newest-first list of recorded calculations.
///
/// Recording beyond [`HISTORY_CAPACITY`] silently drops the oldest entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    entries: Vec<HistoryEntry>,
}

impl CalculationHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an entry as the newest, evicting the oldest entry when
    /// the history is full.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Returns the entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
