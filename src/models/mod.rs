//! Data model for the salary engine.
//!
//! This module contains the input and result types for a salary
//! calculation, plus the bounded history used by the surrounding
//! application to keep recent calculations.

mod history;
mod input;
mod result;

pub use history::{CalculationHistory, HistoryEntry, HISTORY_CAPACITY};
pub use input::CalculationInput;
pub use result::CalculationResult;
