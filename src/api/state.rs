//! Application state for the salary engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex};

use crate::config::ConfigLoader;
use crate::models::{CalculationHistory, HistoryEntry};

/// Shared application state.
///
/// Contains the loaded policy and the bounded in-memory history of
/// recent calculations. The history is the only mutable state in the
/// application; the calculation itself stays pure.
#[derive(Clone)]
pub struct AppState {
    /// The loaded policy configuration.
    config: Arc<ConfigLoader>,
    /// Recent calculations, newest first, bounded.
    history: Arc<Mutex<CalculationHistory>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            history: Arc::new(Mutex::new(CalculationHistory::new())),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Records a calculation in the shared history.
    pub fn record_calculation(&self, entry: HistoryEntry) {
        self.history
            .lock()
            .expect("history mutex poisoned")
            .record(entry);
    }

    /// Returns a snapshot of the history entries, newest first.
    pub fn history_snapshot(&self) -> Vec<HistoryEntry> {
        self.history
            .lock()
            .expect("history mutex poisoned")
            .entries()
            .to_vec()
    }
}
