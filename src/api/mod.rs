//! HTTP API module for the salary engine.
//!
//! This module provides the REST endpoints a salary form talks to:
//! calculating a net salary, looking up the monthly baseline hours, and
//! reading back the recent calculation history.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, MinimumHoursQuery};
pub use response::{
    ApiError, CalculationResponse, DisplayTotals, MinimumHoursResponse, MonthMinimum,
    YearMinimumHoursResponse,
};
pub use state::AppState;
