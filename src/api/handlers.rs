//! HTTP request handlers for the salary engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_salary, minimum_hours_for_year, minimum_required_hours};
use crate::models::{CalculationInput, HistoryEntry};

use super::request::{CalculationRequest, MinimumHoursQuery};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, MinimumHoursResponse, MonthMinimum,
    YearMinimumHoursResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/minimum-hours/:year", get(year_minimum_hours_handler))
        .route(
            "/minimum-hours/:year/:month",
            get(month_minimum_hours_handler),
        )
        .route("/history", get(history_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request, returns the calculated salary result,
/// and records the calculation in the bounded history.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let input: CalculationInput = request.into();
    let policy = state.config().policy();

    match calculate_salary(&input, policy) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                year = input.year,
                month = input.month,
                net_salary = %result.net_salary,
                "Calculation completed successfully"
            );
            state.record_calculation(HistoryEntry {
                id: correlation_id,
                recorded_at: Utc::now(),
                input,
                result: result.clone(),
            });
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CalculationResponse::from(result)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /minimum-hours/:year/:month.
///
/// Returns the minimum required hours for one month, optionally with a
/// `daily_hours` query override.
async fn month_minimum_hours_handler(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
    Query(query): Query<MinimumHoursQuery>,
) -> impl IntoResponse {
    let policy = state.config().policy();
    let daily_hours = query.daily_hours.unwrap_or(policy.hours.standard_daily);

    match minimum_required_hours(year, month, daily_hours) {
        Ok(minimum_hours) => Json(MinimumHoursResponse {
            year,
            month,
            daily_hours,
            minimum_hours,
        })
        .into_response(),
        Err(err) => {
            warn!(year, month, error = %err, "Minimum hours lookup rejected");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /minimum-hours/:year.
///
/// Returns the minimum required hours for every month of the year, the
/// listing a period picker labels its months with.
async fn year_minimum_hours_handler(
    State(state): State<AppState>,
    Path(year): Path<i32>,
    Query(query): Query<MinimumHoursQuery>,
) -> impl IntoResponse {
    let policy = state.config().policy();
    let daily_hours = query.daily_hours.unwrap_or(policy.hours.standard_daily);

    match minimum_hours_for_year(year, daily_hours) {
        Ok(months) => {
            let months = months
                .iter()
                .enumerate()
                .map(|(index, minimum_hours)| MonthMinimum {
                    month: index as u32 + 1,
                    minimum_hours: *minimum_hours,
                })
                .collect();
            Json(YearMinimumHoursResponse {
                year,
                daily_hours,
                months,
            })
            .into_response()
        }
        Err(err) => {
            warn!(year, error = %err, "Year minimum hours listing rejected");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /history.
///
/// Returns the recent calculations, newest first, at most five.
async fn history_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.history_snapshot())
}
