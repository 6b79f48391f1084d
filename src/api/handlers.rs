//! HTTP request handlers for the Attendance Ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_ledger, day_kind, holiday_name, salary_totals_by_year};
use crate::error::EngineResult;
use crate::models::TimeRecord;

use super::request::{LedgerRequest, TargetHoursRequest};
use super::response::{ApiError, ApiErrorResponse, LedgerResponse, TargetHoursResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ledger", post(ledger_handler))
        .route("/target-hours", post(target_hours_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

/// Maps a body extraction failure to an API error.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("Unknown category tag") {
                ApiError::new("UNKNOWN_CATEGORY", body_text)
            } else if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    }
}

/// Handler for POST /ledger endpoint.
///
/// Accepts a set of records with optional settings and returns the ledger
/// report.
async fn ledger_handler(
    State(state): State<AppState>,
    payload: Result<Json<LedgerRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ledger request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return json_response(
                StatusCode::BAD_REQUEST,
                rejection_error(rejection, correlation_id),
            );
        }
    };

    let settings = request
        .settings
        .unwrap_or_else(|| state.settings().clone());

    if let Err(err) = settings.schedule.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected schedule");
        return error_response(err.into());
    }

    let records: EngineResult<Vec<TimeRecord>> = request
        .records
        .into_iter()
        .map(TimeRecord::try_from)
        .collect();
    let records = match records {
        Ok(records) => records,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected record");
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    let report = build_ledger(&records, &settings);
    let salary_totals = salary_totals_by_year(&request.salaries);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        records_count = records.len(),
        hour_bank = %report.hour_bank,
        warnings = report.audit_trace.warnings.len(),
        duration_us = duration.as_micros(),
        "Ledger completed successfully"
    );

    json_response(
        StatusCode::OK,
        LedgerResponse {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            duration_us: duration.as_micros() as u64,
            report,
            salary_totals,
        },
    )
}

/// Handler for POST /target-hours endpoint.
///
/// Resolves the kind of a date and the hours the schedule expects on it.
async fn target_hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<TargetHoursRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing target hours request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return json_response(
                StatusCode::BAD_REQUEST,
                rejection_error(rejection, correlation_id),
            );
        }
    };

    let schedule = request
        .schedule
        .unwrap_or_else(|| state.settings().schedule.clone());

    if let Err(err) = schedule.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected schedule");
        return error_response(err.into());
    }

    let kind = day_kind(request.date);
    let response = TargetHoursResponse {
        date: request.date,
        day_kind: kind,
        target_hours: kind.target(&schedule),
        holiday: holiday_name(request.date).map(str::to_string),
    };

    info!(
        correlation_id = %correlation_id,
        date = %response.date,
        day_kind = %response.day_kind,
        target_hours = %response.target_hours,
        "Target hours resolved"
    );

    json_response(StatusCode::OK, response)
}
