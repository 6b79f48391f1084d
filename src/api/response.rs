//! Response types for the Attendance Ledger API.
//!
//! This module defines the success payloads, the error response structures
//! and the mapping from engine errors to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::DayKind;
use crate::error::EngineError;
use crate::models::LedgerReport;

/// Response body for the `/ledger` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the report.
    pub engine_version: String,
    /// Time taken to build the report, in microseconds.
    pub duration_us: u64,
    /// The ledger report.
    #[serde(flatten)]
    pub report: LedgerReport,
    /// Payment totals per calendar year, omitted when no payments were sent.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub salary_totals: BTreeMap<i32, Decimal>,
}

/// Response body for the `/target-hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetHoursResponse {
    /// The requested date.
    pub date: NaiveDate,
    /// The kind of day.
    pub day_kind: DayKind,
    /// The hours the schedule expects.
    pub target_hours: Decimal,
    /// The holiday name when the date is a national holiday.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday: Option<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an unknown category error response.
    pub fn unknown_category(tag: &str) -> Self {
        Self::with_details(
            "UNKNOWN_CATEGORY",
            format!("Unknown category tag: {}", tag),
            "Known tags are work, travel, operation, recovery, statutory-leave, holiday-recovery and ordinary-<year>",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::UnknownCategory { tag } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::unknown_category(&tag),
            },
            EngineError::InvalidRecord { record_id, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RECORD",
                    format!("Invalid record '{}': {}", record_id, message),
                    "The record data contains invalid information",
                ),
            },
            EngineError::InvalidSchedule { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SCHEDULE",
                    format!("Invalid schedule field '{}': {}", field, message),
                    "Schedule targets must be non-negative hours",
                ),
            },
        }
    }
}
