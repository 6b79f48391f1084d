//! Request types for the Attendance Ledger API.
//!
//! This module defines the JSON request structures for the `/ledger` and
//! `/target-hours` endpoints.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Category, SalaryEntry, ScheduleSettings, TimeRecord, UserSettings};

/// Request body for the `/ledger` endpoint.
///
/// When `settings` is omitted the server's configured profile is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerRequest {
    /// Schedule and allotments overriding the configured profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<UserSettings>,
    /// The time records to account for.
    pub records: Vec<RecordRequest>,
    /// Payments to total per year.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub salaries: Vec<SalaryEntry>,
}

/// A time record in a ledger request.
///
/// The category stays a raw tag here so that an unrecognised tag can be
/// reported as such rather than as a generic body error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    /// Unique identifier for the record.
    pub id: String,
    /// Start instant with its UTC offset (RFC 3339).
    pub start_time: DateTime<FixedOffset>,
    /// End instant, absent while the record is open.
    #[serde(default)]
    pub end_time: Option<DateTime<FixedOffset>>,
    /// The category tag (e.g., "work", "ordinary-2026", "lic_937").
    pub category: String,
    /// Free text.
    #[serde(default)]
    pub note: String,
}

impl TryFrom<RecordRequest> for TimeRecord {
    type Error = EngineError;

    fn try_from(req: RecordRequest) -> Result<Self, Self::Error> {
        let category: Category = req.category.parse()?;
        let record = TimeRecord {
            id: req.id,
            start_time: req.start_time,
            end_time: req.end_time,
            category,
            note: req.note,
        };
        record.validate()?;
        Ok(record)
    }
}

/// Request body for the `/target-hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetHoursRequest {
    /// The local calendar date.
    pub date: NaiveDate,
    /// Schedule overriding the configured profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleSettings>,
}
