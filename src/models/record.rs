//! Time record model.
//!
//! This module defines [`TimeRecord`], the immutable input unit of every
//! ledger computation.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Category;

/// A single time-tracking record.
///
/// Timestamps keep the UTC offset that was local to the user when the record
/// was captured, so the record's local calendar date never depends on where
/// the ledger is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The start instant of the record.
    pub start_time: DateTime<FixedOffset>,
    /// The end instant, absent for in-progress entries.
    #[serde(default)]
    pub end_time: Option<DateTime<FixedOffset>>,
    /// The record's category.
    pub category: Category,
    /// Free text, ignored by accounting.
    #[serde(default)]
    pub note: String,
}

impl TimeRecord {
    /// Creates a validated record from instants in any time zone.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRecord`] when `end` precedes `start`.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_ledger::models::{Category, TimeRecord};
    /// use chrono::{FixedOffset, TimeZone};
    /// use rust_decimal::Decimal;
    ///
    /// let tz = FixedOffset::east_opt(3600).unwrap();
    /// let start = tz.with_ymd_and_hms(2026, 1, 12, 8, 0, 0).unwrap();
    /// let end = tz.with_ymd_and_hms(2026, 1, 12, 16, 30, 0).unwrap();
    ///
    /// let record = TimeRecord::new("rec_001", Category::Work, start, Some(end)).unwrap();
    /// assert_eq!(record.duration_hours(), Decimal::new(85, 1)); // 8.5 hours
    /// ```
    pub fn new<Tz: TimeZone>(
        id: impl Into<String>,
        category: Category,
        start: DateTime<Tz>,
        end: Option<DateTime<Tz>>,
    ) -> EngineResult<Self> {
        let record = Self {
            id: id.into(),
            start_time: to_fixed(&start),
            end_time: end.as_ref().map(to_fixed),
            category,
            note: String::new(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Returns the record with its note replaced.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Checks that the end instant does not precede the start instant.
    pub fn validate(&self) -> EngineResult<()> {
        match self.end_time {
            Some(end) if end < self.start_time => Err(EngineError::InvalidRecord {
                record_id: self.id.clone(),
                message: format!(
                    "end time {} is before start time {}",
                    end.to_rfc3339(),
                    self.start_time.to_rfc3339()
                ),
            }),
            _ => Ok(()),
        }
    }

    /// Returns the local calendar date the record starts on.
    pub fn local_date(&self) -> NaiveDate {
        self.start_time.date_naive()
    }

    /// Returns the wall-clock duration in whole seconds, zero when the record has no end.
    pub fn duration_seconds(&self) -> i64 {
        self.end_time
            .map(|end| (end - self.start_time).num_seconds())
            .unwrap_or(0)
    }

    /// Returns the wall-clock duration in hours, zero when the record has no end.
    pub fn duration_hours(&self) -> Decimal {
        hours_from_seconds(self.duration_seconds())
    }
}

fn to_fixed<Tz: TimeZone>(instant: &DateTime<Tz>) -> DateTime<FixedOffset> {
    instant.with_timezone(&instant.offset().fix())
}

/// Converts a second count into hours.
///
/// Sum whole seconds before converting: most second counts have no exact
/// decimal hour form.
///
/// # Example
///
/// ```
/// use attendance_ledger::models::hours_from_seconds;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hours_from_seconds(5400), Decimal::new(15, 1));
/// ```
pub fn hours_from_seconds(seconds: i64) -> Decimal {
    Decimal::new(seconds, 0) / Decimal::new(3600, 0)
}
