//! Record builders for data entry.
//!
//! Each builder turns a calendar-level request (a date, wall-clock times, a
//! category) into validated [`TimeRecord`]s in the caller's time zone. Every
//! built record gets a fresh UUID.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use uuid::Uuid;

use crate::calculation::target_hours;
use crate::error::{EngineError, EngineResult};
use crate::models::{Category, ScheduleSettings, TimeRecord};

/// Local start time of leave entries and recovery markers.
pub const LEAVE_START: NaiveTime = match NaiveTime::from_hms_opt(9, 0, 0) {
    Some(time) => time,
    None => panic!("invalid leave start time"),
};

/// Local start time of each operation day.
pub const OPERATION_START: NaiveTime = match NaiveTime::from_hms_opt(8, 0, 0) {
    Some(time) => time,
    None => panic!("invalid operation start time"),
};

/// Local end time of each operation day.
pub const OPERATION_END: NaiveTime = match NaiveTime::from_hms_opt(17, 0, 0) {
    Some(time) => time,
    None => panic!("invalid operation end time"),
};

fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Resolves a local wall-clock time to an instant.
///
/// Ambiguous times (a repeated hour) resolve to the earlier instant; times
/// skipped by a transition are rejected.
fn resolve_local<Tz: TimeZone>(
    tz: &Tz,
    local: NaiveDateTime,
    record_id: &str,
) -> EngineResult<DateTime<Tz>> {
    tz.from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| EngineError::InvalidRecord {
            record_id: record_id.to_string(),
            message: format!("local time {local} does not exist in this time zone"),
        })
}

fn hours_to_duration(hours: Decimal, record_id: &str) -> EngineResult<Duration> {
    (hours * Decimal::from(3600))
        .round()
        .to_i64()
        .map(Duration::seconds)
        .ok_or_else(|| EngineError::InvalidRecord {
            record_id: record_id.to_string(),
            message: format!("target of {hours} hours is out of range"),
        })
}

/// Builds a work or travel record spanning `start` to `end` on one day.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRecord`] when the category is not work or
/// travel, or when `end` is not after `start`.
///
/// # Example
///
/// ```
/// use attendance_ledger::entry::work_record;
/// use attendance_ledger::models::Category;
/// use chrono::{FixedOffset, NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let tz = FixedOffset::east_opt(3600).unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(16, 30, 0).unwrap();
///
/// let record = work_record(&tz, date, start, end, Category::Work).unwrap();
/// assert_eq!(record.duration_hours(), Decimal::new(85, 1));
/// ```
pub fn work_record<Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    category: Category,
) -> EngineResult<TimeRecord> {
    let id = new_record_id();

    if !category.is_credited() {
        return Err(EngineError::InvalidRecord {
            record_id: id,
            message: format!("category {category} cannot be entered as a time span"),
        });
    }
    if end <= start {
        return Err(EngineError::InvalidRecord {
            record_id: id,
            message: format!("end time {end} must be after start time {start}"),
        });
    }

    let start_instant = resolve_local(tz, date.and_time(start), &id)?;
    let end_instant = resolve_local(tz, date.and_time(end), &id)?;
    TimeRecord::new(id, category, start_instant, Some(end_instant))
}

/// Builds a full-day leave record.
///
/// The record starts at 09:00 local time and lasts the day's target hours, so
/// a leave day on a weekend has zero duration.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRecord`] when the category is not a
/// full-day leave category.
pub fn leave_record<Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
    category: Category,
    schedule: &ScheduleSettings,
) -> EngineResult<TimeRecord> {
    let id = new_record_id();

    if !category.is_full_day_leave() {
        return Err(EngineError::InvalidRecord {
            record_id: id,
            message: format!("category {category} is not a leave category"),
        });
    }

    let start = resolve_local(tz, date.and_time(LEAVE_START), &id)?;
    let end = start.clone() + hours_to_duration(target_hours(date, schedule), &id)?;
    TimeRecord::new(id, category, start, Some(end))
}

/// Builds a zero-duration recovery marker at 09:00 local time.
pub fn recovery_marker<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> EngineResult<TimeRecord> {
    let id = new_record_id();
    let start = resolve_local(tz, date.and_time(LEAVE_START), &id)?;
    TimeRecord::new(id, Category::Recovery, start.clone(), Some(start))
}

/// Expands an operation period into one 08:00 to 17:00 record per day.
///
/// Both dates are inclusive. Every record carries `location` as its note.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRecord`] when `end_date` precedes `start_date`.
///
/// # Example
///
/// ```
/// use attendance_ledger::entry::expand_operation;
/// use chrono::{FixedOffset, NaiveDate};
///
/// let tz = FixedOffset::east_opt(3600).unwrap();
/// let start = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 2, 4).unwrap();
///
/// let records = expand_operation(&tz, start, end, "Naples").unwrap();
/// assert_eq!(records.len(), 3);
/// assert!(records.iter().all(|r| r.note == "Naples"));
/// ```
pub fn expand_operation<Tz: TimeZone>(
    tz: &Tz,
    start_date: NaiveDate,
    end_date: NaiveDate,
    location: &str,
) -> EngineResult<Vec<TimeRecord>> {
    if end_date < start_date {
        return Err(EngineError::InvalidRecord {
            record_id: format!("operation {start_date}..{end_date}"),
            message: format!("end date {end_date} is before start date {start_date}"),
        });
    }

    start_date
        .iter_days()
        .take_while(|date| *date <= end_date)
        .map(|date| -> EngineResult<TimeRecord> {
            let id = new_record_id();
            let start = resolve_local(tz, date.and_time(OPERATION_START), &id)?;
            let end = resolve_local(tz, date.and_time(OPERATION_END), &id)?;
            Ok(TimeRecord::new(id, Category::Operation, start, Some(end))?.with_note(location))
        })
        .collect()
}
