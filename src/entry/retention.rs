//! Retention of historical records.

use chrono::{DateTime, Months, TimeZone, Utc};
use tracing::debug;

use crate::models::TimeRecord;

/// Number of years of records kept by default.
pub const DEFAULT_RETENTION_YEARS: u32 = 5;

/// Keeps the records that started no earlier than `years` before `now`.
///
/// Records with a start exactly on the cutoff are kept.
///
/// # Example
///
/// ```
/// use attendance_ledger::entry::{retain_recent, DEFAULT_RETENTION_YEARS};
/// use attendance_ledger::models::{Category, TimeRecord};
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
/// let old = Utc.with_ymd_and_hms(2020, 3, 2, 8, 0, 0).unwrap();
/// let recent = Utc.with_ymd_and_hms(2025, 3, 2, 8, 0, 0).unwrap();
///
/// let records = vec![
///     TimeRecord::new("old", Category::Work, old, None).unwrap(),
///     TimeRecord::new("recent", Category::Work, recent, None).unwrap(),
/// ];
///
/// let kept = retain_recent(records, now, DEFAULT_RETENTION_YEARS);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].id, "recent");
/// ```
pub fn retain_recent<Tz: TimeZone>(
    records: Vec<TimeRecord>,
    now: DateTime<Tz>,
    years: u32,
) -> Vec<TimeRecord> {
    let Some(cutoff) = now
        .with_timezone(&Utc)
        .checked_sub_months(Months::new(years.saturating_mul(12)))
    else {
        return records;
    };

    let before = records.len();
    let kept: Vec<TimeRecord> = records
        .into_iter()
        .filter(|r| r.start_time.with_timezone(&Utc) >= cutoff)
        .collect();

    debug!(
        cutoff = %cutoff,
        dropped = before - kept.len(),
        "Applied record retention"
    );
    kept
}
