//! Grouping of records into local calendar days.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::TimeRecord;

/// Partitions records into buckets keyed by the local date of their start.
///
/// Records starting on the same local day share a bucket even when their UTC
/// dates differ. Only days with at least one record appear. Buckets are
/// ordered by date; record order inside a bucket follows the input.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::group_by_local_day;
/// use attendance_ledger::models::{Category, TimeRecord};
/// use chrono::{FixedOffset, NaiveDate, TimeZone};
///
/// let tz = FixedOffset::west_opt(5 * 3600).unwrap();
/// let morning = tz.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
/// let late = tz.with_ymd_and_hms(2026, 3, 2, 23, 30, 0).unwrap(); // 04:30 UTC next day
///
/// let records = vec![
///     TimeRecord::new("a", Category::Work, morning, None).unwrap(),
///     TimeRecord::new("b", Category::Work, late, None).unwrap(),
/// ];
///
/// let days = group_by_local_day(&records);
/// assert_eq!(days.len(), 1);
/// assert_eq!(days[&NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()].len(), 2);
/// ```
pub fn group_by_local_day<'a, I>(records: I) -> BTreeMap<NaiveDate, Vec<&'a TimeRecord>>
where
    I: IntoIterator<Item = &'a TimeRecord>,
{
    let mut days: BTreeMap<NaiveDate, Vec<&'a TimeRecord>> = BTreeMap::new();
    for record in records {
        days.entry(record.local_date()).or_default().push(record);
    }
    days
}
