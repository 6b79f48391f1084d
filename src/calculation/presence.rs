//! Presence days.
//!
//! A presence day is a distinct local date holding at least one `work`,
//! `operation` or `travel` record. Leave and recovery records never count.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Category, TimeRecord};

/// Presence days within one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPresence {
    /// The calendar year.
    pub year: i32,
    /// The month, 1 to 12.
    pub month: u32,
    /// Distinct presence dates in the month.
    pub days: usize,
}

/// Presence totals over a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceSummary {
    /// Distinct presence dates overall.
    pub total_days: usize,
    /// Per-month breakdown, ordered by year and month. Months without
    /// presence are omitted.
    pub by_month: Vec<MonthlyPresence>,
}

fn is_presence(category: Category) -> bool {
    match category {
        Category::Work | Category::Operation | Category::Travel => true,
        Category::Recovery | Category::LeaveFixed(_) | Category::LeaveOrdinary(_) => false,
    }
}

/// Returns the distinct local dates with a presence record.
pub fn presence_dates(records: &[TimeRecord]) -> BTreeSet<NaiveDate> {
    records
        .iter()
        .filter(|r| is_presence(r.category))
        .map(TimeRecord::local_date)
        .collect()
}

/// Counts distinct presence dates.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::presence_days;
/// use attendance_ledger::models::{Category, TimeRecord};
/// use chrono::{FixedOffset, TimeZone};
///
/// let tz = FixedOffset::east_opt(3600).unwrap();
/// let morning = tz.with_ymd_and_hms(2026, 1, 12, 8, 0, 0).unwrap();
/// let afternoon = tz.with_ymd_and_hms(2026, 1, 12, 14, 0, 0).unwrap();
/// let leave = tz.with_ymd_and_hms(2026, 1, 13, 9, 0, 0).unwrap();
///
/// let records = vec![
///     TimeRecord::new("a", Category::Work, morning, None).unwrap(),
///     TimeRecord::new("b", Category::Travel, afternoon, None).unwrap(),
///     TimeRecord::new("c", Category::STATUTORY_LEAVE, leave, None).unwrap(),
/// ];
/// assert_eq!(presence_days(&records), 1);
/// ```
pub fn presence_days(records: &[TimeRecord]) -> usize {
    presence_dates(records).len()
}

/// Counts distinct presence dates per calendar month.
pub fn monthly_presence(records: &[TimeRecord]) -> Vec<MonthlyPresence> {
    count_by_month(&presence_dates(records))
}

/// Builds the overall and per-month presence counts.
pub fn presence_summary(records: &[TimeRecord]) -> PresenceSummary {
    let dates = presence_dates(records);
    PresenceSummary {
        total_days: dates.len(),
        by_month: count_by_month(&dates),
    }
}

fn count_by_month(dates: &BTreeSet<NaiveDate>) -> Vec<MonthlyPresence> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for date in dates {
        *months.entry((date.year(), date.month())).or_insert(0) += 1;
    }

    months
        .into_iter()
        .map(|((year, month), days)| MonthlyPresence { year, month, days })
        .collect()
}
