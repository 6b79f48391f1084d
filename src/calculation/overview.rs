//! Recorded hours against target over a date range.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ScheduleSettings, TimeRecord, hours_from_seconds};

use super::{group_by_local_day, target_hours};

/// Recorded and expected hours for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOverview {
    /// The local calendar date.
    pub date: NaiveDate,
    /// Total duration of the day's terminated records, whatever their category.
    pub recorded_hours: Decimal,
    /// The hours the schedule expects on this day.
    pub target_hours: Decimal,
    /// `recorded_hours - target_hours`.
    pub difference: Decimal,
}

/// Lists every day from `start` to `end` inclusive with its recorded hours
/// and target.
///
/// Untracked days appear with zero recorded hours. This is a display aid and
/// does not follow the hour bank's classification rules. Returns an empty
/// list when `end` precedes `start`.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::daily_overview;
/// use attendance_ledger::models::ScheduleSettings;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
///
/// let week = daily_overview(&[], &ScheduleSettings::default(), start, end);
/// assert_eq!(week.len(), 7);
/// ```
pub fn daily_overview(
    records: &[TimeRecord],
    schedule: &ScheduleSettings,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DailyOverview> {
    let days = group_by_local_day(records.iter().filter(|r| r.end_time.is_some()));

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| {
            let recorded = days
                .get(&date)
                .map(|day| hours_from_seconds(day.iter().map(|r| r.duration_seconds()).sum()))
                .unwrap_or(Decimal::ZERO);
            let target = target_hours(date, schedule);
            DailyOverview {
                date,
                recorded_hours: recorded,
                target_hours: target,
                difference: recorded - target,
            }
        })
        .collect()
}
