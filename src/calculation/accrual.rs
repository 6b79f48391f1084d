//! Holiday-recovery accrual.
//!
//! Working on a national holiday earns one holiday-recovery day per distinct
//! local date, however many work records that date holds.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::{Category, EarnedLeave, TimeRecord};

use super::is_holiday;

/// Returns the distinct local holiday dates on which work was recorded.
pub fn holiday_work_dates(records: &[TimeRecord]) -> BTreeSet<NaiveDate> {
    records
        .iter()
        .filter(|r| r.category == Category::Work)
        .map(TimeRecord::local_date)
        .filter(|date| is_holiday(*date))
        .collect()
}

/// Counts holiday-recovery days earned by working on holidays.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::earned_holiday_recovery;
/// use attendance_ledger::models::{Category, TimeRecord};
/// use chrono::{FixedOffset, TimeZone};
///
/// let tz = FixedOffset::east_opt(3600).unwrap();
/// let morning = tz.with_ymd_and_hms(2026, 12, 25, 8, 0, 0).unwrap();
/// let evening = tz.with_ymd_and_hms(2026, 12, 25, 18, 0, 0).unwrap();
///
/// let records = vec![
///     TimeRecord::new("a", Category::Work, morning, None).unwrap(),
///     TimeRecord::new("b", Category::Work, evening, None).unwrap(),
/// ];
/// assert_eq!(earned_holiday_recovery(&records), 1);
/// ```
pub fn earned_holiday_recovery(records: &[TimeRecord]) -> u32 {
    holiday_work_dates(records).len() as u32
}

/// Collects every kind of leave earned by the records.
pub fn earned_leave(records: &[TimeRecord]) -> EarnedLeave {
    EarnedLeave {
        holiday_recovery: earned_holiday_recovery(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    fn make_record(id: &str, category: Category, start: &str) -> TimeRecord {
        TimeRecord {
            id: id.to_string(),
            start_time: DateTime::<FixedOffset>::parse_from_rfc3339(start).unwrap(),
            end_time: None,
            category,
            note: String::new(),
        }
    }

    #[test]
    fn test_no_records_earn_nothing() {
        assert_eq!(earned_holiday_recovery(&[]), 0);
        assert_eq!(earned_leave(&[]), EarnedLeave::default());
    }

    #[test]
    fn test_two_work_records_on_same_holiday_count_once() {
        let records = vec![
            make_record("a", Category::Work, "2026-04-25T08:00:00+02:00"),
            make_record("b", Category::Work, "2026-04-25T14:00:00+02:00"),
        ];
        assert_eq!(earned_holiday_recovery(&records), 1);
    }

    #[test]
    fn test_two_different_holidays_count_twice() {
        let records = vec![
            make_record("a", Category::Work, "2026-04-25T08:00:00+02:00"),
            make_record("b", Category::Work, "2026-05-01T08:00:00+02:00"),
        ];
        assert_eq!(earned_holiday_recovery(&records), 2);
    }

    #[test]
    fn test_same_holiday_in_different_years_counts_per_date() {
        let records = vec![
            make_record("a", Category::Work, "2025-12-25T08:00:00+01:00"),
            make_record("b", Category::Work, "2026-12-25T08:00:00+01:00"),
        ];
        assert_eq!(earned_holiday_recovery(&records), 2);
    }

    #[test]
    fn test_only_work_records_earn() {
        let records = vec![
            make_record("t", Category::Travel, "2026-04-25T08:00:00+02:00"),
            make_record("o", Category::Operation, "2026-05-01T08:00:00+02:00"),
            make_record("r", Category::Recovery, "2026-06-02T09:00:00+02:00"),
        ];
        assert_eq!(earned_holiday_recovery(&records), 0);
    }

    #[test]
    fn test_work_on_ordinary_day_earns_nothing() {
        let records = vec![make_record("a", Category::Work, "2026-01-12T08:00:00+01:00")];
        assert_eq!(earned_holiday_recovery(&records), 0);
    }

    #[test]
    fn test_holiday_is_judged_by_local_date() {
        // 23:30 on 24 Dec in UTC-5 is 25 Dec in UTC, but not locally
        let before = make_record("a", Category::Work, "2026-12-24T23:30:00-05:00");
        assert_eq!(earned_holiday_recovery(&[before]), 0);

        // 00:30 on 25 Dec in UTC+2 is 24 Dec in UTC, but 25 Dec locally
        let after = make_record("b", Category::Work, "2026-12-25T00:30:00+02:00");
        assert_eq!(earned_holiday_recovery(&[after]), 1);
    }

    #[test]
    fn test_holiday_work_dates_are_distinct_and_sorted() {
        let records = vec![
            make_record("a", Category::Work, "2026-05-01T08:00:00+02:00"),
            make_record("b", Category::Work, "2026-04-25T08:00:00+02:00"),
            make_record("c", Category::Work, "2026-05-01T15:00:00+02:00"),
        ];

        let dates: Vec<NaiveDate> = holiday_work_dates(&records).into_iter().collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2026, 4, 25).unwrap(),
                NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            ]
        );
    }
}
