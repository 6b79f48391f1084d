//! Leave usage aggregation.
//!
//! Leave is consumed in whole days: each leave record counts as exactly one
//! day of its category, whatever its timestamps say. Travel is the exception
//! and is consumed in wall-clock hours.

use rust_decimal::Decimal;

use crate::models::{Category, TimeRecord, UsedLeave, hours_from_seconds};

/// Sums consumed leave per category.
///
/// Work, recovery and operation records are skipped. Travel seconds are
/// totalled before conversion to hours.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::used_leave;
/// use attendance_ledger::models::{Category, TimeRecord};
/// use chrono::{FixedOffset, TimeZone};
/// use rust_decimal::Decimal;
///
/// let tz = FixedOffset::east_opt(3600).unwrap();
/// let records: Vec<TimeRecord> = (12..15)
///     .map(|day| {
///         let start = tz.with_ymd_and_hms(2026, 1, day, 9, 0, 0).unwrap();
///         TimeRecord::new(format!("l{day}"), Category::STATUTORY_LEAVE, start, None).unwrap()
///     })
///     .collect();
///
/// let used = used_leave(&records);
/// assert_eq!(used.get(Category::STATUTORY_LEAVE), Decimal::new(3, 0));
/// ```
pub fn used_leave(records: &[TimeRecord]) -> UsedLeave {
    let mut used = UsedLeave::default();
    let mut travel_seconds: Option<i64> = None;

    for record in records {
        match record.category {
            Category::Work | Category::Recovery | Category::Operation => {}
            Category::Travel => {
                *travel_seconds.get_or_insert(0) += record.duration_seconds();
            }
            Category::LeaveFixed(_) | Category::LeaveOrdinary(_) => {
                used.add(record.category, Decimal::ONE)
            }
        }
    }

    if let Some(seconds) = travel_seconds {
        used.add(Category::Travel, hours_from_seconds(seconds));
    }

    used
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_instant(date_str: &str, time_str: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(&format!("{}T{}+01:00", date_str, time_str)).unwrap()
    }

    fn make_record(category: Category, date: &str, start: &str, end: Option<&str>) -> TimeRecord {
        TimeRecord {
            id: format!("{}_{}", category, date),
            start_time: make_instant(date, start),
            end_time: end.map(|e| make_instant(date, e)),
            category,
            note: String::new(),
        }
    }

    #[test]
    fn test_statutory_leave_counts_one_per_record() {
        let records = vec![
            make_record(Category::STATUTORY_LEAVE, "2026-01-12", "09:00:00", Some("17:30:00")),
            make_record(Category::STATUTORY_LEAVE, "2026-02-03", "09:00:00", Some("09:00:00")),
            make_record(Category::STATUTORY_LEAVE, "2026-03-10", "09:00:00", None),
        ];

        let used = used_leave(&records);
        assert_eq!(used.get(Category::STATUTORY_LEAVE), dec("3"));
        assert_eq!(used.len(), 1);
    }

    #[test]
    fn test_work_recovery_and_operation_are_skipped() {
        let records = vec![
            make_record(Category::Work, "2026-01-12", "08:00:00", Some("16:30:00")),
            make_record(Category::Recovery, "2026-01-13", "09:00:00", Some("09:00:00")),
            make_record(Category::Operation, "2026-01-14", "08:00:00", Some("17:00:00")),
        ];

        assert!(used_leave(&records).is_empty());
    }

    #[test]
    fn test_travel_accumulates_hours() {
        let records = vec![
            make_record(Category::Travel, "2026-01-12", "06:00:00", Some("08:30:00")),
            make_record(Category::Travel, "2026-01-13", "17:00:00", Some("18:15:00")),
            make_record(Category::Travel, "2026-01-14", "06:00:00", None),
        ];

        let used = used_leave(&records);
        assert_eq!(used.get(Category::Travel), dec("3.75"));
    }

    #[test]
    fn test_travel_seconds_are_totalled_before_conversion() {
        let records = vec![
            make_record(Category::Travel, "2026-01-12", "06:00:00", Some("06:00:01")),
            make_record(Category::Travel, "2026-01-13", "06:00:00", Some("06:40:00")),
            make_record(Category::Travel, "2026-01-14", "06:00:00", Some("16:00:00")),
        ];
        let mut reversed = records.clone();
        reversed.reverse();

        let expected = Decimal::new(38401, 0) / Decimal::new(3600, 0);
        assert_eq!(used_leave(&records).get(Category::Travel), expected);
        assert_eq!(used_leave(&reversed).get(Category::Travel), expected);
    }

    #[test]
    fn test_open_travel_record_still_appears_with_zero() {
        let records = vec![make_record(Category::Travel, "2026-01-14", "06:00:00", None)];

        let used = used_leave(&records);
        assert_eq!(used.len(), 1);
        assert_eq!(used.get(Category::Travel), Decimal::ZERO);
    }

    #[test]
    fn test_ordinary_leave_is_counted_per_year() {
        let records = vec![
            make_record(Category::LeaveOrdinary(2025), "2026-01-05", "09:00:00", Some("17:30:00")),
            make_record(Category::LeaveOrdinary(2025), "2026-01-07", "09:00:00", Some("17:30:00")),
            make_record(Category::LeaveOrdinary(2026), "2026-07-20", "09:00:00", Some("17:30:00")),
            make_record(Category::LeaveOrdinary(2031), "2031-07-21", "09:00:00", Some("17:30:00")),
        ];

        let used = used_leave(&records);
        assert_eq!(used.get(Category::LeaveOrdinary(2025)), dec("2"));
        assert_eq!(used.get(Category::LeaveOrdinary(2026)), dec("1"));
        assert_eq!(used.get(Category::LeaveOrdinary(2031)), dec("1"));
    }

    #[test]
    fn test_holiday_recovery_usage_is_counted() {
        let records = vec![make_record(
            Category::HOLIDAY_RECOVERY,
            "2026-01-12",
            "09:00:00",
            Some("17:30:00"),
        )];

        assert_eq!(used_leave(&records).get(Category::HOLIDAY_RECOVERY), dec("1"));
    }
}
