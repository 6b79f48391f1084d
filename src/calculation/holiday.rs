//! National holiday lookup.
//!
//! Only fixed-date holidays are observed; moveable feasts are not part of the
//! calendar. Lookups compare day and month and ignore the year.

use chrono::{Datelike, NaiveDate};

/// Fixed-date national holidays as (month, day, name).
const FIXED_HOLIDAYS: [(u32, u32, &str); 10] = [
    (1, 1, "New Year's Day"),
    (1, 6, "Epiphany"),
    (4, 25, "Liberation Day"),
    (5, 1, "Labour Day"),
    (6, 2, "Republic Day"),
    (8, 15, "Assumption Day"),
    (11, 1, "All Saints' Day"),
    (12, 8, "Immaculate Conception"),
    (12, 25, "Christmas Day"),
    (12, 26, "St. Stephen's Day"),
];

/// Returns the name of the holiday falling on the given local date, if any.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::holiday_name;
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2031, 12, 25).unwrap();
/// assert_eq!(holiday_name(christmas), Some("Christmas Day"));
/// ```
pub fn holiday_name(date: NaiveDate) -> Option<&'static str> {
    let (month, day) = (date.month(), date.day());
    FIXED_HOLIDAYS
        .iter()
        .find(|(m, d, _)| *m == month && *d == day)
        .map(|(_, _, name)| *name)
}

/// Returns true if the given local date is a national holiday in any year.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::is_holiday;
/// use chrono::NaiveDate;
///
/// assert!(is_holiday(NaiveDate::from_ymd_opt(2026, 6, 2).unwrap()));
/// assert!(!is_holiday(NaiveDate::from_ymd_opt(2026, 6, 3).unwrap()));
/// ```
pub fn is_holiday(date: NaiveDate) -> bool {
    holiday_name(date).is_some()
}
