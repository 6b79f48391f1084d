//! Day kind detection and target hour resolution.
//!
//! This module determines the kind of a calendar day (holiday, weekend,
//! Friday, Monday–Thursday) and resolves the hours the schedule expects on
//! that day.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ScheduleSettings;

use super::is_holiday;

/// A value that identifies a local calendar day.
///
/// Bare dates are taken as they are, wall-clock datetimes by their date, and
/// zoned instants by their date in their own offset. No value is ever moved
/// through UTC to find its day.
pub trait LocalDay {
    /// Returns the local calendar date.
    fn local_date(&self) -> NaiveDate;
}

impl LocalDay for NaiveDate {
    fn local_date(&self) -> NaiveDate {
        *self
    }
}

impl LocalDay for NaiveDateTime {
    fn local_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> LocalDay for DateTime<Tz> {
    fn local_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: LocalDay + ?Sized> LocalDay for &T {
    fn local_date(&self) -> NaiveDate {
        (**self).local_date()
    }
}

/// The kind of a calendar day for target hour purposes.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::DayKind;
///
/// let kind = DayKind::Holiday;
/// assert_eq!(format!("{}", kind), "Holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A national holiday, whatever its weekday.
    Holiday,
    /// Saturday or Sunday.
    Weekend,
    /// Friday.
    Friday,
    /// Monday through Thursday.
    MonThu,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Holiday => write!(f, "Holiday"),
            DayKind::Weekend => write!(f, "Weekend"),
            DayKind::Friday => write!(f, "Friday"),
            DayKind::MonThu => write!(f, "Mon-Thu"),
        }
    }
}

impl DayKind {
    /// Returns the target the schedule sets for this kind of day.
    pub fn target(self, schedule: &ScheduleSettings) -> Decimal {
        match self {
            DayKind::Holiday | DayKind::Weekend => schedule.sat_sun,
            DayKind::Friday => schedule.fri,
            DayKind::MonThu => schedule.mon_thu,
        }
    }
}

/// Determines the kind of a local calendar day.
///
/// The holiday check precedes the weekday check, so a holiday on a weekday
/// is a [`DayKind::Holiday`].
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::{day_kind, DayKind};
/// use chrono::NaiveDate;
///
/// // 2026-06-02 is a Tuesday and Republic Day
/// assert_eq!(day_kind(NaiveDate::from_ymd_opt(2026, 6, 2).unwrap()), DayKind::Holiday);
/// // 2026-01-16 is a Friday
/// assert_eq!(day_kind(NaiveDate::from_ymd_opt(2026, 1, 16).unwrap()), DayKind::Friday);
/// ```
pub fn day_kind<D: LocalDay>(day: D) -> DayKind {
    let date = day.local_date();
    if is_holiday(date) {
        return DayKind::Holiday;
    }
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayKind::Weekend,
        Weekday::Fri => DayKind::Friday,
        _ => DayKind::MonThu,
    }
}

/// Returns the expected working hours for a local calendar day.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::target_hours;
/// use attendance_ledger::models::ScheduleSettings;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let schedule = ScheduleSettings::default();
///
/// // 2026-01-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(target_hours(monday, &schedule), Decimal::new(85, 1));
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(target_hours(saturday, &schedule), Decimal::ZERO);
/// ```
pub fn target_hours<D: LocalDay>(day: D, schedule: &ScheduleSettings) -> Decimal {
    day_kind(day).target(schedule)
}
