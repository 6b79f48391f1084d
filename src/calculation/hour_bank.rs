//! Hour bank accumulation.
//!
//! This module folds per-day record buckets into a signed running total of
//! overtime (positive) and deficit (negative) hours. Each day gets exactly one
//! classification, chosen by precedence:
//!
//! 1. any `operation` or full-day leave record: the day is neutral
//! 2. otherwise any `recovery` record: the day debits its full target
//! 3. otherwise the credited work and travel hours minus the target

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{AuditStep, Category, ScheduleSettings, TimeRecord, hours_from_seconds};

use super::{DayKind, day_kind, group_by_local_day, holiday_name};

/// How a day contributes to the hour bank.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::DayClassification;
///
/// let classification = DayClassification::Neutral;
/// assert_eq!(format!("{}", classification), "Neutral");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClassification {
    /// Operation duty or full-day leave: contributes nothing.
    Neutral,
    /// Compensatory absence: debits the full target.
    Recovery,
    /// Ordinary day: credited hours minus target.
    Ordinary,
}

impl std::fmt::Display for DayClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClassification::Neutral => write!(f, "Neutral"),
            DayClassification::Recovery => write!(f, "Recovery"),
            DayClassification::Ordinary => write!(f, "Ordinary"),
        }
    }
}

/// The hour bank contribution of one local calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBalance {
    /// The local calendar date.
    pub date: NaiveDate,
    /// The kind of day, which selects the target.
    pub day_kind: DayKind,
    /// The hours the schedule expects on this day.
    pub target_hours: Decimal,
    /// Recorded work and travel hours with an end time.
    pub credited_hours: Decimal,
    /// How the day was classified.
    pub classification: DayClassification,
    /// The signed change to the hour bank.
    pub delta: Decimal,
    /// The number of records that started on this day.
    pub record_count: usize,
}

/// Classifies a day from the records that started on it.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::{classify_day, DayClassification};
/// use attendance_ledger::models::{Category, TimeRecord};
/// use chrono::{FixedOffset, TimeZone};
///
/// let tz = FixedOffset::east_opt(3600).unwrap();
/// let start = tz.with_ymd_and_hms(2026, 1, 12, 8, 0, 0).unwrap();
/// let end = tz.with_ymd_and_hms(2026, 1, 12, 16, 0, 0).unwrap();
///
/// let work = TimeRecord::new("w", Category::Work, start, Some(end)).unwrap();
/// let operation = TimeRecord::new("o", Category::Operation, start, Some(end)).unwrap();
///
/// assert_eq!(classify_day([&work]), DayClassification::Ordinary);
/// assert_eq!(classify_day([&work, &operation]), DayClassification::Neutral);
/// ```
pub fn classify_day<'a, I>(records: I) -> DayClassification
where
    I: IntoIterator<Item = &'a TimeRecord>,
{
    let mut neutral = false;
    let mut recovery = false;

    for record in records {
        match record.category {
            Category::Operation | Category::LeaveFixed(_) | Category::LeaveOrdinary(_) => {
                neutral = true
            }
            Category::Recovery => recovery = true,
            Category::Work | Category::Travel => {}
        }
    }

    if neutral {
        DayClassification::Neutral
    } else if recovery {
        DayClassification::Recovery
    } else {
        DayClassification::Ordinary
    }
}

/// Sums the duration of work and travel records that have an end time.
///
/// Seconds are added first and converted once, so the result does not
/// depend on record order.
pub fn credited_hours<'a, I>(records: I) -> Decimal
where
    I: IntoIterator<Item = &'a TimeRecord>,
{
    let seconds: i64 = records
        .into_iter()
        .filter(|r| r.category.is_credited())
        .map(TimeRecord::duration_seconds)
        .sum();
    hours_from_seconds(seconds)
}

/// Computes the hour bank contribution of every tracked day.
///
/// Days without records never appear. The result is ordered by date.
pub fn compute_day_balances(records: &[TimeRecord], schedule: &ScheduleSettings) -> Vec<DayBalance> {
    group_by_local_day(records)
        .into_iter()
        .map(|(date, day_records)| {
            let kind = day_kind(date);
            let target = kind.target(schedule);
            let credited = credited_hours(day_records.iter().copied());
            let classification = classify_day(day_records.iter().copied());

            let delta = match classification {
                DayClassification::Neutral => Decimal::ZERO,
                DayClassification::Recovery => -target,
                DayClassification::Ordinary => credited - target,
            };

            debug!(
                date = %date,
                day_kind = %kind,
                classification = %classification,
                target = %target,
                credited = %credited,
                delta = %delta,
                "Classified day"
            );

            DayBalance {
                date,
                day_kind: kind,
                target_hours: target,
                credited_hours: credited,
                classification,
                delta,
                record_count: day_records.len(),
            }
        })
        .collect()
}

/// Computes the hour bank: the opening balance plus every tracked day's delta.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::compute_hour_bank;
/// use attendance_ledger::models::{Category, ScheduleSettings, TimeRecord};
/// use chrono::{FixedOffset, TimeZone};
/// use rust_decimal::Decimal;
///
/// let tz = FixedOffset::east_opt(3600).unwrap();
/// // Monday 2026-01-12, 08:00 to 18:00 against an 8.5 hour target
/// let start = tz.with_ymd_and_hms(2026, 1, 12, 8, 0, 0).unwrap();
/// let end = tz.with_ymd_and_hms(2026, 1, 12, 18, 0, 0).unwrap();
/// let records = vec![TimeRecord::new("w", Category::Work, start, Some(end)).unwrap()];
///
/// let bank = compute_hour_bank(&records, &ScheduleSettings::default(), Decimal::new(2, 0));
/// assert_eq!(bank, Decimal::new(35, 1)); // 2 + (10 - 8.5)
/// ```
pub fn compute_hour_bank(
    records: &[TimeRecord],
    schedule: &ScheduleSettings,
    opening: Decimal,
) -> Decimal {
    compute_day_balances(records, schedule)
        .iter()
        .fold(opening, |balance, day| balance + day.delta)
}

/// Builds the audit step explaining one day's contribution.
pub fn day_balance_audit_step(day: &DayBalance, step_number: u32) -> AuditStep {
    let day_label = match (day.day_kind, holiday_name(day.date)) {
        (DayKind::Holiday, Some(name)) => format!("{} ({})", day.date, name),
        _ => format!("{} ({})", day.date, day.day_kind),
    };

    let reasoning = match day.classification {
        DayClassification::Neutral => format!(
            "{} has operation or full-day leave records, day is neutral",
            day_label
        ),
        DayClassification::Recovery => format!(
            "{} is a recovery day, debiting the full {} hour target",
            day_label,
            day.target_hours.normalize()
        ),
        DayClassification::Ordinary => format!(
            "{} credited {} hours against a {} hour target",
            day_label,
            day.credited_hours.normalize(),
            day.target_hours.normalize()
        ),
    };

    AuditStep {
        step_number,
        rule_id: "daily_balance".to_string(),
        rule_name: "Daily Balance".to_string(),
        input: serde_json::json!({
            "date": day.date.to_string(),
            "day_kind": day.day_kind,
            "target_hours": day.target_hours.normalize().to_string(),
            "credited_hours": day.credited_hours.normalize().to_string(),
            "record_count": day.record_count
        }),
        output: serde_json::json!({
            "classification": day.classification,
            "delta": day.delta.normalize().to_string()
        }),
        reasoning,
    }
}
