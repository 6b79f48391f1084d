//! Derived ledger aggregates.
//!
//! These types are computed fresh on every call and never persisted by the
//! engine.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DayBalance, PresenceSummary};

use super::{AuditTrace, Category, LeaveUnit};

/// Consumed amount per category: days for leave, hours for travel.
///
/// # Example
///
/// ```
/// use attendance_ledger::models::{Category, UsedLeave};
/// use rust_decimal::Decimal;
///
/// let mut used = UsedLeave::default();
/// used.add(Category::STATUTORY_LEAVE, Decimal::ONE);
/// used.add(Category::STATUTORY_LEAVE, Decimal::ONE);
///
/// assert_eq!(used.get(Category::STATUTORY_LEAVE), Decimal::new(2, 0));
/// assert_eq!(used.get(Category::Travel), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsedLeave(BTreeMap<Category, Decimal>);

impl UsedLeave {
    /// Returns the consumed amount for a category, zero if none was recorded.
    pub fn get(&self, category: Category) -> Decimal {
        self.0.get(&category).copied().unwrap_or(Decimal::ZERO)
    }

    /// Adds to the consumed amount for a category.
    pub fn add(&mut self, category: Category, amount: Decimal) {
        *self.0.entry(category).or_insert(Decimal::ZERO) += amount;
    }

    /// Iterates over consumed amounts in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        self.0.iter().map(|(category, amount)| (*category, *amount))
    }

    /// Returns the number of categories with recorded usage.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no usage was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Leave earned by the records themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnedLeave {
    /// Holiday-recovery days earned by working on holidays.
    pub holiday_recovery: u32,
}

impl EarnedLeave {
    /// Returns the amount earned for a category.
    pub fn get(&self, category: Category) -> Decimal {
        if category == Category::HOLIDAY_RECOVERY {
            Decimal::from(self.holiday_recovery)
        } else {
            Decimal::ZERO
        }
    }
}

/// The remaining balance of one leave category.
///
/// `remaining = opening + earned - used`; a negative remaining is a valid
/// over-consumption state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSummaryLine {
    /// The leave category.
    pub category: Category,
    /// The unit amounts are measured in.
    pub unit: LeaveUnit,
    /// The caller's opening allotment.
    pub opening: Decimal,
    /// The amount earned by the records.
    pub earned: Decimal,
    /// The amount consumed by the records.
    pub used: Decimal,
    /// The amount left.
    pub remaining: Decimal,
}

/// The full result of a ledger computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerReport {
    /// The hour bank opening balance taken from the allotments.
    pub opening_hour_bank: Decimal,
    /// The signed hour bank after folding every tracked day.
    pub hour_bank: Decimal,
    /// Consumed amounts per category.
    pub used_leave: UsedLeave,
    /// Earned amounts.
    pub earned_leave: EarnedLeave,
    /// Remaining balance per leave category.
    pub leave_summary: Vec<LeaveSummaryLine>,
    /// Per-day breakdown of the hour bank, ordered by date.
    pub days: Vec<DayBalance>,
    /// Distinct days with work, operation or travel records.
    pub presence: PresenceSummary,
    /// Audit trace of every decision.
    pub audit_trace: AuditTrace,
}
