//! Ledger summary.
//!
//! Combines the hour bank, leave usage and accrual into a single
//! [`LedgerReport`] with remaining balances and an audit trace.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Category, EarnedLeave, LeaveBalances, LeaveSummaryLine,
    LedgerReport, TimeRecord, UsedLeave, UserSettings,
};

use super::{
    compute_day_balances, day_balance_audit_step, earned_leave, presence_summary, used_leave,
};

/// Computes the remaining balance of every leave category.
///
/// A line is produced for each leave category or `travel` that has an
/// allotment or recorded usage, and for holiday-recovery when any was earned.
/// Lines are ordered by category. A negative `remaining` means the category
/// was consumed beyond its allotment; that is a valid state.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::remaining_leave;
/// use attendance_ledger::models::{Category, EarnedLeave, LeaveBalances, UsedLeave};
/// use rust_decimal::Decimal;
///
/// let mut balances = LeaveBalances::new();
/// balances.set(Category::STATUTORY_LEAVE, Decimal::new(2, 0));
///
/// let mut used = UsedLeave::default();
/// used.add(Category::STATUTORY_LEAVE, Decimal::new(3, 0));
///
/// let lines = remaining_leave(&balances, &used, &EarnedLeave::default());
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].remaining, Decimal::new(-1, 0));
/// ```
pub fn remaining_leave(
    balances: &LeaveBalances,
    used: &UsedLeave,
    earned: &EarnedLeave,
) -> Vec<LeaveSummaryLine> {
    let mut categories: BTreeSet<Category> = balances
        .iter()
        .map(|(category, _)| category)
        .chain(used.iter().map(|(category, _)| category))
        .filter(Category::is_leave)
        .collect();

    if earned.holiday_recovery > 0 {
        categories.insert(Category::HOLIDAY_RECOVERY);
    }

    categories
        .into_iter()
        .map(|category| {
            let opening = balances.get(category);
            let credit = earned.get(category);
            let consumed = used.get(category);
            LeaveSummaryLine {
                category,
                unit: category.unit(),
                opening,
                earned: credit,
                used: consumed,
                remaining: opening + credit - consumed,
            }
        })
        .collect()
}

/// Builds the full ledger report for a set of records.
///
/// The hour bank opens at the `recovery` allotment of the settings. Every
/// tracked day and every leave line adds an audit step; overdrawn leave adds
/// a `LEAVE_OVERDRAWN` warning. Presence days are counted alongside.
pub fn build_ledger(records: &[TimeRecord], settings: &UserSettings) -> LedgerReport {
    let mut audit_trace = AuditTrace::default();

    let opening_hour_bank = settings.leave_balances.recovery_opening();
    let days = compute_day_balances(records, &settings.schedule);

    let mut hour_bank = opening_hour_bank;
    for day in &days {
        hour_bank += day.delta;
        audit_trace
            .steps
            .push(day_balance_audit_step(day, audit_trace.next_step_number()));
    }

    audit_trace.steps.push(AuditStep {
        step_number: audit_trace.next_step_number(),
        rule_id: "hour_bank".to_string(),
        rule_name: "Hour Bank".to_string(),
        input: serde_json::json!({
            "opening": opening_hour_bank.normalize().to_string(),
            "tracked_days": days.len()
        }),
        output: serde_json::json!({
            "hour_bank": hour_bank.normalize().to_string()
        }),
        reasoning: format!(
            "Opening balance {} plus {} tracked day(s) gives {} hours",
            opening_hour_bank.normalize(),
            days.len(),
            hour_bank.normalize()
        ),
    });

    let used = used_leave(records);
    let earned = earned_leave(records);
    let leave_summary = remaining_leave(&settings.leave_balances, &used, &earned);

    for line in &leave_summary {
        audit_trace.steps.push(AuditStep {
            step_number: audit_trace.next_step_number(),
            rule_id: "leave_balance".to_string(),
            rule_name: "Leave Balance".to_string(),
            input: serde_json::json!({
                "category": line.category,
                "unit": line.unit,
                "opening": line.opening.normalize().to_string(),
                "earned": line.earned.normalize().to_string(),
                "used": line.used.normalize().to_string()
            }),
            output: serde_json::json!({
                "remaining": line.remaining.normalize().to_string()
            }),
            reasoning: format!(
                "{}: {} opening + {} earned - {} used = {} remaining",
                line.category,
                line.opening.normalize(),
                line.earned.normalize(),
                line.used.normalize(),
                line.remaining.normalize()
            ),
        });

        if line.remaining < Decimal::ZERO {
            warn!(
                category = %line.category,
                remaining = %line.remaining,
                "Leave consumed beyond allotment"
            );
            audit_trace.warnings.push(AuditWarning {
                code: "LEAVE_OVERDRAWN".to_string(),
                message: format!(
                    "{} is overdrawn by {} {}",
                    line.category,
                    (-line.remaining).normalize(),
                    line.unit
                ),
                severity: "medium".to_string(),
            });
        }
    }

    let presence = presence_summary(records);

    info!(
        records = records.len(),
        tracked_days = days.len(),
        presence_days = presence.total_days,
        hour_bank = %hour_bank,
        "Ledger built"
    );

    LedgerReport {
        opening_hour_bank,
        hour_bank,
        used_leave: used,
        earned_leave: earned,
        leave_summary,
        days,
        presence,
        audit_trace,
    }
}
