//! Calculation logic for the Attendance Ledger Engine.
//!
//! This module contains the pure accounting functions: holiday lookup, target
//! hour resolution, grouping of records by local day, the hour bank fold,
//! leave usage and holiday-recovery accrual, remaining leave balances, presence
//! days, yearly payment totals and the daily recorded-versus-target overview.

mod accrual;
mod grouping;
mod holiday;
mod hour_bank;
mod leave_usage;
mod overview;
mod presence;
mod salary;
mod summary;
mod target_hours;

pub use accrual::{earned_holiday_recovery, earned_leave, holiday_work_dates};
pub use grouping::group_by_local_day;
pub use holiday::{holiday_name, is_holiday};
pub use hour_bank::{
    DayBalance, DayClassification, classify_day, compute_day_balances, compute_hour_bank,
    credited_hours, day_balance_audit_step,
};
pub use leave_usage::used_leave;
pub use overview::{DailyOverview, daily_overview};
pub use presence::{
    MonthlyPresence, PresenceSummary, monthly_presence, presence_dates, presence_days,
    presence_summary,
};
pub use salary::{salary_totals_by_year, yearly_salary_total};
pub use summary::{build_ledger, remaining_leave};
pub use target_hours::{DayKind, LocalDay, day_kind, target_hours};
