//! Core data models for the Attendance Ledger Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod category;
mod ledger;
mod record;
mod salary;
mod settings;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use category::{Category, FixedLeave, LeaveUnit};
pub use ledger::{EarnedLeave, LeaveSummaryLine, LedgerReport, UsedLeave};
pub use record::{TimeRecord, hours_from_seconds};
pub use salary::SalaryEntry;
pub use settings::{
    DEFAULT_ORDINARY_LEAVE_DAYS, LeaveBalances, ScheduleSettings, UserSettings,
};
