//! Attendance Ledger Engine
//!
//! This crate derives an overtime/undertime hour bank, per-category leave
//! consumption and holiday-recovery accrual from a set of time-tracking
//! records and a weekly target schedule.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod entry;
pub mod error;
pub mod models;
