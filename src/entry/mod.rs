//! Data entry helpers.
//!
//! Builders that turn calendar-level input into validated records, and the
//! retention rule applied to stored history.

mod builders;
mod retention;

pub use builders::{
    LEAVE_START, OPERATION_END, OPERATION_START, expand_operation, leave_record, recovery_marker,
    work_record,
};
pub use retention::{DEFAULT_RETENTION_YEARS, retain_recent};
