//! HTTP API module for the Attendance Ledger Engine.
//!
//! This module provides the REST API endpoints for computing a ledger from
//! time records and for resolving the target hours of a date.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{LedgerRequest, RecordRequest, TargetHoursRequest};
pub use response::{ApiError, LedgerResponse, TargetHoursResponse};
pub use state::AppState;
