//! Cash payment entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment received on a date, tallied per calendar year.
///
/// Payments are independent of time records and never touch the hour bank
/// or leave balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The date the payment was received.
    pub date: NaiveDate,
    /// The amount received.
    pub amount: Decimal,
    /// Free text, e.g. "Bonus".
    #[serde(default)]
    pub note: String,
}
