//! Record categories.
//!
//! Categories form a closed set of structural variants. Ordinary leave is
//! year-scoped, so its variant carries the year and any `ordinary-<year>` tag
//! is accepted without an enumeration of years.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Leave categories that are not scoped to a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FixedLeave {
    /// Statutory leave, granted in whole days.
    Statutory,
    /// Holiday-recovery credit, consumable and earnable by working on holidays.
    HolidayRecovery,
}

/// The unit an amount of a category is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveUnit {
    /// Whole days.
    Days,
    /// Wall-clock hours.
    Hours,
}

impl fmt::Display for LeaveUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveUnit::Days => write!(f, "days"),
            LeaveUnit::Hours => write!(f, "hours"),
        }
    }
}

/// The category of a time record.
///
/// The string form is the record's tag. Legacy tags (`com_log`, `rec_comp`,
/// `lic_937`, `rec_fest`, `ord_<year>`) are accepted when parsing and always
/// written back in canonical form.
///
/// # Example
///
/// ```
/// use attendance_ledger::models::{Category, FixedLeave};
///
/// let ordinary: Category = "ordinary-2025".parse().unwrap();
/// assert_eq!(ordinary, Category::LeaveOrdinary(2025));
///
/// let statutory: Category = "lic_937".parse().unwrap();
/// assert_eq!(statutory, Category::LeaveFixed(FixedLeave::Statutory));
/// assert_eq!(statutory.to_string(), "statutory-leave");
///
/// assert!("sabbatical".parse::<Category>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    /// Ordinary labour, credited to the hour bank.
    Work,
    /// Business-travel hours, credited like work and tracked against an hour quota.
    Travel,
    /// Operational duty, neutral to the hour bank.
    Operation,
    /// Compensatory absence debiting a full day's target from the hour bank.
    Recovery,
    /// A full-day leave category without a year scope.
    LeaveFixed(FixedLeave),
    /// Ordinary vacation leave for the given year.
    LeaveOrdinary(i32),
}

const ORDINARY_PREFIX: &str = "ordinary-";
const LEGACY_ORDINARY_PREFIX: &str = "ord_";

impl Category {
    /// Statutory leave.
    pub const STATUTORY_LEAVE: Category = Category::LeaveFixed(FixedLeave::Statutory);
    /// Holiday-recovery credit.
    pub const HOLIDAY_RECOVERY: Category = Category::LeaveFixed(FixedLeave::HolidayRecovery);

    /// Returns true for categories that occupy a whole day as leave.
    pub fn is_full_day_leave(&self) -> bool {
        matches!(self, Category::LeaveFixed(_) | Category::LeaveOrdinary(_))
    }

    /// Returns true for categories whose recorded duration is credited to the hour bank.
    pub fn is_credited(&self) -> bool {
        matches!(self, Category::Work | Category::Travel)
    }

    /// Returns true for categories counted by the leave usage aggregator.
    pub fn is_leave(&self) -> bool {
        self.is_full_day_leave() || *self == Category::Travel
    }

    /// Returns the unit allotments of this category are measured in.
    pub fn unit(&self) -> LeaveUnit {
        match self {
            Category::Travel | Category::Recovery | Category::Work | Category::Operation => {
                LeaveUnit::Hours
            }
            Category::LeaveFixed(_) | Category::LeaveOrdinary(_) => LeaveUnit::Days,
        }
    }

    /// Returns the year of an ordinary-leave category.
    pub fn ordinary_year(&self) -> Option<i32> {
        match self {
            Category::LeaveOrdinary(year) => Some(*year),
            _ => None,
        }
    }
}

fn parse_ordinary_year(tag: &str) -> Option<i32> {
    let digits = tag
        .strip_prefix(ORDINARY_PREFIX)
        .or_else(|| tag.strip_prefix(LEGACY_ORDINARY_PREFIX))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl FromStr for Category {
    type Err = EngineError;

    fn from_str(tag: &str) -> EngineResult<Self> {
        match tag {
            "work" => Ok(Category::Work),
            "travel" | "com_log" => Ok(Category::Travel),
            "operation" => Ok(Category::Operation),
            "recovery" | "rec_comp" => Ok(Category::Recovery),
            "statutory-leave" | "lic_937" => Ok(Category::STATUTORY_LEAVE),
            "holiday-recovery" | "rec_fest" => Ok(Category::HOLIDAY_RECOVERY),
            _ => parse_ordinary_year(tag)
                .map(Category::LeaveOrdinary)
                .ok_or_else(|| EngineError::UnknownCategory {
                    tag: tag.to_string(),
                }),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = EngineError;

    fn try_from(tag: String) -> EngineResult<Self> {
        tag.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Work => write!(f, "work"),
            Category::Travel => write!(f, "travel"),
            Category::Operation => write!(f, "operation"),
            Category::Recovery => write!(f, "recovery"),
            Category::LeaveFixed(FixedLeave::Statutory) => write!(f, "statutory-leave"),
            Category::LeaveFixed(FixedLeave::HolidayRecovery) => write!(f, "holiday-recovery"),
            Category::LeaveOrdinary(year) => write!(f, "{ORDINARY_PREFIX}{year}"),
        }
    }
}
