//! Schedule and leave allotment settings.
//!
//! These structures are owned by the caller; the engine only reads them,
//! apart from [`LeaveBalances::reconcile`] which the caller invokes explicitly.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{Category, UsedLeave};

/// Default yearly allotment of ordinary leave, in days.
pub const DEFAULT_ORDINARY_LEAVE_DAYS: Decimal = Decimal::from_parts(39, 0, 0, false, 0);

/// Weekly target schedule, in hours per day.
///
/// # Example
///
/// ```
/// use attendance_ledger::models::ScheduleSettings;
/// use rust_decimal::Decimal;
///
/// let schedule = ScheduleSettings::default();
/// assert_eq!(schedule.mon_thu, Decimal::new(85, 1));
/// assert_eq!(schedule.fri, Decimal::new(4, 0));
/// assert_eq!(schedule.sat_sun, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    /// Target hours for Monday through Thursday.
    #[serde(alias = "monThu")]
    pub mon_thu: Decimal,
    /// Target hours for Friday.
    pub fri: Decimal,
    /// Target hours for Saturday, Sunday and holidays.
    #[serde(alias = "satSun")]
    pub sat_sun: Decimal,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            mon_thu: Decimal::new(85, 1),
            fri: Decimal::new(4, 0),
            sat_sun: Decimal::ZERO,
        }
    }
}

impl ScheduleSettings {
    /// Checks that no target is negative.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("mon_thu", self.mon_thu),
            ("fri", self.fri),
            ("sat_sun", self.sat_sun),
        ] {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::InvalidSchedule {
                    field: field.to_string(),
                    message: format!("must not be negative, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Opening allotments per category.
///
/// Leave categories hold days, `travel` holds hours and `recovery` holds the
/// opening balance of the hour bank. Missing categories read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaveBalances(BTreeMap<Category, Decimal>);

impl LeaveBalances {
    /// Creates an empty set of allotments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the default allotments for the given year.
    ///
    /// Ordinary leave for `current_year` gets [`DEFAULT_ORDINARY_LEAVE_DAYS`];
    /// every other tracked category starts at zero.
    pub fn with_defaults(current_year: i32) -> Self {
        let mut balances = Self::new();
        balances.set(
            Category::LeaveOrdinary(current_year),
            DEFAULT_ORDINARY_LEAVE_DAYS,
        );
        for category in [
            Category::STATUTORY_LEAVE,
            Category::HOLIDAY_RECOVERY,
            Category::Travel,
            Category::Recovery,
        ] {
            balances.set(category, Decimal::ZERO);
        }
        balances
    }

    /// Returns the allotment for a category, zero if none is configured.
    pub fn get(&self, category: Category) -> Decimal {
        self.0.get(&category).copied().unwrap_or(Decimal::ZERO)
    }

    /// Returns true if an allotment is configured for the category.
    pub fn contains(&self, category: Category) -> bool {
        self.0.contains_key(&category)
    }

    /// Sets the allotment for a category.
    pub fn set(&mut self, category: Category, amount: Decimal) {
        self.0.insert(category, amount);
    }

    /// Removes the allotment for a category.
    pub fn remove(&mut self, category: Category) -> Option<Decimal> {
        self.0.remove(&category)
    }

    /// Returns the opening balance of the hour bank.
    pub fn recovery_opening(&self) -> Decimal {
        self.get(Category::Recovery)
    }

    /// Iterates over configured allotments in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        self.0.iter().map(|(category, amount)| (*category, *amount))
    }

    /// Fills in every default allotment that is not configured yet.
    pub fn merge_defaults(&mut self, current_year: i32) {
        for (category, amount) in Self::with_defaults(current_year).iter() {
            self.0.entry(category).or_insert(amount);
        }
    }

    /// Brings ordinary-leave allotments in line with the current year.
    ///
    /// - Adds the current year with [`DEFAULT_ORDINARY_LEAVE_DAYS`] if missing
    /// - Drops past years whose allotment is exhausted by `used`
    /// - Drops future years whose allotment is zero
    ///
    /// Returns true if anything changed.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_ledger::models::{Category, LeaveBalances, UsedLeave};
    /// use rust_decimal::Decimal;
    ///
    /// let mut balances = LeaveBalances::new();
    /// balances.set(Category::LeaveOrdinary(2025), Decimal::new(2, 0));
    ///
    /// let mut used = UsedLeave::default();
    /// used.add(Category::LeaveOrdinary(2025), Decimal::new(2, 0));
    ///
    /// assert!(balances.reconcile(2026, &used));
    /// assert!(!balances.contains(Category::LeaveOrdinary(2025)));
    /// assert_eq!(balances.get(Category::LeaveOrdinary(2026)), Decimal::new(39, 0));
    /// ```
    pub fn reconcile(&mut self, current_year: i32, used: &UsedLeave) -> bool {
        let mut changed = false;

        let current = Category::LeaveOrdinary(current_year);
        if !self.contains(current) {
            self.set(current, DEFAULT_ORDINARY_LEAVE_DAYS);
            changed = true;
        }

        let before = self.0.len();
        self.0.retain(|category, opening| match category.ordinary_year() {
            Some(year) if year < current_year => *opening - used.get(*category) > Decimal::ZERO,
            Some(year) if year > current_year => !opening.is_zero(),
            _ => true,
        });

        changed || self.0.len() != before
    }
}

/// Everything the ledger needs from the caller's settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// The weekly target schedule.
    #[serde(default)]
    pub schedule: ScheduleSettings,
    /// Opening allotments per category.
    #[serde(default)]
    pub leave_balances: LeaveBalances,
}

impl UserSettings {
    /// Creates settings with the default schedule and allotments for the given year.
    pub fn with_defaults(current_year: i32) -> Self {
        Self {
            schedule: ScheduleSettings::default(),
            leave_balances: LeaveBalances::with_defaults(current_year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_schedule() {
        let schedule = ScheduleSettings::default();
        assert_eq!(schedule.mon_thu, dec("8.5"));
        assert_eq!(schedule.fri, dec("4"));
        assert_eq!(schedule.sat_sun, dec("0"));
        assert!(schedule.validate().is_ok());
    }

    #[test]
    fn test_negative_schedule_is_rejected() {
        let schedule = ScheduleSettings {
            mon_thu: dec("8"),
            fri: dec("-1"),
            sat_sun: dec("0"),
        };

        match schedule.validate() {
            Err(EngineError::InvalidSchedule { field, .. }) => assert_eq!(field, "fri"),
            other => panic!("Expected InvalidSchedule error, got {other:?}"),
        }
    }

    #[test]
    fn test_schedule_accepts_camel_case_aliases() {
        let json = r#"{"monThu": 8.5, "fri": 4, "satSun": 0}"#;
        let schedule: ScheduleSettings = serde_json::from_str(json).unwrap();
        assert_eq!(schedule, ScheduleSettings::default());
    }

    #[test]
    fn test_missing_balance_reads_as_zero() {
        let balances = LeaveBalances::new();
        assert_eq!(balances.get(Category::STATUTORY_LEAVE), Decimal::ZERO);
        assert_eq!(balances.recovery_opening(), Decimal::ZERO);
    }

    #[test]
    fn test_defaults_for_year() {
        let balances = LeaveBalances::with_defaults(2026);
        assert_eq!(balances.get(Category::LeaveOrdinary(2026)), dec("39"));
        assert!(balances.contains(Category::Travel));
        assert!(balances.contains(Category::Recovery));
        assert!(!balances.contains(Category::LeaveOrdinary(2025)));
    }

    #[test]
    fn test_merge_defaults_keeps_configured_values() {
        let mut balances = LeaveBalances::new();
        balances.set(Category::Recovery, dec("12.5"));
        balances.set(Category::LeaveOrdinary(2026), dec("30"));

        balances.merge_defaults(2026);

        assert_eq!(balances.recovery_opening(), dec("12.5"));
        assert_eq!(balances.get(Category::LeaveOrdinary(2026)), dec("30"));
        assert!(balances.contains(Category::STATUTORY_LEAVE));
    }

    #[test]
    fn test_reconcile_adds_current_year() {
        let mut balances = LeaveBalances::new();
        assert!(balances.reconcile(2026, &UsedLeave::default()));
        assert_eq!(balances.get(Category::LeaveOrdinary(2026)), dec("39"));
    }

    #[test]
    fn test_reconcile_keeps_past_year_with_days_left() {
        let mut balances = LeaveBalances::new();
        balances.set(Category::LeaveOrdinary(2026), dec("39"));
        balances.set(Category::LeaveOrdinary(2025), dec("10"));

        let mut used = UsedLeave::default();
        used.add(Category::LeaveOrdinary(2025), dec("4"));

        assert!(!balances.reconcile(2026, &used));
        assert_eq!(balances.get(Category::LeaveOrdinary(2025)), dec("10"));
    }

    #[test]
    fn test_reconcile_drops_exhausted_past_year() {
        let mut balances = LeaveBalances::new();
        balances.set(Category::LeaveOrdinary(2026), dec("39"));
        balances.set(Category::LeaveOrdinary(2024), dec("5"));

        let mut used = UsedLeave::default();
        used.add(Category::LeaveOrdinary(2024), dec("6"));

        assert!(balances.reconcile(2026, &used));
        assert!(!balances.contains(Category::LeaveOrdinary(2024)));
    }

    #[test]
    fn test_reconcile_drops_empty_future_year_only() {
        let mut balances = LeaveBalances::new();
        balances.set(Category::LeaveOrdinary(2026), dec("39"));
        balances.set(Category::LeaveOrdinary(2027), dec("0"));
        balances.set(Category::LeaveOrdinary(2028), dec("3"));

        assert!(balances.reconcile(2026, &UsedLeave::default()));
        assert!(!balances.contains(Category::LeaveOrdinary(2027)));
        assert!(balances.contains(Category::LeaveOrdinary(2028)));
    }

    #[test]
    fn test_reconcile_leaves_other_categories_alone() {
        let mut balances = LeaveBalances::with_defaults(2026);
        let before = balances.clone();
        assert!(!balances.reconcile(2026, &UsedLeave::default()));
        assert_eq!(balances, before);
    }

    #[test]
    fn test_balances_serialize_with_tags() {
        let mut balances = LeaveBalances::new();
        balances.set(Category::LeaveOrdinary(2025), dec("39"));
        balances.set(Category::Travel, dec("12"));

        let json = serde_json::to_value(&balances).unwrap();
        assert_eq!(json["ordinary-2025"], "39");
        assert_eq!(json["travel"], "12");

        let back: LeaveBalances = serde_json::from_value(json).unwrap();
        assert_eq!(back, balances);
    }

    #[test]
    fn test_balances_deserialize_from_yaml() {
        let yaml = "ordinary-2026: 39\nlic_937: 3\nrecovery: 12.5\n";
        let balances: LeaveBalances = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(balances.get(Category::LeaveOrdinary(2026)), dec("39"));
        assert_eq!(balances.get(Category::STATUTORY_LEAVE), dec("3"));
        assert_eq!(balances.recovery_opening(), dec("12.5"));
    }

    #[test]
    fn test_user_settings_defaults_when_fields_missing() {
        let settings: UserSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schedule, ScheduleSettings::default());
        assert_eq!(settings.leave_balances, LeaveBalances::new());
    }
}
