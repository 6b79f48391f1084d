//! Configuration types for the attendance ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `settings.yaml`.

use serde::Deserialize;

use crate::entry::DEFAULT_RETENTION_YEARS;
use crate::models::{LeaveBalances, ScheduleSettings, UserSettings};

/// Metadata identifying a settings profile.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileMetadata {
    /// The profile name (e.g., "default").
    pub name: String,
    /// A free-text description of the profile.
    #[serde(default)]
    pub description: String,
}

fn default_retention_years() -> u32 {
    DEFAULT_RETENTION_YEARS
}

/// The `settings.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsFile {
    /// Profile metadata.
    pub profile: ProfileMetadata,
    /// The weekly target schedule.
    #[serde(default)]
    pub schedule: ScheduleSettings,
    /// Opening allotments per category tag.
    #[serde(default)]
    pub leave_balances: LeaveBalances,
    /// How many years of records to keep.
    #[serde(default = "default_retention_years")]
    pub retention_years: u32,
}

/// The complete ledger configuration loaded from a profile directory.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    profile: ProfileMetadata,
    settings: UserSettings,
    retention_years: u32,
}

impl LedgerConfig {
    /// Creates a new LedgerConfig from its component parts.
    pub fn new(profile: ProfileMetadata, settings: UserSettings, retention_years: u32) -> Self {
        Self {
            profile,
            settings,
            retention_years,
        }
    }

    /// Returns the profile metadata.
    pub fn profile(&self) -> &ProfileMetadata {
        &self.profile
    }

    /// Returns the schedule and allotments.
    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    /// Returns the weekly target schedule.
    pub fn schedule(&self) -> &ScheduleSettings {
        &self.settings.schedule
    }

    /// Returns the opening allotments.
    pub fn leave_balances(&self) -> &LeaveBalances {
        &self.settings.leave_balances
    }

    /// Returns how many years of records to keep.
    pub fn retention_years(&self) -> u32 {
        self.retention_years
    }
}
