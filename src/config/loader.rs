//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a settings
//! profile from YAML.

use chrono::{Datelike, Local};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveBalances, ScheduleSettings, UserSettings};

use super::types::{LedgerConfig, ProfileMetadata, SettingsFile};

/// Loads and provides access to a settings profile.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── settings.yaml   # Profile, schedule, allotments and retention
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load_for_year("./config/default", 2026).unwrap();
/// println!("Loaded profile: {}", loader.profile().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LedgerConfig,
}

impl ConfigLoader {
    /// Loads configuration for the current calendar year.
    ///
    /// # Errors
    ///
    /// See [`ConfigLoader::load_for_year`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        Self::load_for_year(path, Local::now().year())
    }

    /// Loads configuration from the specified directory.
    ///
    /// Allotments missing from the file are filled in with the defaults for
    /// `current_year`, including the ordinary-leave allotment of that year.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `settings.yaml` is missing
    /// - the file contains invalid YAML or an unknown category tag
    /// - any schedule target is negative
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_ledger::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load_for_year("./config/default", 2026)?;
    /// # Ok::<(), attendance_ledger::error::EngineError>(())
    /// ```
    pub fn load_for_year<P: AsRef<Path>>(path: P, current_year: i32) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("settings.yaml");
        let file = Self::load_yaml::<SettingsFile>(&settings_path)?;

        file.schedule.validate()?;

        let mut leave_balances = file.leave_balances;
        leave_balances.merge_defaults(current_year);

        info!(
            profile = %file.profile.name,
            current_year,
            retention_years = file.retention_years,
            "Loaded settings profile"
        );

        let settings = UserSettings {
            schedule: file.schedule,
            leave_balances,
        };

        Ok(Self {
            config: LedgerConfig::new(file.profile, settings, file.retention_years),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying ledger configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Returns the profile metadata.
    pub fn profile(&self) -> &ProfileMetadata {
        self.config.profile()
    }

    /// Returns the weekly target schedule.
    pub fn schedule(&self) -> &ScheduleSettings {
        self.config.schedule()
    }

    /// Returns the opening allotments.
    pub fn leave_balances(&self) -> &LeaveBalances {
        self.config.leave_balances()
    }

    /// Returns the schedule and allotments as ledger settings.
    pub fn user_settings(&self) -> UserSettings {
        self.config.settings().clone()
    }

    /// Returns how many years of records to keep.
    pub fn retention_years(&self) -> u32 {
        self.config.retention_years()
    }
}
