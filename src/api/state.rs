//! Application state for the Attendance Ledger API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::UserSettings;

/// Shared application state.
///
/// Holds the default settings used when a request carries none. The state
/// is immutable once the server starts.
#[derive(Clone)]
pub struct AppState {
    settings: Arc<UserSettings>,
}

impl AppState {
    /// Creates a new application state with the given default settings.
    pub fn new(settings: UserSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Creates a new application state from a loaded settings profile.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(config.user_settings())
    }

    /// Returns the default settings.
    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }
}
