//! Configuration loading and management for the Attendance Ledger Engine.
//!
//! This module loads a settings profile from YAML: the weekly target
//! schedule, the opening leave allotments and the record retention period.
//!
//! # Example
//!
//! ```no_run
//! use attendance_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded profile: {}", config.profile().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LedgerConfig, ProfileMetadata, SettingsFile};
