//! Error types for the Attendance Ledger Engine.
//!
//! The accounting functions are total and never fail; errors only arise at
//! the boundaries: configuration loading, record construction and parsing of
//! category tags.

use thiserror::Error;

/// The main error type for the Attendance Ledger Engine.
///
/// # Example
///
/// ```
/// use attendance_ledger::error::EngineError;
///
/// let error = EngineError::UnknownCategory {
///     tag: "sabbatical".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown category tag: sabbatical");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A category tag did not match any known category.
    #[error("Unknown category tag: {tag}")]
    UnknownCategory {
        /// The tag that could not be recognised.
        tag: String,
    },

    /// A time record was invalid or contained inconsistent data.
    #[error("Invalid record '{record_id}': {message}")]
    InvalidRecord {
        /// The ID of the invalid record.
        record_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A schedule field held an unusable value.
    #[error("Invalid schedule field '{field}': {message}")]
    InvalidSchedule {
        /// The schedule field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/settings.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/settings.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_unknown_category_displays_tag() {
        let error = EngineError::UnknownCategory {
            tag: "ordinary-".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown category tag: ordinary-");
    }

    #[test]
    fn test_invalid_record_displays_id_and_message() {
        let error = EngineError::InvalidRecord {
            record_id: "rec_001".to_string(),
            message: "end time before start time".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid record 'rec_001': end time before start time"
        );
    }

    #[test]
    fn test_invalid_schedule_displays_field_and_message() {
        let error = EngineError::InvalidSchedule {
            field: "fri".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid schedule field 'fri': must not be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_category() -> EngineResult<()> {
            Err(EngineError::UnknownCategory {
                tag: "x".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_category()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
