//! Error types for the EV tariff engine.
//!
//! Tariff resolution itself never fails (an unpriced charge is `None`), so
//! these errors cover the boundaries around it: loading and validating
//! location schedules, and pricing draft charging sessions.

use thiserror::Error;

/// The main error type for the EV tariff engine.
///
/// # Example
///
/// ```
/// use ev_tariff_engine::error::EngineError;
///
/// let error = EngineError::LocationNotFound {
///     id: "loc_home".to_string(),
/// };
/// assert_eq!(error.to_string(), "Charging location not found: loc_home");
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

    /// No charging location with the given id is configured.
    #[error("Charging location not found: {id}")]
    LocationNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A charging location record was invalid.
    #[error("Invalid location field '{field}': {message}")]
    InvalidLocation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A rate band in a location's schedule was invalid.
    #[error("Invalid rate band #{index}: {message}")]
    InvalidRateBand {
        /// Zero-based position of the band in the schedule.
        index: usize,
        /// A description of what made the band invalid.
        message: String,
    },

    /// A time of day was not in zero-padded 24-hour `HH:MM` form.
    #[error("Invalid time of day '{value}': expected zero-padded HH:MM")]
    InvalidClockTime {
        /// The rejected input.
        value: String,
    },

    /// A draft charging session was invalid.
    #[error("Invalid session field '{field}': {message}")]
    InvalidSession {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A history total does not fit in a decimal.
    #[error("Total {field} is out of range")]
    TotalOutOfRange {
        /// The field being totalled.
        field: String,
    },

    /// No rate applies to the session and no manual cost was given.
    #[error("Rate unavailable for '{location}', enter cost manually")]
    CostUnavailable {
        /// The location the session was charged at.
        location: String,
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
            path: "/missing/locations.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/locations.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/locations.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/locations.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_rate_band_displays_index() {
        let error = EngineError::InvalidRateBand {
            index: 2,
            message: "startMonth must be between 1 and 12".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rate band #2: startMonth must be between 1 and 12"
        );
    }

    #[test]
    fn test_invalid_clock_time_displays_value() {
        let error = EngineError::InvalidClockTime {
            value: "9:00".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time of day '9:00': expected zero-padded HH:MM"
        );
    }

    #[test]
    fn test_cost_unavailable_asks_for_manual_cost() {
        let error = EngineError::CostUnavailable {
            location: "Work".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Rate unavailable for 'Work', enter cost manually"
        );
    }

    #[test]
    fn test_total_out_of_range_names_field() {
        let error = EngineError::TotalOutOfRange {
            field: "energy_added".to_string(),
        };
        assert_eq!(error.to_string(), "Total energy_added is out of range");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::LocationNotFound {
                id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
