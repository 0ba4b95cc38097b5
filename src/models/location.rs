//! Charging location model.
//!
//! A charging location is a named place the user charges at, together with
//! the electricity rate schedule that applies there.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{RateBand, ScheduleWarning, validate_schedule};

/// What kind of place a charging location is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    /// The user's home charger.
    Home,
    /// A charger at the user's workplace.
    Work,
    /// Any other saved location.
    #[default]
    Favorite,
}

/// A place the user charges at, with its rate schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargingLocation {
    /// Opaque identifier.
    pub id: String,
    /// Display name (e.g., "Home garage").
    pub name: String,
    /// Street address.
    pub address: String,
    /// The kind of place.
    #[serde(default)]
    pub location_type: LocationType,
    /// Seasonal rate bands. Empty means no schedule is configured and charges
    /// here cannot be priced automatically.
    #[serde(default)]
    pub rate_periods: Vec<RateBand>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ChargingLocation {
    /// Minimum length of a location name, after trimming.
    pub const MIN_NAME_LEN: usize = 2;
    /// Minimum length of an address, after trimming.
    pub const MIN_ADDRESS_LEN: usize = 5;

    /// Returns true if the location has at least one rate band.
    pub fn has_schedule(&self) -> bool {
        !self.rate_periods.is_empty()
    }

    /// Validates the record and its rate schedule.
    ///
    /// # Returns
    ///
    /// The schedule warnings on success, or an error if:
    /// - `id` is blank (`InvalidLocation`)
    /// - `name` is shorter than [`Self::MIN_NAME_LEN`] (`InvalidLocation`)
    /// - `address` is shorter than [`Self::MIN_ADDRESS_LEN`] (`InvalidLocation`)
    /// - any rate band is invalid (`InvalidRateBand`)
    ///
    /// # Example
    ///
    /// ```
    /// use ev_tariff_engine::models::{ChargingLocation, LocationType};
    ///
    /// let location = ChargingLocation {
    ///     id: "loc_home".to_string(),
    ///     name: "Home".to_string(),
    ///     address: "12 Elm Street".to_string(),
    ///     location_type: LocationType::Home,
    ///     rate_periods: vec![],
    ///     notes: None,
    /// };
    /// assert!(location.validate().unwrap().is_empty());
    /// ```
    pub fn validate(&self) -> EngineResult<Vec<ScheduleWarning>> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidLocation {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.name.trim().chars().count() < Self::MIN_NAME_LEN {
            return Err(EngineError::InvalidLocation {
                field: "name".to_string(),
                message: format!("must be at least {} characters", Self::MIN_NAME_LEN),
            });
        }
        if self.address.trim().chars().count() < Self::MIN_ADDRESS_LEN {
            return Err(EngineError::InvalidLocation {
                field: "address".to_string(),
                message: format!("must be at least {} characters", Self::MIN_ADDRESS_LEN),
            });
        }

        validate_schedule(&self.rate_periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_location() -> ChargingLocation {
        ChargingLocation {
            id: "loc_home".to_string(),
            name: "Home".to_string(),
            address: "12 Elm Street".to_string(),
            location_type: LocationType::Home,
            rate_periods: vec![],
            notes: None,
        }
    }

    #[test]
    fn test_has_schedule_false_when_empty() {
        assert!(!create_test_location().has_schedule());
    }

    #[test]
    fn test_rejects_short_name() {
        let mut location = create_test_location();
        location.name = " A ".to_string();
        match location.validate() {
            Err(EngineError::InvalidLocation { field, .. }) => assert_eq!(field, "name"),
            other => panic!("Expected InvalidLocation, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_short_address() {
        let mut location = create_test_location();
        location.address = "Elm".to_string();
        match location.validate() {
            Err(EngineError::InvalidLocation { field, .. }) => assert_eq!(field, "address"),
            other => panic!("Expected InvalidLocation, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_blank_id() {
        let mut location = create_test_location();
        location.id = "  ".to_string();
        assert!(matches!(
            location.validate(),
            Err(EngineError::InvalidLocation { field, .. }) if field == "id"
        ));
    }

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        let json = r#"{"id": "loc_1", "name": "Gym", "address": "1 Main Road"}"#;
        let location: ChargingLocation = serde_json::from_str(json).unwrap();
        assert_eq!(location.location_type, LocationType::Favorite);
        assert!(location.rate_periods.is_empty());
        assert!(location.notes.is_none());
    }

    #[test]
    fn test_location_type_uses_snake_case() {
        let work: LocationType = serde_json::from_str("\"work\"").unwrap();
        assert_eq!(work, LocationType::Work);
        assert_eq!(serde_json::to_string(&LocationType::Home).unwrap(), "\"home\"");
    }
}
