//! Configuration types for the location catalogue.
//!
//! This module contains the strongly-typed structures deserialized from
//! `locations.yaml` and the validated catalogue built from them.

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::{ChargingLocation, ScheduleWarning};

/// Structure of `locations.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationsConfig {
    /// The configured charging locations.
    #[serde(default)]
    pub locations: Vec<ChargingLocation>,
}

/// A schedule warning attributed to the location it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationWarning {
    /// The id of the location.
    pub location_id: String,
    /// The warning itself.
    pub warning: ScheduleWarning,
}

/// The validated set of charging locations.
///
/// Locations keep the order they were configured in; lookups by id go
/// through an index.
#[derive(Debug, Clone, Default)]
pub struct LocationCatalog {
    /// Locations in configuration order.
    locations: Vec<ChargingLocation>,
    /// Map of location id to position in `locations`.
    index: HashMap<String, usize>,
    /// Schedule warnings found while validating.
    warnings: Vec<LocationWarning>,
}

impl LocationCatalog {
    /// Creates a catalogue from already-validated locations with unique ids.
    pub(crate) fn new(locations: Vec<ChargingLocation>, warnings: Vec<LocationWarning>) -> Self {
        let index = locations
            .iter()
            .enumerate()
            .map(|(i, loc)| (loc.id.clone(), i))
            .collect();
        Self {
            locations,
            index,
            warnings,
        }
    }

    /// Returns all locations in configuration order.
    pub fn locations(&self) -> &[ChargingLocation] {
        &self.locations
    }

    /// Returns the location with the given id.
    pub fn get(&self, id: &str) -> Option<&ChargingLocation> {
        self.index.get(id).map(|&i| &self.locations[i])
    }

    /// Returns the schedule warnings found while loading.
    pub fn warnings(&self) -> &[LocationWarning] {
        &self.warnings
    }
}
