//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the charging
//! location catalogue from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::ChargingLocation;

use super::types::{LocationCatalog, LocationWarning, LocationsConfig};

/// Name of the catalogue file inside a configuration directory.
pub const LOCATIONS_FILE: &str = "locations.yaml";

/// Loads and provides access to the charging location catalogue.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── locations.yaml   # Charging locations and their rate schedules
/// ```
///
/// # Example
///
/// ```no_run
/// use ev_tariff_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let home = loader.get_location("loc_home").unwrap();
/// println!("{} has {} rate bands", home.name, home.rate_periods.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: LocationCatalog,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `locations.yaml` is missing (`ConfigNotFound`)
    /// - the file is not valid YAML or does not match the schema
    ///   (`ConfigParseError`)
    /// - a location or one of its rate bands fails validation
    ///   (`InvalidLocation`, `InvalidRateBand`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let locations_path = path.as_ref().join(LOCATIONS_FILE);
        let config = Self::load_yaml::<LocationsConfig>(&locations_path)?;

        let loader = Self::from_locations(config.locations)?;
        info!(
            path = %locations_path.display(),
            locations = loader.catalog.locations().len(),
            warnings = loader.catalog.warnings().len(),
            "Loaded charging locations"
        );
        Ok(loader)
    }

    /// Builds a loader from locations supplied in memory.
    ///
    /// Applies the same validation as [`ConfigLoader::load`], and also
    /// rejects duplicate ids.
    pub fn from_locations(locations: Vec<ChargingLocation>) -> EngineResult<Self> {
        let mut seen = HashSet::new();
        let mut warnings = Vec::new();

        for location in &locations {
            if !seen.insert(location.id.as_str()) {
                return Err(EngineError::InvalidLocation {
                    field: "id".to_string(),
                    message: format!("duplicate location id '{}'", location.id),
                });
            }

            for warning in location.validate()? {
                warn!(
                    location_id = %location.id,
                    band_index = warning.band_index,
                    code = %warning.code,
                    "{}",
                    warning.message
                );
                warnings.push(LocationWarning {
                    location_id: location.id.clone(),
                    warning,
                });
            }
        }

        Ok(Self {
            catalog: LocationCatalog::new(locations, warnings),
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

    /// Returns the underlying catalogue.
    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    /// Returns all configured locations.
    pub fn locations(&self) -> &[ChargingLocation] {
        self.catalog.locations()
    }

    /// Gets a location by its id.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ev_tariff_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let location = loader.get_location("loc_home")?;
    /// println!("Location: {}", location.name);
    /// # Ok::<(), ev_tariff_engine::error::EngineError>(())
    /// ```
    pub fn get_location(&self, id: &str) -> EngineResult<&ChargingLocation> {
        self.catalog
            .get(id)
            .ok_or_else(|| EngineError::LocationNotFound { id: id.to_string() })
    }
}
