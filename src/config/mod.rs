//! Configuration loading for the EV tariff engine.
//!
//! This module loads the catalogue of charging locations, with their rate
//! schedules, from a YAML file and validates it.
//!
//! # Example
//!
//! ```no_run
//! use ev_tariff_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded {} locations", config.locations().len());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, LOCATIONS_FILE};
pub use types::{LocationCatalog, LocationWarning, LocationsConfig};
