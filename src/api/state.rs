//! Application state for the EV tariff engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the location catalogue, read-only once the server has started.
/// Cloning is cheap; every handler gets its own handle.
#[derive(Clone)]
pub struct AppState {
    /// The loaded location catalogue.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_catalog() {
        let state = AppState::new(ConfigLoader::from_locations(vec![]).unwrap());
        let clone = state.clone();
        assert!(std::ptr::eq(state.config(), clone.config()));
    }
}
