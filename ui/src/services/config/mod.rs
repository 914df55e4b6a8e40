mod page_config;

use std::sync::OnceLock;

pub use page_config::*;

use crate::services::errors::{SettingsError, SettingsResult};

static GLOBAL_CONFIG: OnceLock<SettingsPageConfig> = OnceLock::new();

/// Get the global configuration, initialized with defaults on first access
pub fn global_config() -> SettingsPageConfig {
    *GLOBAL_CONFIG.get_or_init(SettingsPageConfig::default)
}

/// Install the configuration from its JSON form before the page first reads it.
/// Call this early in application startup; an invalid document leaves the
/// defaults in place.
pub fn init_global_config_from_json(json: &str) -> SettingsResult<SettingsPageConfig> {
    let config = SettingsPageConfig::from_json(json)?;
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| SettingsError::Configuration {
            errors: vec!["Global configuration is already initialized".to_string()],
        })?;
    Ok(config)
}
