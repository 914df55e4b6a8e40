//! Settings Page Configuration
//!
//! Timing of the simulated save and the masking parameters, with the same
//! defaults the page has always used (1s save, 3s until the status clears,
//! 7 visible characters masked with `*`).

use serde::{Deserialize, Serialize};

use crate::features::settings::{MASK_CHAR, VISIBLE_PREFIX_LEN};
use crate::services::errors::{SettingsError, SettingsResult};

/// Configuration for the settings page
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPageConfig {
    /// Delays of the simulated save
    pub timing: SaveTimingConfig,

    /// How hidden API keys are rendered
    pub masking: MaskingConfig,
}

/// Simulated save timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveTimingConfig {
    /// Delay before the status switches to the success message
    pub save_delay_ms: u32,

    /// Delay after success before the status clears
    pub clear_delay_ms: u32,
}

/// Masking parameters for API key inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskingConfig {
    /// Leading characters shown verbatim
    pub visible_prefix_len: usize,

    /// Replacement for every remaining character
    pub mask_char: char,
}

impl Default for SaveTimingConfig {
    fn default() -> Self {
        Self {
            save_delay_ms: 1000,
            clear_delay_ms: 3000,
        }
    }
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            visible_prefix_len: VISIBLE_PREFIX_LEN,
            mask_char: MASK_CHAR,
        }
    }
}

impl SettingsPageConfig {
    /// Parse a JSON configuration; missing keys take their defaults
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config
            .validate()
            .map_err(|errors| SettingsError::Configuration { errors })?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.timing.save_delay_ms == 0 {
            errors.push("Timing save_delay_ms must be greater than 0".to_string());
        }

        if self.timing.clear_delay_ms == 0 {
            errors.push("Timing clear_delay_ms must be greater than 0".to_string());
        }

        if self.masking.mask_char.is_whitespace() || self.masking.mask_char.is_control() {
            errors.push("Masking mask_char must be a visible character".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = SettingsPageConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timing.save_delay_ms, 1000);
        assert_eq!(config.timing.clear_delay_ms, 3000);
        assert_eq!(config.masking.visible_prefix_len, 7);
        assert_eq!(config.masking.mask_char, '*');
    }

    #[test]
    fn test_invalid_config() {
        let mut config = SettingsPageConfig::default();
        config.timing.save_delay_ms = 0;
        config.masking.mask_char = ' ';

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_from_json_fills_missing_keys_with_defaults() {
        let config =
            SettingsPageConfig::from_json(r#"{ "timing": { "save_delay_ms": 250 } }"#).unwrap();

        assert_eq!(config.timing.save_delay_ms, 250);
        assert_eq!(config.timing.clear_delay_ms, 3000);
        assert_eq!(config.masking, MaskingConfig::default());
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        let result = SettingsPageConfig::from_json(r#"{ "timing": { "clear_delay_ms": 0 } }"#);
        assert!(matches!(result, Err(SettingsError::Configuration { .. })));

        let result = SettingsPageConfig::from_json("not json");
        assert!(matches!(result, Err(SettingsError::Serialization(_))));
    }
}
