//! Config entry data for a Broadlink AC

use ha_climate::FanMode;
use ha_config_entries::ConfigEntry;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Default seconds between status polls
pub const DEFAULT_SCAN_INTERVAL: u64 = 30;

/// Errors reading an entry's configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse entry data: {0}")]
    InvalidEntryData(#[from] serde_json::Error),

    #[error("invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Settings for one air conditioner
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BroadlinkAcConfig {
    /// Device IP address or hostname
    pub host: String,
    /// Device MAC address
    pub mac: String,
    /// Display name; defaults to "Broadlink AC {entry_id}"
    #[serde(default)]
    pub name: Option<String>,
    /// Seconds between status polls
    #[serde(default = "default_scan_interval")]
    pub scan_interval: u64,
    /// Fan mode shown when the device reports an unknown fan speed
    #[serde(default)]
    pub fan_fallback: FanMode,
}

fn default_scan_interval() -> u64 {
    DEFAULT_SCAN_INTERVAL
}

impl BroadlinkAcConfig {
    /// Read the config from an entry; options override data
    pub fn from_entry(entry: &ConfigEntry) -> Result<Self, ConfigError> {
        let mut merged = serde_json::Map::new();
        for (key, value) in entry.data.iter().chain(entry.options.iter()) {
            merged.insert(key.clone(), value.clone());
        }

        let config: Self = serde_json::from_value(serde_json::Value::Object(merged))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "host".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.scan_interval == 0 {
            return Err(ConfigError::InvalidValue {
                key: "scan_interval".to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }

    pub fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry() -> ConfigEntry {
        ConfigEntry::new("broadlink_ac", "AC")
            .with_data_value("host", json!("192.168.1.40"))
            .with_data_value("mac", json!("34:ea:34:aa:bb:cc"))
    }

    #[test]
    fn test_defaults() {
        let config = BroadlinkAcConfig::from_entry(&entry()).unwrap();

        assert_eq!(config.host, "192.168.1.40");
        assert_eq!(config.name, None);
        assert_eq!(config.scan_interval(), Duration::from_secs(30));
        assert_eq!(config.fan_fallback, FanMode::Auto);
    }

    #[test]
    fn test_options_override_data() {
        let entry = entry()
            .with_data_value("scan_interval", json!(10))
            .with_option("scan_interval", json!(45))
            .with_option("fan_fallback", json!("low"))
            .with_option("name", json!("Bedroom AC"));
        let config = BroadlinkAcConfig::from_entry(&entry).unwrap();

        assert_eq!(config.scan_interval, 45);
        assert_eq!(config.fan_fallback, FanMode::Low);
        assert_eq!(config.name.as_deref(), Some("Bedroom AC"));
    }

    #[test]
    fn test_missing_host() {
        let entry =
            ConfigEntry::new("broadlink_ac", "AC").with_data_value("mac", json!("aa:bb"));
        assert!(matches!(
            BroadlinkAcConfig::from_entry(&entry),
            Err(ConfigError::InvalidEntryData(_))
        ));
    }

    #[test]
    fn test_zero_scan_interval() {
        let entry = entry().with_option("scan_interval", json!(0));
        assert!(matches!(
            BroadlinkAcConfig::from_entry(&entry),
            Err(ConfigError::InvalidValue { key, .. }) if key == "scan_interval"
        ));
    }
}
