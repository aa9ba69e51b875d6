//! Climate platform types for Home Assistant
//!
//! This crate provides the vocabulary shared by every climate integration:
//! the normalized HVAC and fan mode enums, the supported-feature bit set,
//! and the [`ClimateEntity`] trait the host drives on its polling cadence
//! and on user commands.

mod consts;
mod entity;
mod feature;
pub mod service;

pub use consts::{FanMode, HvacMode, UnitOfTemperature, UnknownFanMode, UnknownHvacMode};
pub use entity::ClimateEntity;
pub use feature::ClimateEntityFeature;
pub use service::{ClimateService, ClimateServiceError};

/// Default minimum target temperature in °C
pub const DEFAULT_MIN_TEMP: f64 = 7.0;

/// Default maximum target temperature in °C
pub const DEFAULT_MAX_TEMP: f64 = 35.0;

/// State attribute keys written by climate entities
pub mod attributes {
    pub const ATTR_HVAC_MODES: &str = "hvac_modes";
    pub const ATTR_FAN_MODES: &str = "fan_modes";
    pub const ATTR_FAN_MODE: &str = "fan_mode";
    pub const ATTR_CURRENT_TEMPERATURE: &str = "current_temperature";
    /// Target temperature; the key is `temperature` for historical reasons
    pub const ATTR_TEMPERATURE: &str = "temperature";
    pub const ATTR_MIN_TEMP: &str = "min_temp";
    pub const ATTR_MAX_TEMP: &str = "max_temp";
    pub const ATTR_FRIENDLY_NAME: &str = "friendly_name";
    pub const ATTR_SUPPORTED_FEATURES: &str = "supported_features";
}
