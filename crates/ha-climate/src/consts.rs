//! Normalized climate vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for a string that is not a known HVAC mode
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown hvac mode '{0}'")]
pub struct UnknownHvacMode(pub String);

/// Error for a string that is not a known fan mode
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown fan mode '{0}'")]
pub struct UnknownFanMode(pub String);

/// Normalized HVAC operating mode
///
/// This is the host's canonical vocabulary, independent of any device's
/// native terms. A climate entity's state value is its current HVAC mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HvacMode {
    #[default]
    Off,
    Heat,
    Cool,
    HeatCool,
    Auto,
    Dry,
    FanOnly,
}

impl HvacMode {
    /// All HVAC modes in host order
    pub const ALL: [HvacMode; 7] = [
        HvacMode::Off,
        HvacMode::Heat,
        HvacMode::Cool,
        HvacMode::HeatCool,
        HvacMode::Auto,
        HvacMode::Dry,
        HvacMode::FanOnly,
    ];

    /// Wire representation (e.g., "fan_only")
    pub fn as_str(&self) -> &'static str {
        match self {
            HvacMode::Off => "off",
            HvacMode::Heat => "heat",
            HvacMode::Cool => "cool",
            HvacMode::HeatCool => "heat_cool",
            HvacMode::Auto => "auto",
            HvacMode::Dry => "dry",
            HvacMode::FanOnly => "fan_only",
        }
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HvacMode {
    type Err = UnknownHvacMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HvacMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownHvacMode(s.to_string()))
    }
}

/// Normalized fan mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FanMode {
    #[default]
    Auto,
    Low,
    Medium,
    High,
}

impl FanMode {
    pub const ALL: [FanMode; 4] = [FanMode::Auto, FanMode::Low, FanMode::Medium, FanMode::High];

    /// Wire representation (e.g., "medium")
    pub fn as_str(&self) -> &'static str {
        match self {
            FanMode::Auto => "auto",
            FanMode::Low => "low",
            FanMode::Medium => "medium",
            FanMode::High => "high",
        }
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FanMode {
    type Err = UnknownFanMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FanMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFanMode(s.to_string()))
    }
}

/// Temperature unit an entity reports in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UnitOfTemperature {
    #[default]
    #[serde(rename = "°C")]
    Celsius,
    #[serde(rename = "°F")]
    Fahrenheit,
}

impl UnitOfTemperature {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitOfTemperature::Celsius => "°C",
            UnitOfTemperature::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for UnitOfTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
