//! Typed device status record

use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// Errors decoding a status payload
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatusError {
    #[error("malformed status payload: {0}")]
    Malformed(String),
}

/// Power state as reported by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    On,
    Off,
}

impl FromStr for PowerState {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ON") {
            Ok(PowerState::On)
        } else if s.eq_ignore_ascii_case("OFF") {
            Ok(PowerState::Off)
        } else {
            Err(StatusError::Malformed(format!("unknown power state '{}'", s)))
        }
    }
}

/// Wire shape of the status dictionary; extra keys are ignored
#[derive(Debug, Deserialize)]
struct RawStatus {
    #[serde(default)]
    ambient_temp: Option<f64>,
    #[serde(default)]
    temp: Option<f64>,
    power: String,
    #[serde(default)]
    mode: Option<serde_json::Value>,
    fanspeed: String,
}

/// One status read, produced fresh on every poll
///
/// `mode` and `fanspeed` are kept exactly as received; they only carry
/// meaning while `power` is [`PowerState::On`]. A missing, null or
/// non-string mode decodes to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceStatus {
    /// Room temperature in °C
    pub ambient_temp: Option<f64>,
    /// Target temperature in °C
    pub temp: Option<f64>,
    pub power: PowerState,
    pub mode: Option<String>,
    pub fanspeed: String,
}

impl DeviceStatus {
    /// Decode the dictionary returned by the device-control object
    pub fn decode(payload: serde_json::Value) -> Result<Self, StatusError> {
        let raw: RawStatus = serde_json::from_value(payload)
            .map_err(|e| StatusError::Malformed(e.to_string()))?;

        Ok(Self {
            ambient_temp: raw.ambient_temp,
            temp: raw.temp,
            power: raw.power.parse()?,
            mode: raw
                .mode
                .and_then(|mode| mode.as_str().map(str::to_string)),
            fanspeed: raw.fanspeed,
        })
    }
}
