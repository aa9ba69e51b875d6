//! Climate services
//!
//! Parses `climate.*` service calls and routes them to the entity's
//! entry points.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::{ClimateEntity, FanMode, HvacMode};

pub const SERVICE_SET_TEMPERATURE: &str = "set_temperature";
pub const SERVICE_SET_HVAC_MODE: &str = "set_hvac_mode";
pub const SERVICE_SET_FAN_MODE: &str = "set_fan_mode";
pub const SERVICE_TURN_ON: &str = "turn_on";
pub const SERVICE_TURN_OFF: &str = "turn_off";

/// Errors routing a climate service call
#[derive(Debug, Error)]
pub enum ClimateServiceError {
    #[error("unknown climate service: {0}")]
    UnknownService(String),

    #[error("invalid service data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct SetTemperatureData {
    #[serde(default)]
    temperature: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SetHvacModeData {
    hvac_mode: HvacMode,
}

#[derive(Debug, Deserialize)]
struct SetFanModeData {
    fan_mode: FanMode,
}

/// A parsed climate service call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClimateService {
    /// `None` when the call carried no `temperature` key
    SetTemperature(Option<f64>),
    SetHvacMode(HvacMode),
    SetFanMode(FanMode),
    TurnOn,
    TurnOff,
}

impl ClimateService {
    pub fn parse(service: &str, data: &Value) -> Result<Self, ClimateServiceError> {
        // Calls without data arrive as null
        let data = if data.is_null() {
            Value::Object(Default::default())
        } else {
            data.clone()
        };

        let parsed = match service {
            SERVICE_SET_TEMPERATURE => {
                let data: SetTemperatureData = serde_json::from_value(data)?;
                ClimateService::SetTemperature(data.temperature)
            }
            SERVICE_SET_HVAC_MODE => {
                let data: SetHvacModeData = serde_json::from_value(data)?;
                ClimateService::SetHvacMode(data.hvac_mode)
            }
            SERVICE_SET_FAN_MODE => {
                let data: SetFanModeData = serde_json::from_value(data)?;
                ClimateService::SetFanMode(data.fan_mode)
            }
            SERVICE_TURN_ON => ClimateService::TurnOn,
            SERVICE_TURN_OFF => ClimateService::TurnOff,
            other => return Err(ClimateServiceError::UnknownService(other.to_string())),
        };
        Ok(parsed)
    }

    /// Invoke the matching entry point on `entity`
    pub async fn call<E: ClimateEntity + ?Sized>(self, entity: &mut E) {
        match self {
            ClimateService::SetTemperature(Some(temperature)) => {
                entity.set_temperature(temperature).await
            }
            ClimateService::SetTemperature(None) => {}
            ClimateService::SetHvacMode(mode) => entity.set_hvac_mode(mode).await,
            ClimateService::SetFanMode(mode) => entity.set_fan_mode(mode).await,
            ClimateService::TurnOn => entity.turn_on().await,
            ClimateService::TurnOff => entity.turn_off().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_set_temperature() {
        assert_eq!(
            ClimateService::parse("set_temperature", &json!({"temperature": 21})).unwrap(),
            ClimateService::SetTemperature(Some(21.0))
        );
        // HA passes extra keys like entity_id through the same data
        assert_eq!(
            ClimateService::parse("set_temperature", &json!({"entity_id": "climate.ac"}))
                .unwrap(),
            ClimateService::SetTemperature(None)
        );
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!(
            ClimateService::parse("set_hvac_mode", &json!({"hvac_mode": "fan_only"})).unwrap(),
            ClimateService::SetHvacMode(HvacMode::FanOnly)
        );
        assert_eq!(
            ClimateService::parse("set_fan_mode", &json!({"fan_mode": "high"})).unwrap(),
            ClimateService::SetFanMode(FanMode::High)
        );
        assert_eq!(
            ClimateService::parse("turn_off", &Value::Null).unwrap(),
            ClimateService::TurnOff
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            ClimateService::parse("set_hvac_mode", &json!({"hvac_mode": "turbo"})),
            Err(ClimateServiceError::InvalidData(_))
        ));
        assert!(matches!(
            ClimateService::parse("set_swing_mode", &json!({})),
            Err(ClimateServiceError::UnknownService(s)) if s == "set_swing_mode"
        ));
    }
}
