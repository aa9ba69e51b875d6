//! ClimateEntity trait
//!
//! Entry points the host invokes on a climate entity, plus the projection of
//! the entity's properties into a state value and state attributes.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::attributes::*;
use crate::{
    ClimateEntityFeature, FanMode, HvacMode, UnitOfTemperature, DEFAULT_MAX_TEMP,
    DEFAULT_MIN_TEMP,
};

/// A climate device as seen by the host
///
/// The host serializes calls for a single entity: `update` runs on the
/// polling cadence and the command methods run on user events, one at a time.
#[async_trait]
pub trait ClimateEntity: Send + Sync {
    /// Stable identifier used by the entity registry
    fn unique_id(&self) -> &str;

    /// Display name
    fn name(&self) -> &str;

    fn temperature_unit(&self) -> UnitOfTemperature {
        UnitOfTemperature::Celsius
    }

    fn supported_features(&self) -> ClimateEntityFeature;

    /// HVAC modes the host may command
    fn hvac_modes(&self) -> &[HvacMode];

    /// Fan modes the host may command
    fn fan_modes(&self) -> &[FanMode] {
        &[]
    }

    fn hvac_mode(&self) -> HvacMode;

    fn fan_mode(&self) -> Option<FanMode> {
        None
    }

    fn current_temperature(&self) -> Option<f64>;

    fn target_temperature(&self) -> Option<f64>;

    fn min_temp(&self) -> f64 {
        DEFAULT_MIN_TEMP
    }

    fn max_temp(&self) -> f64 {
        DEFAULT_MAX_TEMP
    }

    /// Refresh from the device
    async fn update(&mut self);

    async fn set_temperature(&mut self, temperature: f64);

    async fn set_hvac_mode(&mut self, hvac_mode: HvacMode);

    async fn set_fan_mode(&mut self, fan_mode: FanMode);

    async fn turn_on(&mut self);

    async fn turn_off(&mut self);

    /// State value: the current HVAC mode
    fn state(&self) -> String {
        self.hvac_mode().to_string()
    }

    /// Capability and runtime attributes written alongside the state
    fn state_attributes(&self) -> HashMap<String, Value> {
        let features = self.supported_features();
        let mut attributes = HashMap::new();

        attributes.insert(ATTR_FRIENDLY_NAME.to_string(), json!(self.name()));
        attributes.insert(ATTR_HVAC_MODES.to_string(), json!(self.hvac_modes()));
        attributes.insert(ATTR_MIN_TEMP.to_string(), json!(self.min_temp()));
        attributes.insert(ATTR_MAX_TEMP.to_string(), json!(self.max_temp()));
        attributes.insert(
            ATTR_SUPPORTED_FEATURES.to_string(),
            json!(features.bits()),
        );
        attributes.insert(
            ATTR_CURRENT_TEMPERATURE.to_string(),
            json!(self.current_temperature()),
        );

        if features.contains(ClimateEntityFeature::TARGET_TEMPERATURE) {
            attributes.insert(
                ATTR_TEMPERATURE.to_string(),
                json!(self.target_temperature()),
            );
        }

        if features.contains(ClimateEntityFeature::FAN_MODE) {
            attributes.insert(ATTR_FAN_MODES.to_string(), json!(self.fan_modes()));
            attributes.insert(ATTR_FAN_MODE.to_string(), json!(self.fan_mode()));
        }

        attributes
    }
}
