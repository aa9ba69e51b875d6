//! Broadlink AC climate entity

use async_trait::async_trait;
use ha_climate::{ClimateEntity, ClimateEntityFeature, FanMode, HvacMode, UnitOfTemperature};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, instrument, warn};

use crate::config::BroadlinkAcConfig;
use crate::device::AcDevice;
use crate::error::PollError;
use crate::mode::fan_speed_command;
use crate::state::NormalizedClimateState;
use crate::status::DeviceStatus;

/// HVAC modes offered to the host
///
/// `Auto` is reachable through `turn_on` but is not offered as a choice.
pub const SUPPORTED_HVAC_MODES: [HvacMode; 5] = [
    HvacMode::Off,
    HvacMode::Cool,
    HvacMode::Heat,
    HvacMode::Dry,
    HvacMode::FanOnly,
];

pub const SUPPORTED_FAN_MODES: [FanMode; 4] = FanMode::ALL;

pub const SUPPORTED_FEATURES: ClimateEntityFeature = ClimateEntityFeature::TARGET_TEMPERATURE
    .union(ClimateEntityFeature::FAN_MODE)
    .union(ClimateEntityFeature::TURN_ON)
    .union(ClimateEntityFeature::TURN_OFF);

/// State as last written to the host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateSnapshot {
    pub state: String,
    pub attributes: HashMap<String, Value>,
}

/// Climate entity backed by one air conditioner
pub struct BroadlinkAcClimate {
    device: Arc<dyn AcDevice>,
    unique_id: String,
    name: String,
    fan_fallback: FanMode,
    state: NormalizedClimateState,
    state_tx: watch::Sender<ClimateSnapshot>,
}

impl BroadlinkAcClimate {
    /// Create the entity for a config entry
    ///
    /// Starts as Off with fan Auto and no temperatures until the first poll.
    pub fn new(device: Arc<dyn AcDevice>, entry_id: &str, config: &BroadlinkAcConfig) -> Self {
        let name = config
            .name
            .clone()
            .unwrap_or_else(|| format!("Broadlink AC {}", entry_id));

        let (state_tx, _) = watch::channel(ClimateSnapshot {
            state: HvacMode::Off.to_string(),
            attributes: HashMap::new(),
        });

        let entity = Self {
            device,
            unique_id: entry_id.to_string(),
            name,
            fan_fallback: config.fan_fallback,
            state: NormalizedClimateState::default(),
            state_tx,
        };
        entity.write_ha_state();
        entity
    }

    /// Normalized state, including which fields await confirmation
    pub fn climate_state(&self) -> &NormalizedClimateState {
        &self.state
    }

    /// Receive every state write
    pub fn subscribe(&self) -> watch::Receiver<ClimateSnapshot> {
        self.state_tx.subscribe()
    }

    /// Alias of `turn_on`
    pub async fn start(&mut self) {
        self.turn_on().await;
    }

    /// Alias of `turn_off`
    pub async fn stop(&mut self) {
        self.turn_off().await;
    }

    async fn poll(&self) -> Result<DeviceStatus, PollError> {
        let payload = self.device.get_ac_status(true).await?;
        Ok(DeviceStatus::decode(payload)?)
    }

    fn write_ha_state(&self) {
        self.state_tx.send_replace(ClimateSnapshot {
            state: self.state(),
            attributes: self.state_attributes(),
        });
    }
}

#[async_trait]
impl ClimateEntity for BroadlinkAcClimate {
    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn temperature_unit(&self) -> UnitOfTemperature {
        UnitOfTemperature::Celsius
    }

    fn supported_features(&self) -> ClimateEntityFeature {
        SUPPORTED_FEATURES
    }

    fn hvac_modes(&self) -> &[HvacMode] {
        &SUPPORTED_HVAC_MODES
    }

    fn fan_modes(&self) -> &[FanMode] {
        &SUPPORTED_FAN_MODES
    }

    fn hvac_mode(&self) -> HvacMode {
        self.state.hvac_mode
    }

    fn fan_mode(&self) -> Option<FanMode> {
        Some(self.state.fan_mode)
    }

    fn current_temperature(&self) -> Option<f64> {
        self.state.current_temperature
    }

    fn target_temperature(&self) -> Option<f64> {
        self.state.target_temperature
    }

    #[instrument(skip(self))]
    async fn update(&mut self) {
        let poll = self.poll().await;
        match self.state.apply_poll(poll, self.fan_fallback) {
            Ok(()) => {
                debug!(
                    entry_id = %self.unique_id,
                    hvac_mode = %self.state.hvac_mode,
                    fan_mode = %self.state.fan_mode,
                    "Updated AC status"
                );
                self.write_ha_state();
            }
            // Keep showing the last known state
            Err(e) => error!(entry_id = %self.unique_id, error = %e, "Failed to get AC status"),
        }
    }

    #[instrument(skip(self))]
    async fn set_temperature(&mut self, temperature: f64) {
        if let Err(e) = self.device.set_temperature(temperature).await {
            warn!(entry_id = %self.unique_id, error = %e, "Set temperature not confirmed by device");
        }
        self.state.set_target_temperature(temperature);
        self.write_ha_state();
    }

    #[instrument(skip(self))]
    async fn set_hvac_mode(&mut self, hvac_mode: HvacMode) {
        if let Err(e) = self.device.set_homeassistant_mode(hvac_mode.as_str()).await {
            warn!(entry_id = %self.unique_id, error = %e, "Set HVAC mode not confirmed by device");
        }
        self.state.set_hvac_mode(hvac_mode);
        self.write_ha_state();
    }

    #[instrument(skip(self))]
    async fn set_fan_mode(&mut self, fan_mode: FanMode) {
        if let Err(e) = self.device.set_fanspeed(&fan_speed_command(fan_mode)).await {
            warn!(entry_id = %self.unique_id, error = %e, "Set fan mode not confirmed by device");
        }
        self.state.set_fan_mode(fan_mode);
        self.write_ha_state();
    }

    async fn turn_on(&mut self) {
        self.set_hvac_mode(HvacMode::Auto).await;
    }

    async fn turn_off(&mut self) {
        self.set_hvac_mode(HvacMode::Off).await;
    }
}
