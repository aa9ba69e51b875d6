//! Normalized climate state and the status projection

use ha_climate::{FanMode, HvacMode};
use tracing::warn;

use crate::error::PollError;
use crate::mode::{fan_mode_from_device, ModeTable};
use crate::status::{DeviceStatus, PowerState};

/// Fields written by a command that no poll has confirmed yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingFields {
    pub target_temperature: bool,
    pub hvac_mode: bool,
    pub fan_mode: bool,
}

impl PendingFields {
    pub fn any(&self) -> bool {
        self.target_temperature || self.hvac_mode || self.fan_mode
    }
}

/// What the entity shows the host
///
/// Overwritten wholesale by every successful poll. Commands overwrite single
/// fields optimistically and flag them in `pending` until the next poll
/// reconciles them against the device.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedClimateState {
    pub current_temperature: Option<f64>,
    pub target_temperature: Option<f64>,
    pub hvac_mode: HvacMode,
    pub fan_mode: FanMode,
    pub pending: PendingFields,
}

impl NormalizedClimateState {
    /// Apply one poll result
    ///
    /// On failure every field, including `pending`, is left as it was and
    /// the error is handed back for logging.
    pub fn apply_poll(
        &mut self,
        poll: Result<DeviceStatus, PollError>,
        fallback_fan: FanMode,
    ) -> Result<(), PollError> {
        let status = poll?;
        *self = project(&status, fallback_fan);
        Ok(())
    }

    pub fn set_target_temperature(&mut self, temperature: f64) {
        self.target_temperature = Some(temperature);
        self.pending.target_temperature = true;
    }

    pub fn set_hvac_mode(&mut self, hvac_mode: HvacMode) {
        self.hvac_mode = hvac_mode;
        self.pending.hvac_mode = true;
    }

    pub fn set_fan_mode(&mut self, fan_mode: FanMode) {
        self.fan_mode = fan_mode;
        self.pending.fan_mode = true;
    }
}

/// Project a device status into normalized state
///
/// Temperatures pass through unchanged (the device reports °C). Power off
/// wins over whatever mode the device still reports, or the lack of one.
/// A fan speed outside the four known levels falls back to `fallback_fan`.
pub fn project(status: &DeviceStatus, fallback_fan: FanMode) -> NormalizedClimateState {
    let hvac_mode = match status.power {
        PowerState::Off => HvacMode::Off,
        PowerState::On => status
            .mode
            .as_deref()
            .map_or(HvacMode::Off, ModeTable::to_hvac),
    };

    let fan_mode = fan_mode_from_device(&status.fanspeed).unwrap_or_else(|| {
        warn!(
            fanspeed = %status.fanspeed,
            fallback = %fallback_fan,
            "Unrecognized fan speed from device"
        );
        fallback_fan
    });

    NormalizedClimateState {
        current_temperature: status.ambient_temp,
        target_temperature: status.temp,
        hvac_mode,
        fan_mode,
        pending: PendingFields::default(),
    }
}
