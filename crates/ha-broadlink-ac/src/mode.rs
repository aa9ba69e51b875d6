//! Mapping between device-native and normalized modes

use ha_climate::{FanMode, HvacMode};
use std::fmt;
use std::str::FromStr;

/// Operating mode in the device's own vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceMode {
    Cooling,
    Heating,
    Dry,
    Fan,
    Auto,
}

impl DeviceMode {
    pub const ALL: [DeviceMode; 5] = [
        DeviceMode::Cooling,
        DeviceMode::Heating,
        DeviceMode::Dry,
        DeviceMode::Fan,
        DeviceMode::Auto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceMode::Cooling => "COOLING",
            DeviceMode::Heating => "HEATING",
            DeviceMode::Dry => "DRY",
            DeviceMode::Fan => "FAN",
            DeviceMode::Auto => "AUTO",
        }
    }
}

impl fmt::Display for DeviceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeviceMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Fixed bidirectional table between [`DeviceMode`] and [`HvacMode`]
pub struct ModeTable;

impl ModeTable {
    /// Device mode string to HVAC mode
    ///
    /// Case-insensitive. Anything unrecognized maps to `Off`.
    pub fn to_hvac(native: &str) -> HvacMode {
        match native.parse::<DeviceMode>() {
            Ok(mode) => Self::forward(mode),
            Err(()) => HvacMode::Off,
        }
    }

    pub fn forward(mode: DeviceMode) -> HvacMode {
        match mode {
            DeviceMode::Cooling => HvacMode::Cool,
            DeviceMode::Heating => HvacMode::Heat,
            DeviceMode::Dry => HvacMode::Dry,
            DeviceMode::Fan => HvacMode::FanOnly,
            DeviceMode::Auto => HvacMode::Auto,
        }
    }

    /// HVAC mode to device mode; `None` for modes the device cannot run in
    pub fn to_device(hvac_mode: HvacMode) -> Option<DeviceMode> {
        match hvac_mode {
            HvacMode::Cool => Some(DeviceMode::Cooling),
            HvacMode::Heat => Some(DeviceMode::Heating),
            HvacMode::Dry => Some(DeviceMode::Dry),
            HvacMode::FanOnly => Some(DeviceMode::Fan),
            HvacMode::Auto => Some(DeviceMode::Auto),
            HvacMode::Off | HvacMode::HeatCool => None,
        }
    }
}

/// Case-fold the device's fan speed into a [`FanMode`]
pub fn fan_mode_from_device(raw: &str) -> Option<FanMode> {
    raw.parse().ok()
}

/// Fan speed command in the device's uppercase convention
pub fn fan_speed_command(fan_mode: FanMode) -> String {
    fan_mode.as_str().to_ascii_uppercase()
}
