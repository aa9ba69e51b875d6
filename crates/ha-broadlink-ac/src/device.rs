//! Device-control seam
//!
//! The transport to the physical air conditioner lives outside this crate.
//! The integration only sees this trait, injected per config entry.

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by the device-control object
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeviceError {
    #[error("device unreachable: {0}")]
    Unreachable(String),

    #[error("device rejected command: {0}")]
    Rejected(String),

    #[error("device timed out")]
    Timeout,
}

/// Control handle for one air conditioner
///
/// Mirrors the vendor `ac_db` object: one status read and three setters.
#[async_trait]
pub trait AcDevice: Send + Sync {
    /// Read the status record
    ///
    /// Returns the dictionary-shaped payload with keys `ambient_temp`,
    /// `temp`, `power`, `mode` and `fanspeed`. `force_update` bypasses any
    /// cache the device object keeps.
    async fn get_ac_status(&self, force_update: bool) -> Result<serde_json::Value, DeviceError>;

    async fn set_temperature(&self, temperature: f64) -> Result<(), DeviceError>;

    /// Set the operating mode
    ///
    /// Takes the host's HVAC mode label (e.g. `"cool"`, `"fan_only"`), not
    /// the device's native `COOLING`/`FAN` codes. The device object does its
    /// own translation.
    async fn set_homeassistant_mode(&self, mode: &str) -> Result<(), DeviceError>;

    /// Set the fan speed using the device's uppercase names (`"LOW"`)
    async fn set_fanspeed(&self, speed: &str) -> Result<(), DeviceError>;
}
