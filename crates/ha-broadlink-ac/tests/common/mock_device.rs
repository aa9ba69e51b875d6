//! Mock device-control object for testing
//!
//! Serves a scripted status payload and records every call it receives.

use async_trait::async_trait;
use ha_broadlink_ac::{AcDevice, DeviceError};
use serde_json::{json, Value};
use std::sync::Mutex;

/// A call received by the mock device
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    GetStatus { force_update: bool },
    SetTemperature(f64),
    SetMode(String),
    SetFanSpeed(String),
}

/// A mock air conditioner
#[derive(Debug)]
pub struct MockAcDevice {
    status: Mutex<Result<Value, DeviceError>>,
    command_error: Mutex<Option<DeviceError>>,
    calls: Mutex<Vec<DeviceCall>>,
}

impl MockAcDevice {
    /// Create a device that reports `status` on every read
    pub fn new(status: Value) -> Self {
        Self {
            status: Mutex::new(Ok(status)),
            command_error: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A device that is cooling at 24 °C in a 22.5 °C room, fan low
    pub fn cooling() -> Self {
        Self::new(status_payload(22.5, 24.0, "ON", "cooling", "low"))
    }

    /// Make every command fail with `error`
    pub fn with_command_error(self, error: DeviceError) -> Self {
        *self.command_error.lock().unwrap() = Some(error);
        self
    }

    /// Change what the next reads return
    pub fn set_status(&self, status: Value) {
        *self.status.lock().unwrap() = Ok(status);
    }

    /// Make the next reads fail
    pub fn fail_status(&self, error: DeviceError) {
        *self.status.lock().unwrap() = Err(error);
    }

    /// All calls received so far
    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than status reads
    pub fn commands(&self) -> Vec<DeviceCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, DeviceCall::GetStatus { .. }))
            .collect()
    }

    /// Number of status reads
    pub fn status_reads(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, DeviceCall::GetStatus { .. }))
            .count()
    }

    fn record(&self, call: DeviceCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn command_result(&self) -> Result<(), DeviceError> {
        match self.command_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AcDevice for MockAcDevice {
    async fn get_ac_status(&self, force_update: bool) -> Result<Value, DeviceError> {
        self.record(DeviceCall::GetStatus { force_update });
        self.status.lock().unwrap().clone()
    }

    async fn set_temperature(&self, temperature: f64) -> Result<(), DeviceError> {
        self.record(DeviceCall::SetTemperature(temperature));
        self.command_result()
    }

    async fn set_homeassistant_mode(&self, mode: &str) -> Result<(), DeviceError> {
        self.record(DeviceCall::SetMode(mode.to_string()));
        self.command_result()
    }

    async fn set_fanspeed(&self, speed: &str) -> Result<(), DeviceError> {
        self.record(DeviceCall::SetFanSpeed(speed.to_string()));
        self.command_result()
    }
}

/// Build a status dictionary the way the device reports it
pub fn status_payload(
    ambient_temp: f64,
    temp: f64,
    power: &str,
    mode: &str,
    fanspeed: &str,
) -> Value {
    json!({
        "ambient_temp": ambient_temp,
        "temp": temp,
        "power": power,
        "mode": mode,
        "fanspeed": fanspeed,
    })
}
