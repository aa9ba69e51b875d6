//! Error types for the Broadlink AC integration

use ha_config_entries::{EntryDataError, InvalidTransition};
use thiserror::Error;

use crate::config::ConfigError;
use crate::device::DeviceError;
use crate::status::StatusError;

/// A status read that produced no usable status
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PollError {
    #[error("failed to get AC status: {0}")]
    Device(#[from] DeviceError),

    #[error("failed to decode AC status: {0}")]
    Status(#[from] StatusError),
}

/// Errors setting up or unloading a config entry
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no device handle: {0}")]
    MissingDevice(#[from] EntryDataError),

    #[error("invalid config entry: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    State(#[from] InvalidTransition),
}
