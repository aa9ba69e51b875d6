//! Broadlink AC integration
//!
//! Exposes an air conditioner driven through a vendor device-control object
//! as a climate entity. The integration is a thin mapping layer:
//!
//! - [`DeviceStatus`] decodes the device's status dictionary
//! - [`ModeTable`] maps native operating modes to and from [`HvacMode`]
//! - [`project`] turns a status into [`NormalizedClimateState`]
//! - [`BroadlinkAcClimate`] forwards host commands to the [`AcDevice`] and
//!   applies them optimistically until the next poll
//!
//! [`HvacMode`]: ha_climate::HvacMode

pub mod climate;
pub mod config;
pub mod device;
pub mod error;
pub mod mode;
pub mod polling;
pub mod setup;
pub mod state;
pub mod status;

pub use climate::{BroadlinkAcClimate, ClimateSnapshot};
pub use config::{BroadlinkAcConfig, ConfigError};
pub use device::{AcDevice, DeviceError};
pub use error::{PollError, SetupError};
pub use mode::{DeviceMode, ModeTable};
pub use polling::PollingTask;
pub use setup::{async_setup_entry, async_unload_entry};
pub use state::{project, NormalizedClimateState, PendingFields};
pub use status::{DeviceStatus, PowerState, StatusError};

/// Integration domain
pub const DOMAIN: &str = "broadlink_ac";
