//! Common test utilities for the Broadlink AC integration
//!
//! Provides a scripted mock device and config entry helpers.

#![allow(dead_code)]

mod mock_device;

pub use mock_device::*;

use ha_broadlink_ac::{BroadlinkAcClimate, BroadlinkAcConfig, DOMAIN};
use ha_config_entries::ConfigEntry;
use serde_json::json;
use std::sync::Arc;

/// Entry id used by most tests
pub const ENTRY_ID: &str = "01HZXAC0000000000000000000";

/// A config entry with the minimum required data
pub fn mock_entry() -> ConfigEntry {
    ConfigEntry::new(DOMAIN, "Broadlink AC")
        .with_entry_id(ENTRY_ID)
        .with_data_value("host", json!("192.168.1.40"))
        .with_data_value("mac", json!("34:ea:34:aa:bb:cc"))
}

/// Build an entity directly on top of `device`
pub fn climate_with(device: &Arc<MockAcDevice>) -> BroadlinkAcClimate {
    let config = BroadlinkAcConfig::from_entry(&mock_entry()).unwrap();
    BroadlinkAcClimate::new(device.clone(), ENTRY_ID, &config)
}
