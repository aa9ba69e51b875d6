//! Config entry setup and unload

use ha_config_entries::{ConfigEntry, ConfigEntryState, EntryData};
use tracing::{error, info};

use crate::climate::BroadlinkAcClimate;
use crate::config::BroadlinkAcConfig;
use crate::device::AcDevice;
use crate::error::SetupError;

/// Set up the climate entity for a config entry
///
/// The device handle must already be stored in `devices` under the entry's
/// id. The new entity is handed to `add_entities`; no poll runs before it
/// is added.
pub async fn async_setup_entry<F>(
    devices: &EntryData<dyn AcDevice>,
    entry: &mut ConfigEntry,
    add_entities: F,
) -> Result<(), SetupError>
where
    F: FnOnce(Vec<BroadlinkAcClimate>),
{
    entry.try_set_state(ConfigEntryState::SetupInProgress, None)?;

    match build_entity(devices, entry) {
        Ok(entity) => {
            add_entities(vec![entity]);
            entry.try_set_state(ConfigEntryState::Loaded, None)?;
            info!(entry_id = %entry.entry_id, "Set up Broadlink AC");
            Ok(())
        }
        Err(e) => {
            error!(entry_id = %entry.entry_id, error = %e, "Broadlink AC setup failed");
            entry.try_set_state(ConfigEntryState::SetupError, Some(e.to_string()))?;
            Err(e)
        }
    }
}

fn build_entity(
    devices: &EntryData<dyn AcDevice>,
    entry: &ConfigEntry,
) -> Result<BroadlinkAcClimate, SetupError> {
    let device = devices.get(&entry.entry_id)?;
    let config = BroadlinkAcConfig::from_entry(entry)?;
    Ok(BroadlinkAcClimate::new(device, &entry.entry_id, &config))
}

/// Unload a config entry, releasing its device handle
///
/// Returns whether a handle was stored for the entry.
pub async fn async_unload_entry(
    devices: &EntryData<dyn AcDevice>,
    entry: &mut ConfigEntry,
) -> Result<bool, SetupError> {
    entry.try_set_state(ConfigEntryState::UnloadInProgress, None)?;
    let removed = devices.remove(&entry.entry_id).is_some();
    entry.try_set_state(ConfigEntryState::NotLoaded, None)?;
    info!(entry_id = %entry.entry_id, "Unloaded Broadlink AC");
    Ok(removed)
}
