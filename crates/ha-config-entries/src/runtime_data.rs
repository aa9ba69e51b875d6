//! Per-entry runtime data
//!
//! Integrations keep one live handle (a device client, a coordinator) per
//! config entry. `EntryData` owns those handles keyed by entry_id and is
//! injected into setup instead of being reached through a global map.

use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Runtime data errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntryDataError {
    #[error("No runtime data for entry {0}")]
    NotFound(String),
}

/// Handles keyed by config entry id
pub struct EntryData<T: ?Sized> {
    entries: DashMap<String, Arc<T>>,
}

impl<T: ?Sized> EntryData<T> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Store the handle for an entry, returning the one it replaced
    pub fn insert(&self, entry_id: impl Into<String>, handle: Arc<T>) -> Option<Arc<T>> {
        let entry_id = entry_id.into();
        debug!(entry_id = %entry_id, "Storing runtime data");
        self.entries.insert(entry_id, handle)
    }

    pub fn get(&self, entry_id: &str) -> Result<Arc<T>, EntryDataError> {
        self.entries
            .get(entry_id)
            .map(|handle| Arc::clone(handle.value()))
            .ok_or_else(|| EntryDataError::NotFound(entry_id.to_string()))
    }

    /// Drop the handle for an entry (on unload)
    pub fn remove(&self, entry_id: &str) -> Option<Arc<T>> {
        debug!(entry_id = %entry_id, "Removing runtime data");
        self.entries.remove(entry_id).map(|(_, handle)| handle)
    }

    pub fn contains(&self, entry_id: &str) -> bool {
        self.entries.contains_key(entry_id)
    }

    pub fn entry_ids(&self) -> Vec<String> {
        self.entries.iter().map(|r| r.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ?Sized> Default for EntryData<T> {
    fn default() -> Self {
        Self::new()
    }
}
