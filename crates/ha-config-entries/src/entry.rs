//! Config Entry types
//!
//! A ConfigEntry represents a single instance of an integration's configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Config entry lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConfigEntryState {
    /// Initial state, not yet set up
    #[default]
    NotLoaded,
    /// Currently being configured
    SetupInProgress,
    /// Successfully set up
    Loaded,
    /// Setup failed
    SetupError,
    /// Currently unloading
    UnloadInProgress,
    /// Unload failed (terminal)
    FailedUnload,
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid state transition from {from:?} to {to:?}")]
pub struct InvalidTransition {
    pub from: ConfigEntryState,
    pub to: ConfigEntryState,
}

impl ConfigEntryState {
    /// Check whether `to` is reachable from this state
    ///
    /// ```text
    /// NotLoaded → SetupInProgress → Loaded | SetupError
    /// SetupError → SetupInProgress (retry)
    /// Loaded | SetupError → UnloadInProgress → NotLoaded | FailedUnload
    /// ```
    pub fn can_transition(self, to: ConfigEntryState) -> bool {
        use ConfigEntryState::*;

        matches!(
            (self, to),
            (NotLoaded, SetupInProgress)
                | (SetupInProgress, Loaded)
                | (SetupInProgress, SetupError)
                | (SetupError, SetupInProgress)
                | (Loaded, UnloadInProgress)
                | (SetupError, UnloadInProgress)
                | (UnloadInProgress, NotLoaded)
                | (UnloadInProgress, FailedUnload)
        )
    }
}

/// Source of the config entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConfigEntrySource {
    /// Configured via UI/API
    #[default]
    User,
    /// Imported from YAML config
    Import,
    /// DHCP discovery
    Dhcp,
}

/// A configuration entry for an integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Unique identifier (ULID)
    pub entry_id: String,

    /// Integration domain (e.g., "broadlink_ac")
    pub domain: String,

    /// Human-readable display name
    pub title: String,

    /// Immutable configuration data
    #[serde(default)]
    pub data: HashMap<String, serde_json::Value>,

    /// User-configurable options
    #[serde(default)]
    pub options: HashMap<String, serde_json::Value>,

    /// Optional unique identifier for duplicate prevention
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,

    /// Origin type
    #[serde(default)]
    pub source: ConfigEntrySource,

    /// Current lifecycle state (not persisted)
    #[serde(skip, default)]
    pub state: ConfigEntryState,

    /// Human-readable explanation for failed states
    #[serde(skip, default)]
    pub reason: Option<String>,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl ConfigEntry {
    /// Create a new config entry with a fresh ULID
    pub fn new(domain: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            entry_id: ulid::Ulid::new().to_string(),
            domain: domain.into(),
            title: title.into(),
            data: HashMap::new(),
            options: HashMap::new(),
            unique_id: None,
            source: ConfigEntrySource::User,
            state: ConfigEntryState::NotLoaded,
            reason: None,
            created_at: Utc::now(),
        }
    }

    /// Use a fixed entry id instead of a generated one
    pub fn with_entry_id(mut self, entry_id: impl Into<String>) -> Self {
        self.entry_id = entry_id.into();
        self
    }

    /// Insert a single data key
    pub fn with_data_value(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Insert a single option key
    pub fn with_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Set unique_id
    pub fn with_unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    /// Set source
    pub fn with_source(mut self, source: ConfigEntrySource) -> Self {
        self.source = source;
        self
    }

    /// Check if entry is loaded
    pub fn is_loaded(&self) -> bool {
        self.state == ConfigEntryState::Loaded
    }

    /// Attempt to transition to a new state with validation.
    pub fn try_set_state(
        &mut self,
        new_state: ConfigEntryState,
        reason: Option<String>,
    ) -> Result<(), InvalidTransition> {
        if !self.state.can_transition(new_state) {
            return Err(InvalidTransition {
                from: self.state,
                to: new_state,
            });
        }

        self.state = new_state;
        self.reason = reason;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_entry_new() {
        let entry = ConfigEntry::new("broadlink_ac", "Living room AC");
        assert_eq!(entry.domain, "broadlink_ac");
        assert_eq!(entry.title, "Living room AC");
        assert_eq!(entry.state, ConfigEntryState::NotLoaded);
        assert!(!entry.entry_id.is_empty());
    }

    #[test]
    fn test_config_entry_builder() {
        let entry = ConfigEntry::new("broadlink_ac", "AC")
            .with_entry_id("entry-1")
            .with_data_value("host", serde_json::json!("192.168.1.40"))
            .with_option("scan_interval", serde_json::json!(60))
            .with_unique_id("34:ea:34:aa:bb:cc")
            .with_source(ConfigEntrySource::Dhcp);

        assert_eq!(entry.entry_id, "entry-1");
        assert_eq!(entry.unique_id.as_deref(), Some("34:ea:34:aa:bb:cc"));
        assert_eq!(entry.source, ConfigEntrySource::Dhcp);
        assert!(entry.data.contains_key("host"));
        assert!(entry.options.contains_key("scan_interval"));
    }

    #[test]
    fn test_setup_transitions() {
        let mut entry = ConfigEntry::new("broadlink_ac", "AC");

        entry
            .try_set_state(ConfigEntryState::SetupInProgress, None)
            .unwrap();
        entry.try_set_state(ConfigEntryState::Loaded, None).unwrap();
        assert!(entry.is_loaded());

        // Cannot jump straight back to setup while loaded
        let err = entry
            .try_set_state(ConfigEntryState::SetupInProgress, None)
            .unwrap_err();
        assert_eq!(err.from, ConfigEntryState::Loaded);
        assert_eq!(err.to, ConfigEntryState::SetupInProgress);
    }

    #[test]
    fn test_failed_setup_keeps_reason() {
        let mut entry = ConfigEntry::new("broadlink_ac", "AC");
        entry
            .try_set_state(ConfigEntryState::SetupInProgress, None)
            .unwrap();
        entry
            .try_set_state(ConfigEntryState::SetupError, Some("no device".into()))
            .unwrap();

        assert_eq!(entry.reason.as_deref(), Some("no device"));
        assert!(ConfigEntryState::SetupError.can_transition(ConfigEntryState::SetupInProgress));
    }

    #[test]
    fn test_serde_skips_runtime_state() {
        let mut entry = ConfigEntry::new("broadlink_ac", "AC").with_unique_id("mac");
        entry.state = ConfigEntryState::Loaded;

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: ConfigEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.unique_id.as_deref(), Some("mac"));
        assert_eq!(parsed.state, ConfigEntryState::NotLoaded);
    }
}
