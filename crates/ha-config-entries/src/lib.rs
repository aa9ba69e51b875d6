//! Config Entries
//!
//! This crate provides the configuration entry types for Home Assistant.
//! Config entries represent individual integration instances; each one
//! owns its runtime handle for as long as it is loaded.
//!
//! # Key Types
//!
//! - [`ConfigEntry`] - A single integration configuration
//! - [`ConfigEntryState`] - Lifecycle state of an entry
//! - [`EntryData`] - Runtime handles keyed by entry_id

pub mod entry;
pub mod runtime_data;

// Re-export main types
pub use entry::{ConfigEntry, ConfigEntrySource, ConfigEntryState, InvalidTransition};
pub use runtime_data::{EntryData, EntryDataError};
