//! Supported feature flags for climate entities

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Bit set of features a climate entity supports
///
/// Values match the host's `ClimateEntityFeature` flags so the integer can
/// be written verbatim into the `supported_features` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClimateEntityFeature(u32);

impl ClimateEntityFeature {
    pub const TARGET_TEMPERATURE: Self = Self(1);
    pub const TARGET_TEMPERATURE_RANGE: Self = Self(2);
    pub const TARGET_HUMIDITY: Self = Self(4);
    pub const FAN_MODE: Self = Self(8);
    pub const PRESET_MODE: Self = Self(16);
    pub const SWING_MODE: Self = Self(32);
    pub const AUX_HEAT: Self = Self(64);
    pub const TURN_OFF: Self = Self(128);
    pub const TURN_ON: Self = Self(256);

    /// No features
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bit value
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Combine two sets (usable in const context)
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check that every flag in `other` is set
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ClimateEntityFeature {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for ClimateEntityFeature {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_contains() {
        let features = ClimateEntityFeature::TARGET_TEMPERATURE
            | ClimateEntityFeature::FAN_MODE
            | ClimateEntityFeature::TURN_ON
            | ClimateEntityFeature::TURN_OFF;

        assert_eq!(features.bits(), 1 + 8 + 128 + 256);
        assert!(features.contains(ClimateEntityFeature::FAN_MODE));
        assert!(!features.contains(ClimateEntityFeature::SWING_MODE));
        assert!(features.contains(ClimateEntityFeature::empty()));
    }

    #[test]
    fn test_serializes_as_integer() {
        let mut features = ClimateEntityFeature::empty();
        features |= ClimateEntityFeature::TURN_OFF;
        assert_eq!(serde_json::to_value(features).unwrap(), serde_json::json!(128));
    }
}
