//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::motor::MotorConfig;
use crate::axis::Axis;

/// Root configuration structure from TOML.
///
/// Axes are keyed by their tag (`x`, `y`, `z`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// Per-axis motor configurations.
    #[serde(default)]
    pub axes: FnvIndexMap<String<8>, MotorConfig, 4>,
}

impl SystemConfig {
    /// Get the motor configuration for an axis.
    pub fn motor(&self, axis: Axis) -> Option<&MotorConfig> {
        self.axes
            .iter()
            .find(|(k, _)| k.as_str() == axis.as_str())
            .map(|(_, v)| v)
    }

    /// Motor configuration for an axis, or the stock defaults if absent.
    pub fn motor_or_default(&self, axis: Axis) -> MotorConfig {
        self.motor(axis).cloned().unwrap_or_default()
    }

    /// List all configured axis keys.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(|s| s.as_str())
    }
}
