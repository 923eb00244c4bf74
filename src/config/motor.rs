//! Per-axis motor configuration.

use serde::Deserialize;

use super::limits::TravelEnvelope;
use super::units::Inches;
use crate::protocol::{END_BYTE, START_BYTE};

/// Default pulses per motor revolution.
pub const DEFAULT_PULSES_PER_REVOLUTION: u32 = 400;

/// Default leadscrew turns per inch of travel (625/123).
pub const DEFAULT_TURNS_PER_INCH: f64 = 625.0 / 123.0;

/// Default negative travel limit in inches.
pub const DEFAULT_POSITION_MIN: f64 = 0.0;

/// Default positive travel limit in inches.
pub const DEFAULT_POSITION_MAX: f64 = 9.8;

/// Constant parameters of one axis.
///
/// Every field has a default, so an empty TOML table yields the stock axis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotorConfig {
    /// Pulses the driver needs for one motor revolution.
    pub pulses_per_revolution: u32,

    /// Motor revolutions per inch of carriage travel.
    pub turns_per_inch: f64,

    /// Position at the negative limit switch.
    #[serde(rename = "position_min_in")]
    pub position_min: Inches,

    /// Position at the positive limit switch.
    #[serde(rename = "position_max_in")]
    pub position_max: Inches,

    /// Frame start delimiter.
    pub start_byte: u8,

    /// Frame end delimiter.
    pub end_byte: u8,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            pulses_per_revolution: DEFAULT_PULSES_PER_REVOLUTION,
            turns_per_inch: DEFAULT_TURNS_PER_INCH,
            position_min: Inches(DEFAULT_POSITION_MIN),
            position_max: Inches(DEFAULT_POSITION_MAX),
            start_byte: START_BYTE,
            end_byte: END_BYTE,
        }
    }
}

impl MotorConfig {
    /// Pulses per inch of travel, before rounding.
    pub fn pulses_per_inch(&self) -> f64 {
        self.pulses_per_revolution as f64 * self.turns_per_inch
    }

    /// Travel envelope between the limit switches.
    pub fn envelope(&self) -> TravelEnvelope {
        TravelEnvelope::new(self.position_min, self.position_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MotorConfig::default();

        assert_eq!(config.pulses_per_revolution, 400);
        assert_eq!(config.position_min, Inches(0.0));
        assert_eq!(config.position_max, Inches(9.8));
        assert_eq!(config.start_byte, 0x07);
        assert_eq!(config.end_byte, 0x0A);
    }

    #[test]
    fn test_pulses_per_inch() {
        let config = MotorConfig::default();

        // 400 * 625 / 123 = 2032.52
        assert!((config.pulses_per_inch() - 2032.520325).abs() < 1e-5);
    }
}
