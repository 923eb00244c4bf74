//! Configuration validation.

use crate::axis::Axis;
use crate::error::{ConfigError, Error, Result};

use super::{MotorConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Every axis key names `x`, `y` or `z`
/// - Each motor configuration passes [`validate_motor`]
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (name, motor) in config.axes.iter() {
        name.as_str().parse::<Axis>()?;
        validate_motor(motor)?;
    }

    Ok(())
}

/// Validate one motor configuration.
///
/// Checks:
/// - Pulses per revolution is positive
/// - Turns per inch is finite and positive
/// - The travel envelope is finite with min < max
pub fn validate_motor(config: &MotorConfig) -> Result<()> {
    if config.pulses_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidPulsesPerRevolution(
            config.pulses_per_revolution,
        )));
    }

    if !config.turns_per_inch.is_finite() || config.turns_per_inch <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidTurnsPerInch(
            config.turns_per_inch,
        )));
    }

    if !config.envelope().is_valid() {
        return Err(Error::Config(ConfigError::InvalidTravelEnvelope {
            min: config.position_min.0,
            max: config.position_max.0,
        }));
    }

    Ok(())
}
