//! Builder pattern for AxisController.

use crate::axis::Axis;
use crate::config::units::Inches;
use crate::config::{validate_motor, MotorConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::transport::Transport;

use super::driver::AxisController;
use super::position::Position;

/// Builder for creating AxisController instances.
pub struct AxisControllerBuilder<T>
where
    T: Transport,
{
    axis: Option<Axis>,
    transport: Option<T>,
    config: MotorConfig,
    initial_position: Option<Inches>,
}

impl<T> Default for AxisControllerBuilder<T>
where
    T: Transport,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AxisControllerBuilder<T>
where
    T: Transport,
{
    /// Create a new builder with the stock motor configuration.
    pub fn new() -> Self {
        Self {
            axis: None,
            transport: None,
            config: MotorConfig::default(),
            initial_position: None,
        }
    }

    /// Set the axis.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Set the serial link.
    pub fn transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set pulses per motor revolution.
    pub fn pulses_per_revolution(mut self, pulses: u32) -> Self {
        self.config.pulses_per_revolution = pulses;
        self
    }

    /// Set motor revolutions per inch of travel.
    pub fn turns_per_inch(mut self, turns: f64) -> Self {
        self.config.turns_per_inch = turns;
        self
    }

    /// Set the travel envelope between the limit switches.
    pub fn travel(mut self, min: Inches, max: Inches) -> Self {
        self.config.position_min = min;
        self.config.position_max = max;
        self
    }

    /// Start with a known position instead of an unknown one.
    pub fn initial_position(mut self, position: Inches) -> Self {
        self.initial_position = Some(position);
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Configure from SystemConfig by axis.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AxisNotFound` if the configuration has no entry
    /// for `axis`.
    pub fn from_config(self, config: &SystemConfig, axis: Axis) -> Result<Self> {
        let motor_config = config.motor(axis).ok_or_else(|| {
            Error::Config(ConfigError::AxisNotFound(crate::error::truncated(
                axis.as_str(),
            )))
        })?;

        Ok(self.axis(axis).from_motor_config(motor_config))
    }

    /// Build the AxisController.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, the motor
    /// configuration is invalid, or the initial position lies outside the
    /// travel envelope.
    pub fn build(self) -> Result<AxisController<T>> {
        let axis = self
            .axis
            .ok_or(Error::Config(ConfigError::MissingField("axis")))?;

        let transport = self
            .transport
            .ok_or(Error::Config(ConfigError::MissingField("transport")))?;

        validate_motor(&self.config)?;

        let position = match self.initial_position {
            Some(p) if self.config.envelope().contains(p) => Position::Known(p),
            Some(p) => {
                return Err(Error::Config(ConfigError::InitialPositionOutOfRange {
                    position: p.0,
                    min: self.config.position_min.0,
                    max: self.config.position_max.0,
                }))
            }
            None => Position::Unknown,
        };

        info!(
            "{} axis: {} pulses/rev, {} turns/in, travel {}..{} in",
            axis.as_str(),
            self.config.pulses_per_revolution,
            self.config.turns_per_inch,
            self.config.position_min.0,
            self.config.position_max.0
        );

        Ok(AxisController::with_position(
            axis,
            transport,
            self.config,
            position,
        ))
    }
}
