//! Configuration module for stepper-link.
//!
//! Provides per-axis motor parameters, loaded from TOML files (with `std`
//! feature) or built from defaults.

mod limits;
mod motor;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use limits::TravelEnvelope;
pub use motor::{
    MotorConfig, DEFAULT_POSITION_MAX, DEFAULT_POSITION_MIN, DEFAULT_PULSES_PER_REVOLUTION,
    DEFAULT_TURNS_PER_INCH,
};
pub use system::SystemConfig;
pub use validation::{validate_config, validate_motor};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{to_inches, Inches, Unit};
