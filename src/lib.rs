//! # stepper-link
//!
//! Host-side driver for a linear stepper axis behind a serial-linked
//! microcontroller.
//!
//! ## Features
//!
//! - **Fixed binary protocol**: 8-byte command frames, 4-byte response frames
//! - **Absolute positioning**: position tracked in inches, established by
//!   running into a limit switch
//! - **Remote-aware**: position is discarded when the hand remote or a
//!   controller reset moves the axis without the host's knowledge
//! - **no_std compatible**: core library works without standard library
//! - **Configuration-driven**: per-axis calibration from TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_link::{Axis, AxisController, Direction, Unit};
//! use stepper_link::transport::SerialPortTransport;
//!
//! let link = SerialPortTransport::open("/dev/ttyACM0", 9600, Duration::from_secs(60))?;
//! let mut x = AxisController::builder()
//!     .axis(Axis::X)
//!     .transport(link)
//!     .build()?;
//!
//! // Establish absolute position, then move around.
//! x.to_limit(Direction::Negative)?;
//! x.move_by(Direction::Positive, 2.0, Unit::Centimetre, false)?;
//! x.move_to(4.5, Unit::Inch)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and `log` output
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `log`: Enables logging through the `log` facade
//! - `defmt`: Enables defmt logging for embedded targets
//! - `serialport`: Enables [`transport::SerialPortTransport`] for host serial ports

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must stay first: the logging macros are textually scoped.
#[macro_use]
mod fmt;

// Core modules
pub mod axis;
pub mod command;
pub mod config;
pub mod error;
pub mod motor;
pub mod protocol;
pub mod transport;

// Re-exports for ergonomic API
pub use axis::{Axis, Direction};
pub use command::AxisCommand;
pub use config::{validate_config, MotorConfig, SystemConfig, TravelEnvelope};
pub use error::{Error, Result};
pub use motor::{AxisController, AxisControllerBuilder, Position, PositionEvent};
pub use protocol::{CommandFrame, MoveOutcome, RemoteUsed, ResponseFrame};
pub use transport::Transport;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{to_inches, Inches, Unit};
