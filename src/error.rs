//! Error types for stepper-link.
//!
//! Provides unified error handling across configuration, command encoding,
//! the wire protocol, position tracking and the serial transport.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-link operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Malformed or unencodable command input
    Command(CommandError),
    /// Response frame could not be understood
    Protocol(ProtocolError),
    /// Controller reported a motion failure, or position tracking forbids the move
    Motion(MotionError),
    /// Serial link failure
    Transport(TransportError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Pulses per revolution must be > 0
    InvalidPulsesPerRevolution(u32),
    /// Turns per inch must be finite and > 0
    InvalidTurnsPerInch(f64),
    /// Travel envelope must be finite with min < max
    InvalidTravelEnvelope {
        /// Minimum position in inches
        min: f64,
        /// Maximum position in inches
        max: f64,
    },
    /// Initial position lies outside the travel envelope
    InitialPositionOutOfRange {
        /// Requested initial position in inches
        position: f64,
        /// Minimum position in inches
        min: f64,
        /// Maximum position in inches
        max: f64,
    },
    /// Axis has no entry in the configuration
    AxisNotFound(heapless::String<8>),
    /// A required builder field was not supplied
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Errors raised before any byte is sent.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// Axis tag is not one of `x`, `y`, `z`
    InvalidAxis(heapless::String<16>),
    /// Direction tag is not one of `+`, `-`
    InvalidDirection(heapless::String<16>),
    /// Unit tag is not one of `in`, `cm`, `mm`
    InvalidUnit(heapless::String<16>),
    /// Distances are magnitudes; direction carries the sign
    NegativeDistance(f64),
    /// Pulse count does not fit in a single command
    DistanceTooLarge {
        /// Rounded pulse count that was requested
        pulses: f64,
    },
    /// Text command could not be parsed
    InvalidCommand(heapless::String<64>),
}

/// Response decoding errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolError {
    /// Start or end delimiter did not match
    MalformedResponse([u8; 4]),
    /// Status (or remote flag) byte matches no known code
    UnknownStatus(u8),
}

/// Motion outcome errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// A limit switch triggered during a move that was not seeking a limit
    UnexpectedLimit,
    /// The controller was reset mid-move; position is now unknown
    DeviceResetDuringMove,
    /// Absolute move requested without an established position
    PositionUnknown,
}

/// Serial link errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// Discarding pending input failed
    Flush,
    /// Sending a command frame failed
    Write,
    /// Receiving a response frame failed
    Read,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Command(e) => write!(f, "Command error: {}", e),
            Error::Protocol(e) => write!(f, "Protocol error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
            Error::Transport(e) => write!(f, "Transport error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidPulsesPerRevolution(v) => {
                write!(f, "Invalid pulses per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidTurnsPerInch(v) => {
                write!(f, "Invalid turns per inch: {}. Must be > 0", v)
            }
            ConfigError::InvalidTravelEnvelope { min, max } => {
                write!(f, "Invalid travel envelope: min ({}) must be < max ({})", min, max)
            }
            ConfigError::InitialPositionOutOfRange { position, min, max } => {
                write!(f, "Initial position {} outside travel envelope [{}, {}]", position, min, max)
            }
            ConfigError::AxisNotFound(name) => write!(f, "Axis '{}' not found", name),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidAxis(tag) => {
                write!(f, "Invalid axis '{}'. Valid values: x, y, z", tag)
            }
            CommandError::InvalidDirection(tag) => {
                write!(f, "Invalid direction '{}'. Valid values: +, -", tag)
            }
            CommandError::InvalidUnit(tag) => {
                write!(f, "Invalid unit '{}'. Valid values: in, cm, mm", tag)
            }
            CommandError::NegativeDistance(d) => {
                write!(f, "Negative distance {}. Distance must be >= 0", d)
            }
            CommandError::DistanceTooLarge { pulses } => write!(
                f,
                "Distance of {} pulses is too large for one command, split the move",
                pulses
            ),
            CommandError::InvalidCommand(msg) => write!(f, "Invalid command: {}", msg),
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MalformedResponse(frame) => {
                write!(f, "Malformed response frame {:02X?}", frame)
            }
            ProtocolError::UnknownStatus(status) => {
                write!(f, "Unknown status byte {:#04x}", status)
            }
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::UnexpectedLimit => write!(f, "Unexpectedly hit a limit switch"),
            MotionError::DeviceResetDuringMove => {
                write!(f, "Controller was reset during movement, position is unknown")
            }
            MotionError::PositionUnknown => {
                write!(f, "Position unknown, seek a limit before absolute moves")
            }
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Flush => write!(f, "failed to discard pending input"),
            TransportError::Write => write!(f, "failed to write command frame"),
            TransportError::Read => write!(f, "failed to read response frame"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}

impl From<ProtocolError> for Error {
    fn from(e: ProtocolError) -> Self {
        Error::Protocol(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e)
    }
}

/// Copy `tag` into a bounded string, truncating on a char boundary.
pub(crate) fn truncated<const N: usize>(tag: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in tag.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

#[cfg(feature = "std")]
impl std::error::Error for ProtocolError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}

#[cfg(feature = "std")]
impl std::error::Error for TransportError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_keeps_short_tags() {
        let s: heapless::String<16> = truncated("inch");
        assert_eq!(s.as_str(), "inch");
    }

    #[test]
    fn test_truncated_cuts_long_tags() {
        let s: heapless::String<4> = truncated("millimetre");
        assert_eq!(s.as_str(), "mill");
    }

    #[test]
    fn test_error_conversion() {
        let e: Error = MotionError::PositionUnknown.into();
        assert_eq!(e, Error::Motion(MotionError::PositionUnknown));
    }
}
