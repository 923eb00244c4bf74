//! Axis and direction identifiers.

use core::fmt;
use core::str::FromStr;

use serde::Deserialize;

use crate::error::{truncated, CommandError};

/// Linear axis driven by one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// X axis (`00`).
    X,
    /// Y axis (`01`).
    Y,
    /// Z axis (`10`).
    Z,
}

impl Axis {
    /// All axes in wire-code order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// 2-bit wire code.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Axis::X => 0b00,
            Axis::Y => 0b01,
            Axis::Z => 0b10,
        }
    }

    /// Axis for a 2-bit wire code, `None` for the unused `11`.
    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code & 0b11 {
            0b00 => Some(Axis::X),
            0b01 => Some(Axis::Y),
            0b10 => Some(Axis::Z),
            _ => None,
        }
    }

    /// Lowercase tag, also used as the configuration key.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(CommandError::InvalidAxis(truncated(other))),
        }
    }
}

/// Direction of travel along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward `position_max`.
    Positive,
    /// Toward `position_min`.
    Negative,
}

impl Direction {
    /// Direction that closes a signed distance (`+` for zero).
    #[inline]
    pub fn from_delta(delta: f64) -> Self {
        if delta < 0.0 {
            Direction::Negative
        } else {
            Direction::Positive
        }
    }

    /// Wire bit (`+` = 0, `-` = 1).
    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            Direction::Positive => 0,
            Direction::Negative => 1,
        }
    }

    /// `+` or `-`.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Direction::Positive => '+',
            Direction::Negative => '-',
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Direction {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Direction::Positive),
            "-" => Ok(Direction::Negative),
            other => Err(CommandError::InvalidDirection(truncated(other))),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = CommandError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let mut buf = [0u8; 4];
        c.encode_utf8(&mut buf).parse()
    }
}
