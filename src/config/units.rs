//! Unit types for linear distances.
//!
//! Positions are tracked in inches; callers may express distances in inches,
//! centimetres or millimetres.

use core::fmt;
use core::ops::{Add, Sub};
use core::str::FromStr;

use serde::Deserialize;

use crate::error::{truncated, CommandError};

/// Centimetres per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Linear distance or position in inches.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Inches(pub f64);

impl Inches {
    /// Create a new Inches value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Absolute magnitude.
    #[inline]
    pub fn abs(self) -> Self {
        Self(libm::fabs(self.0))
    }
}

impl Add for Inches {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Inches {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in", self.0)
    }
}

/// Length unit accepted by motion commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    /// Inches (`in`).
    #[default]
    #[serde(rename = "in")]
    Inch,
    /// Centimetres (`cm`).
    #[serde(rename = "cm")]
    Centimetre,
    /// Millimetres (`mm`).
    #[serde(rename = "mm")]
    Millimetre,
}

impl Unit {
    /// Convert `distance` in this unit to inches. No rounding is applied.
    #[inline]
    pub fn to_inches(self, distance: f64) -> Inches {
        match self {
            Unit::Inch => Inches(distance),
            Unit::Centimetre => Inches(distance / CM_PER_INCH),
            Unit::Millimetre => Inches(distance / MM_PER_INCH),
        }
    }

    /// Short tag (`in`, `cm`, `mm`).
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Unit::Inch => "in",
            Unit::Centimetre => "cm",
            Unit::Millimetre => "mm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Unit::Inch),
            "cm" => Ok(Unit::Centimetre),
            "mm" => Ok(Unit::Millimetre),
            other => Err(CommandError::InvalidUnit(truncated(other))),
        }
    }
}

/// Convert a distance with a textual unit tag to inches.
///
/// # Errors
///
/// Returns `CommandError::InvalidUnit` if `unit` is not `in`, `cm` or `mm`.
pub fn to_inches(distance: f64, unit: &str) -> Result<Inches, CommandError> {
    Ok(unit.parse::<Unit>()?.to_inches(distance))
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Interpret as inches.
    fn inches(self) -> Inches;
    /// Convert from centimetres.
    fn cm(self) -> Inches;
    /// Convert from millimetres.
    fn mm(self) -> Inches;
}

impl UnitExt for f64 {
    #[inline]
    fn inches(self) -> Inches {
        Unit::Inch.to_inches(self)
    }

    #[inline]
    fn cm(self) -> Inches {
        Unit::Centimetre.to_inches(self)
    }

    #[inline]
    fn mm(self) -> Inches {
        Unit::Millimetre.to_inches(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_is_identity() {
        assert_eq!(Unit::Inch.to_inches(3.25), Inches(3.25));
    }

    #[test]
    fn test_metric_conversion() {
        assert!((Unit::Centimetre.to_inches(2.54).value() - 1.0).abs() < 1e-12);
        assert!((Unit::Millimetre.to_inches(254.0).value() - 10.0).abs() < 1e-12);
        assert!((25.4.mm().value() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_inches_rejects_unknown_tag() {
        assert!(to_inches(1.0, "cm").is_ok());
        assert!(matches!(
            to_inches(1.0, "ft"),
            Err(CommandError::InvalidUnit(tag)) if tag.as_str() == "ft"
        ));
        assert!(to_inches(1.0, "inch").is_err());
    }

    #[test]
    fn test_negative_distance_passes_through() {
        assert_eq!(Unit::Inch.to_inches(-1.0), Inches(-1.0));
    }
}
