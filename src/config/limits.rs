//! Travel envelope between the two limit switches.

use super::units::Inches;

/// Physical travel range of an axis, in inches.
///
/// `min` is where the negative limit switch trips, `max` the positive one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TravelEnvelope {
    /// Position at the negative limit switch.
    pub min: Inches,
    /// Position at the positive limit switch.
    pub max: Inches,
}

impl TravelEnvelope {
    /// Create a new envelope.
    pub const fn new(min: Inches, max: Inches) -> Self {
        Self { min, max }
    }

    /// Check if the envelope is usable (finite, min < max).
    pub fn is_valid(&self) -> bool {
        self.min.0.is_finite() && self.max.0.is_finite() && self.min.0 < self.max.0
    }

    /// Check if a position is within the envelope.
    pub fn contains(&self, position: Inches) -> bool {
        position.0 >= self.min.0 && position.0 <= self.max.0
    }

    /// Nearest position inside the envelope.
    pub fn clamp(&self, position: Inches) -> Inches {
        if position.0 < self.min.0 {
            self.min
        } else if position.0 > self.max.0 {
            self.max
        } else {
            position
        }
    }

    /// Total travel length.
    pub fn span(&self) -> Inches {
        self.max - self.min
    }
}
