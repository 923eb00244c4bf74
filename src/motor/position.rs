//! Position tracking for a limit-switched axis.
//!
//! The host never observes the carriage directly. Position is inferred from
//! completed moves and re-established by running into a limit switch.

use crate::axis::Direction;
use crate::config::units::Inches;
use crate::config::TravelEnvelope;

/// Tracked absolute position of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    /// No reference established, or the reference was lost.
    #[default]
    Unknown,
    /// Position in inches, always within the travel envelope.
    Known(Inches),
}

/// Something that happened to the axis, as far as position tracking cares.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PositionEvent {
    /// A limit-seeking move stopped at the switch in `direction`.
    LimitReached(Direction),
    /// A regular move completed.
    MovedSuccessfully {
        /// Direction of travel.
        direction: Direction,
        /// Distance travelled.
        distance: Inches,
    },
    /// The controller restarted.
    Reset,
    /// The hand remote moved the axis behind the host's back.
    RemoteActivityDetected,
}

impl Position {
    /// Known position, if any.
    #[inline]
    pub fn known(self) -> Option<Inches> {
        match self {
            Position::Known(p) => Some(p),
            Position::Unknown => None,
        }
    }

    /// Check if a reference has been established.
    #[inline]
    pub fn is_known(self) -> bool {
        matches!(self, Position::Known(_))
    }

    /// Position after `event`.
    ///
    /// Incremental updates are clamped into `envelope` so a `Known` value never
    /// leaves the travel range.
    pub fn apply(self, event: PositionEvent, envelope: &TravelEnvelope) -> Position {
        match event {
            PositionEvent::LimitReached(Direction::Positive) => Position::Known(envelope.max),
            PositionEvent::LimitReached(Direction::Negative) => Position::Known(envelope.min),
            PositionEvent::MovedSuccessfully { direction, distance } => match self {
                Position::Known(p) => {
                    Position::Known(envelope.clamp(Inches(p.0 + direction.sign() * distance.0)))
                }
                Position::Unknown => Position::Unknown,
            },
            PositionEvent::Reset | PositionEvent::RemoteActivityDetected => Position::Unknown,
        }
    }
}
