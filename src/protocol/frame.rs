//! Fixed-size wire frames.
//!
//! Command frame (host → controller, 8 bytes):
//!
//! ```text
//! [start, flags, limit, p3, p2, p1, p0, end]
//!  flags: bits 7-6 axis, bit 5 direction, bit 0 remote check
//!  limit: 0xFF when seeking a limit switch, else 0x00
//!  p3..p0: pulse count, big-endian
//! ```
//!
//! Response frame (controller → host, 4 bytes): `[start, status, aux, end]`.

use crate::axis::{Axis, Direction};

/// Frame start delimiter.
pub const START_BYTE: u8 = 0x07;

/// Frame end delimiter.
pub const END_BYTE: u8 = 0x0A;

/// Length of a command frame in bytes.
pub const COMMAND_FRAME_LEN: usize = 8;

/// Length of a response frame in bytes.
pub const RESPONSE_FRAME_LEN: usize = 4;

/// `limit` byte value requesting a limit seek.
pub const LIMIT_SEEK_FLAG: u8 = 0xFF;

/// Status: move completed.
pub const STATUS_SUCCESS: u8 = 0xF0;

/// Status: a limit switch stopped the move.
pub const STATUS_LIMIT_HIT: u8 = 0x0F;

/// Status: the controller restarted during the move.
pub const STATUS_DEVICE_RESET: u8 = 0xFF;

const AXIS_SHIFT: u8 = 6;
const DIRECTION_SHIFT: u8 = 5;
const REMOTE_CHECK_BIT: u8 = 0b0000_0001;

/// Outbound 8-byte command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandFrame([u8; COMMAND_FRAME_LEN]);

impl CommandFrame {
    pub(crate) fn motion(
        start: u8,
        axis: Axis,
        direction: Direction,
        limit_seek: bool,
        pulses: u32,
        end: u8,
    ) -> Self {
        let flags = (axis.code() << AXIS_SHIFT) | (direction.bit() << DIRECTION_SHIFT);
        let limit = if limit_seek { LIMIT_SEEK_FLAG } else { 0x00 };
        let [p3, p2, p1, p0] = pulses.to_be_bytes();
        Self([start, flags, limit, p3, p2, p1, p0, end])
    }

    pub(crate) fn remote_check(start: u8, end: u8) -> Self {
        Self([start, REMOTE_CHECK_BIT, 0, 0, 0, 0, 0, end])
    }

    /// Wrap raw bytes without validation.
    #[inline]
    pub const fn from_bytes(bytes: [u8; COMMAND_FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw bytes as sent on the wire.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; COMMAND_FRAME_LEN] {
        &self.0
    }

    /// Start delimiter.
    #[inline]
    pub const fn start(&self) -> u8 {
        self.0[0]
    }

    /// End delimiter.
    #[inline]
    pub const fn end(&self) -> u8 {
        self.0[COMMAND_FRAME_LEN - 1]
    }

    /// Target axis, `None` for the unused code `11`.
    #[inline]
    pub const fn axis(&self) -> Option<Axis> {
        Axis::from_code(self.0[1] >> AXIS_SHIFT)
    }

    /// Direction of travel.
    #[inline]
    pub const fn direction(&self) -> Direction {
        if (self.0[1] >> DIRECTION_SHIFT) & 1 == 1 {
            Direction::Negative
        } else {
            Direction::Positive
        }
    }

    /// Whether the controller should run until a limit switch trips.
    #[inline]
    pub const fn limit_seek(&self) -> bool {
        self.0[2] == LIMIT_SEEK_FLAG
    }

    /// Pulse count.
    #[inline]
    pub const fn pulses(&self) -> u32 {
        u32::from_be_bytes([self.0[3], self.0[4], self.0[5], self.0[6]])
    }

    /// Whether this is a remote-check query (all other fields ignored).
    #[inline]
    pub const fn is_remote_check(&self) -> bool {
        self.0[1] & REMOTE_CHECK_BIT != 0
    }
}

impl From<CommandFrame> for [u8; COMMAND_FRAME_LEN] {
    fn from(frame: CommandFrame) -> Self {
        frame.0
    }
}

/// Inbound 4-byte response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResponseFrame([u8; RESPONSE_FRAME_LEN]);

impl ResponseFrame {
    /// Wrap raw bytes as read from the wire.
    #[inline]
    pub const fn from_bytes(bytes: [u8; RESPONSE_FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; RESPONSE_FRAME_LEN] {
        &self.0
    }

    /// Start delimiter.
    #[inline]
    pub const fn start(&self) -> u8 {
        self.0[0]
    }

    /// Motion status byte.
    #[inline]
    pub const fn status(&self) -> u8 {
        self.0[1]
    }

    /// Auxiliary byte (remote-used flag in remote-check replies).
    #[inline]
    pub const fn aux(&self) -> u8 {
        self.0[2]
    }

    /// End delimiter.
    #[inline]
    pub const fn end(&self) -> u8 {
        self.0[RESPONSE_FRAME_LEN - 1]
    }
}

impl From<[u8; RESPONSE_FRAME_LEN]> for ResponseFrame {
    fn from(bytes: [u8; RESPONSE_FRAME_LEN]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_frame_layout() {
        let frame = CommandFrame::motion(
            START_BYTE,
            Axis::Y,
            Direction::Negative,
            true,
            0x0102_0304,
            END_BYTE,
        );

        assert_eq!(
            frame.as_bytes(),
            &[0x07, 0b0110_0000, 0xFF, 0x01, 0x02, 0x03, 0x04, 0x0A]
        );
    }

    #[test]
    fn test_remote_check_layout() {
        let frame = CommandFrame::remote_check(START_BYTE, END_BYTE);

        assert_eq!(frame.as_bytes(), &[0x07, 0x01, 0, 0, 0, 0, 0, 0x0A]);
        assert!(frame.is_remote_check());
        assert_eq!(frame.pulses(), 0);
    }

    #[test]
    fn test_response_fields() {
        let frame = ResponseFrame::from([0x07, 0xF0, 0x01, 0x0A]);

        assert_eq!(frame.start(), 0x07);
        assert_eq!(frame.status(), STATUS_SUCCESS);
        assert_eq!(frame.aux(), 1);
        assert_eq!(frame.end(), 0x0A);
    }
}
