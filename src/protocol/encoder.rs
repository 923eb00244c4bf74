//! Command frame encoding.

use crate::axis::{Axis, Direction};
use crate::config::units::Inches;
use crate::config::MotorConfig;
use crate::error::CommandError;

use super::frame::CommandFrame;

/// Largest pulse count accepted in one command.
///
/// One above what the 32-bit field holds; a count of exactly 2^32 passes and
/// is written modulo 2^32, matching the controller firmware's host tooling.
pub const MAX_PULSES: f64 = 4_294_967_296.0;

/// Pulses needed to travel `distance`, rounded half-to-even.
///
/// This is the only rounding step between a requested distance and the wire.
#[inline]
pub fn pulses_for(distance: Inches, config: &MotorConfig) -> f64 {
    libm::rint(distance.0 * config.pulses_per_revolution as f64 * config.turns_per_inch)
}

/// Encode a motion command.
///
/// # Errors
///
/// - `CommandError::NegativeDistance` if `distance` is negative (or NaN)
/// - `CommandError::DistanceTooLarge` if the rounded pulse count exceeds [`MAX_PULSES`]
pub fn encode_move(
    axis: Axis,
    direction: Direction,
    distance: Inches,
    limit_seek: bool,
    config: &MotorConfig,
) -> Result<CommandFrame, CommandError> {
    if distance.0 < 0.0 || distance.0.is_nan() {
        return Err(CommandError::NegativeDistance(distance.0));
    }

    let pulses = pulses_for(distance, config);
    if pulses > MAX_PULSES {
        return Err(CommandError::DistanceTooLarge { pulses });
    }

    // Low 32 bits only: 2^32 itself wraps to zero.
    let field = ((pulses as u64) & 0xFFFF_FFFF) as u32;

    Ok(CommandFrame::motion(
        config.start_byte,
        axis,
        direction,
        limit_seek,
        field,
        config.end_byte,
    ))
}

/// Encode a remote-check query.
pub fn encode_remote_check(config: &MotorConfig) -> CommandFrame {
    CommandFrame::remote_check(config.start_byte, config.end_byte)
}
