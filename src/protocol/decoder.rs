//! Response frame decoding.

use crate::config::MotorConfig;
use crate::error::ProtocolError;

use super::frame::{ResponseFrame, STATUS_DEVICE_RESET, STATUS_LIMIT_HIT, STATUS_SUCCESS};

/// Classified reply to a motion command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveOutcome {
    /// Move completed (or, when seeking, the limit was reached).
    Success,
    /// A limit switch stopped the move.
    LimitHit,
    /// The controller restarted during the move.
    DeviceReset,
    /// Status byte matches no known code.
    UnknownStatus(u8),
}

/// Reply to a remote-check query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RemoteUsed(pub bool);

fn check_framing(frame: &ResponseFrame, config: &MotorConfig) -> Result<(), ProtocolError> {
    if frame.start() != config.start_byte || frame.end() != config.end_byte {
        return Err(ProtocolError::MalformedResponse(*frame.as_bytes()));
    }
    Ok(())
}

/// Decode the reply to a motion command.
///
/// # Errors
///
/// Returns `ProtocolError::MalformedResponse` if either delimiter is wrong.
pub fn decode_move_response(
    frame: &ResponseFrame,
    config: &MotorConfig,
) -> Result<MoveOutcome, ProtocolError> {
    check_framing(frame, config)?;

    Ok(match frame.status() {
        STATUS_SUCCESS => MoveOutcome::Success,
        STATUS_LIMIT_HIT => MoveOutcome::LimitHit,
        STATUS_DEVICE_RESET => MoveOutcome::DeviceReset,
        other => MoveOutcome::UnknownStatus(other),
    })
}

/// Decode the reply to a remote-check query.
///
/// # Errors
///
/// - `ProtocolError::MalformedResponse` if either delimiter is wrong
/// - `ProtocolError::UnknownStatus` if the flag byte is neither 0 nor 1
pub fn decode_remote_check_response(
    frame: &ResponseFrame,
    config: &MotorConfig,
) -> Result<RemoteUsed, ProtocolError> {
    check_framing(frame, config)?;

    match frame.aux() {
        0 => Ok(RemoteUsed(false)),
        1 => Ok(RemoteUsed(true)),
        other => Err(ProtocolError::UnknownStatus(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: [u8; 4]) -> Result<MoveOutcome, ProtocolError> {
        decode_move_response(&ResponseFrame::from(bytes), &MotorConfig::default())
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(decode([0x07, 0xF0, 0, 0x0A]), Ok(MoveOutcome::Success));
        assert_eq!(decode([0x07, 0x0F, 0, 0x0A]), Ok(MoveOutcome::LimitHit));
        assert_eq!(decode([0x07, 0xFF, 0, 0x0A]), Ok(MoveOutcome::DeviceReset));
        assert_eq!(decode([0x07, 0x42, 0, 0x0A]), Ok(MoveOutcome::UnknownStatus(0x42)));
    }

    #[test]
    fn test_bad_delimiters_are_malformed() {
        assert_eq!(
            decode([0x08, 0xF0, 0, 0x0A]),
            Err(ProtocolError::MalformedResponse([0x08, 0xF0, 0, 0x0A]))
        );
        assert!(matches!(
            decode([0x07, 0xF0, 0, 0x0B]),
            Err(ProtocolError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_remote_check_flag() {
        let config = MotorConfig::default();
        let decode = |b: [u8; 4]| decode_remote_check_response(&ResponseFrame::from(b), &config);

        assert_eq!(decode([0x07, 0, 1, 0x0A]), Ok(RemoteUsed(true)));
        assert_eq!(decode([0x07, 0, 0, 0x0A]), Ok(RemoteUsed(false)));
        assert_eq!(decode([0x07, 0, 2, 0x0A]), Err(ProtocolError::UnknownStatus(2)));
        assert!(matches!(
            decode([0x00, 0, 1, 0x0A]),
            Err(ProtocolError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_custom_delimiters() {
        let config = MotorConfig {
            start_byte: 0xAA,
            end_byte: 0x55,
            ..MotorConfig::default()
        };

        let frame = ResponseFrame::from([0xAA, 0xF0, 0, 0x55]);
        assert_eq!(decode_move_response(&frame, &config), Ok(MoveOutcome::Success));
    }
}
