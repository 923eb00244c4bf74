//! Wire protocol for the axis controller.
//!
//! Encodes 8-byte command frames and decodes 4-byte response frames.

mod decoder;
mod encoder;
mod frame;

pub use decoder::{decode_move_response, decode_remote_check_response, MoveOutcome, RemoteUsed};
pub use encoder::{encode_move, encode_remote_check, pulses_for, MAX_PULSES};
pub use frame::{
    CommandFrame, ResponseFrame, COMMAND_FRAME_LEN, END_BYTE, LIMIT_SEEK_FLAG, RESPONSE_FRAME_LEN,
    START_BYTE, STATUS_DEVICE_RESET, STATUS_LIMIT_HIT, STATUS_SUCCESS,
};
