//! Scripted in-memory link for controller tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use stepper_link::protocol::{COMMAND_FRAME_LEN, RESPONSE_FRAME_LEN};
use stepper_link::Transport;

/// Reply: move completed.
pub const OK: [u8; 4] = [0x07, 0xF0, 0x00, 0x0A];
/// Reply: limit switch tripped.
pub const LIMIT: [u8; 4] = [0x07, 0x0F, 0x00, 0x0A];
/// Reply: controller reset.
pub const RESET: [u8; 4] = [0x07, 0xFF, 0x00, 0x0A];
/// Remote-check reply: remote not used.
pub const REMOTE_IDLE: [u8; 4] = [0x07, 0x00, 0x00, 0x0A];
/// Remote-check reply: remote used.
pub const REMOTE_USED: [u8; 4] = [0x07, 0x00, 0x01, 0x0A];

/// Remote-check command as it must appear on the wire.
pub const REMOTE_CHECK: [u8; 8] = [0x07, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0A];

/// One call made on the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Flush,
    Write([u8; COMMAND_FRAME_LEN]),
    Read,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// Fewer bytes buffered than requested.
    Starved,
    /// Write failure injected by the test.
    WriteFailed,
}

/// Controller stand-in: each written frame releases the next scripted reply
/// (plus any trailing bytes) into the receive buffer.
#[derive(Debug, Default)]
pub struct MockTransport {
    rx: VecDeque<u8>,
    replies: VecDeque<Vec<u8>>,
    pub log: Vec<Op>,
    pub fail_writes: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the reply to the next written frame.
    pub fn reply(mut self, frame: [u8; RESPONSE_FRAME_LEN]) -> Self {
        self.replies.push_back(frame.to_vec());
        self
    }

    /// Script a reply followed by unsolicited bytes.
    pub fn reply_with_trailer(mut self, frame: [u8; RESPONSE_FRAME_LEN], trailer: &[u8]) -> Self {
        let mut bytes = frame.to_vec();
        bytes.extend_from_slice(trailer);
        self.replies.push_back(bytes);
        self
    }

    /// Bytes already waiting in the receive buffer.
    pub fn noise(mut self, bytes: &[u8]) -> Self {
        self.rx.extend(bytes.iter().copied());
        self
    }

    /// Bytes still unread.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Every frame written, in order.
    pub fn written(&self) -> Vec<[u8; COMMAND_FRAME_LEN]> {
        self.log
            .iter()
            .filter_map(|op| match op {
                Op::Write(frame) => Some(*frame),
                _ => None,
            })
            .collect()
    }
}

impl Transport for MockTransport {
    type Error = MockError;

    fn flush_input(&mut self) -> Result<(), MockError> {
        self.log.push(Op::Flush);
        self.rx.clear();
        Ok(())
    }

    fn write(&mut self, frame: &[u8; COMMAND_FRAME_LEN]) -> Result<(), MockError> {
        if self.fail_writes {
            return Err(MockError::WriteFailed);
        }
        self.log.push(Op::Write(*frame));
        if let Some(reply) = self.replies.pop_front() {
            self.rx.extend(reply);
        }
        Ok(())
    }

    fn read_exact(&mut self, buf: &mut [u8; RESPONSE_FRAME_LEN]) -> Result<(), MockError> {
        self.log.push(Op::Read);
        if self.rx.len() < buf.len() {
            return Err(MockError::Starved);
        }
        for slot in buf.iter_mut() {
            *slot = self.rx.pop_front().ok_or(MockError::Starved)?;
        }
        Ok(())
    }
}
