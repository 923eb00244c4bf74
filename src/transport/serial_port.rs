//! Transport over a host serial port (`serialport` feature).

use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::{ClearBuffer, SerialPort};

use crate::protocol::{COMMAND_FRAME_LEN, RESPONSE_FRAME_LEN};

use super::Transport;

/// Adapts a [`serialport::SerialPort`] to [`Transport`].
///
/// The port's read timeout bounds `read_exact`; use a long timeout, as the
/// controller only answers once the motion has finished.
pub struct SerialPortTransport {
    port: Box<dyn SerialPort>,
}

impl SerialPortTransport {
    /// Wrap an already opened port.
    pub fn new(port: Box<dyn SerialPort>) -> Self {
        Self { port }
    }

    /// Open `path` at `baud_rate` with the given read timeout.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the port cannot be opened.
    pub fn open(path: &str, baud_rate: u32, timeout: Duration) -> io::Result<Self> {
        let port = serialport::new(path, baud_rate).timeout(timeout).open()?;
        debug!("opened serial port {} at {} baud", path, baud_rate);
        Ok(Self::new(port))
    }

    /// Borrow the wrapped port.
    pub fn port(&self) -> &dyn SerialPort {
        self.port.as_ref()
    }

    /// Release the wrapped port.
    pub fn into_inner(self) -> Box<dyn SerialPort> {
        self.port
    }
}

impl Transport for SerialPortTransport {
    type Error = io::Error;

    fn flush_input(&mut self) -> Result<(), Self::Error> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }

    fn write(&mut self, frame: &[u8; COMMAND_FRAME_LEN]) -> Result<(), Self::Error> {
        self.port.write_all(frame)?;
        self.port.flush()
    }

    fn read_exact(&mut self, buf: &mut [u8; RESPONSE_FRAME_LEN]) -> Result<(), Self::Error> {
        Read::read_exact(&mut self.port, buf)
    }
}
