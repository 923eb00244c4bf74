//! Transport over an `embedded-hal-nb` serial peripheral.

use embedded_hal_nb::nb;
use embedded_hal_nb::serial::{Read, Write};

use crate::protocol::{COMMAND_FRAME_LEN, RESPONSE_FRAME_LEN};

use super::Transport;

/// Adapts a non-blocking UART (`embedded_hal_nb::serial`) to [`Transport`].
///
/// Writes and reads spin on `WouldBlock`. Flushing input drains bytes until the
/// peripheral has nothing buffered.
#[derive(Debug)]
pub struct NbSerial<S> {
    serial: S,
}

impl<S> NbSerial<S>
where
    S: Read<u8> + Write<u8>,
{
    /// Wrap a serial peripheral.
    pub fn new(serial: S) -> Self {
        Self { serial }
    }

    /// Borrow the wrapped peripheral.
    pub fn inner(&self) -> &S {
        &self.serial
    }

    /// Mutably borrow the wrapped peripheral.
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.serial
    }

    /// Release the wrapped peripheral.
    pub fn into_inner(self) -> S {
        self.serial
    }
}

impl<S> Transport for NbSerial<S>
where
    S: Read<u8> + Write<u8>,
{
    type Error = S::Error;

    fn flush_input(&mut self) -> Result<(), Self::Error> {
        loop {
            match self.serial.read() {
                Ok(_) => {}
                Err(nb::Error::WouldBlock) => return Ok(()),
                Err(nb::Error::Other(e)) => return Err(e),
            }
        }
    }

    fn write(&mut self, frame: &[u8; COMMAND_FRAME_LEN]) -> Result<(), Self::Error> {
        for &byte in frame {
            nb::block!(self.serial.write(byte))?;
        }
        nb::block!(self.serial.flush())
    }

    fn read_exact(&mut self, buf: &mut [u8; RESPONSE_FRAME_LEN]) -> Result<(), Self::Error> {
        for slot in buf.iter_mut() {
            *slot = nb::block!(self.serial.read())?;
        }
        Ok(())
    }
}
