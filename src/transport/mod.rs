//! Byte transport between host and axis controller.
//!
//! The controller speaks fixed-size frames with no escaping or checksums, so
//! the link only needs to send whole frames, read an exact number of bytes and
//! drop anything unsolicited that is waiting in the receive buffer.

mod nb_serial;
#[cfg(feature = "serialport")]
mod serial_port;

pub use nb_serial::NbSerial;
#[cfg(feature = "serialport")]
pub use serial_port::SerialPortTransport;

use crate::protocol::{COMMAND_FRAME_LEN, RESPONSE_FRAME_LEN};

/// Blocking serial link to one axis controller.
pub trait Transport {
    /// Link-level error.
    type Error: core::fmt::Debug;

    /// Discard every byte received but not yet read.
    fn flush_input(&mut self) -> Result<(), Self::Error>;

    /// Send one command frame.
    fn write(&mut self, frame: &[u8; COMMAND_FRAME_LEN]) -> Result<(), Self::Error>;

    /// Block until one full response frame has been received.
    fn read_exact(&mut self, buf: &mut [u8; RESPONSE_FRAME_LEN]) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    #[inline]
    fn flush_input(&mut self) -> Result<(), Self::Error> {
        T::flush_input(self)
    }

    #[inline]
    fn write(&mut self, frame: &[u8; COMMAND_FRAME_LEN]) -> Result<(), Self::Error> {
        T::write(self, frame)
    }

    #[inline]
    fn read_exact(&mut self, buf: &mut [u8; RESPONSE_FRAME_LEN]) -> Result<(), Self::Error> {
        T::read_exact(self, buf)
    }
}
