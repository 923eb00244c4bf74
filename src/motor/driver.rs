//! Axis controller.
//!
//! Drives one axis over a [`Transport`], one request/response exchange at a
//! time, and keeps the tracked [`Position`] in step with what the controller
//! reports.

use crate::axis::{Axis, Direction};
use crate::config::units::{Inches, Unit};
use crate::config::MotorConfig;
use crate::error::{Error, MotionError, ProtocolError, Result, TransportError};
use crate::protocol::{
    decode_move_response, decode_remote_check_response, encode_move, encode_remote_check,
    CommandFrame, MoveOutcome, RemoteUsed, ResponseFrame, RESPONSE_FRAME_LEN,
};
use crate::transport::Transport;

use super::builder::AxisControllerBuilder;
use super::position::{Position, PositionEvent};

/// Host-side driver for one stepper axis.
///
/// Generic over the serial link `T`. Every operation takes `&mut self`, so a
/// command and its reply can never interleave with another exchange.
pub struct AxisController<T>
where
    T: Transport,
{
    /// Axis address encoded in each command.
    axis: Axis,

    /// Serial link to the controller.
    transport: T,

    /// Calibration and framing parameters.
    config: MotorConfig,

    /// Tracked absolute position.
    position: Position,
}

impl<T> AxisController<T>
where
    T: Transport,
{
    /// Create a controller with unknown position.
    pub fn new(axis: Axis, transport: T, config: MotorConfig) -> Self {
        Self::with_position(axis, transport, config, Position::Unknown)
    }

    pub(crate) fn with_position(
        axis: Axis,
        transport: T,
        config: MotorConfig,
        position: Position,
    ) -> Self {
        Self {
            axis,
            transport,
            config,
            position,
        }
    }

    /// Start building a controller.
    pub fn builder() -> AxisControllerBuilder<T> {
        AxisControllerBuilder::new()
    }

    /// Get the axis this controller drives.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Get the motor configuration.
    #[inline]
    pub fn config(&self) -> &MotorConfig {
        &self.config
    }

    /// Get the tracked position.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Borrow the transport.
    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport.
    #[inline]
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Release the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Move `distance` in `direction`, relative to the current position.
    ///
    /// With `limit_seek` set the controller runs until the switch in
    /// `direction` trips, and the position snaps to that end of travel.
    ///
    /// # Errors
    ///
    /// - `CommandError::NegativeDistance` / `DistanceTooLarge` before anything is sent
    /// - `ProtocolError::MalformedResponse` / `UnknownStatus` for unreadable replies
    /// - `MotionError::UnexpectedLimit` if a switch tripped; position is left as is
    /// - `MotionError::DeviceResetDuringMove` if the controller restarted; position
    ///   becomes unknown
    pub fn move_by(
        &mut self,
        direction: Direction,
        distance: f64,
        unit: Unit,
        limit_seek: bool,
    ) -> Result<()> {
        let inches = unit.to_inches(distance);
        let frame = encode_move(self.axis, direction, inches, limit_seek, &self.config)?;

        debug!(
            "{} axis: move {} {} in ({} pulses), limit_seek={}",
            self.axis.as_str(),
            direction.as_char(),
            inches.0,
            frame.pulses(),
            limit_seek
        );

        let response = self.exchange(&frame)?;

        match decode_move_response(&response, &self.config)? {
            MoveOutcome::Success => {
                let event = if limit_seek {
                    PositionEvent::LimitReached(direction)
                } else {
                    PositionEvent::MovedSuccessfully {
                        direction,
                        distance: inches,
                    }
                };
                self.apply(event);
            }
            MoveOutcome::LimitHit => {
                warn!("{} axis: unexpectedly hit a limit switch", self.axis.as_str());
                return Err(Error::Motion(MotionError::UnexpectedLimit));
            }
            MoveOutcome::DeviceReset => {
                warn!(
                    "{} axis: controller reset during move, position lost",
                    self.axis.as_str()
                );
                self.apply(PositionEvent::Reset);
                return Err(Error::Motion(MotionError::DeviceResetDuringMove));
            }
            MoveOutcome::UnknownStatus(status) => {
                return Err(Error::Protocol(ProtocolError::UnknownStatus(status)));
            }
        }

        self.flush_input()
    }

    /// Run in `direction` until the limit switch trips.
    ///
    /// Establishes absolute position at `position_max` (`+`) or `position_min` (`-`).
    pub fn to_limit(&mut self, direction: Direction) -> Result<()> {
        self.move_by(direction, 0.0, Unit::Inch, true)
    }

    /// Move to an absolute `target`.
    ///
    /// Queries the controller for remote-control use first; if the remote was
    /// used the position is discarded.
    ///
    /// # Errors
    ///
    /// - `MotionError::PositionUnknown` with no established position; no motion
    ///   command is sent
    /// - any error of [`move_by`](Self::move_by)
    pub fn move_to(&mut self, target: f64, unit: Unit) -> Result<()> {
        let RemoteUsed(remote_used) = self.check_remote()?;
        if remote_used {
            warn!(
                "{} axis: remote control was used, position lost",
                self.axis.as_str()
            );
            self.apply(PositionEvent::RemoteActivityDetected);
        }

        let current = self
            .position
            .known()
            .ok_or(Error::Motion(MotionError::PositionUnknown))?;

        let delta = unit.to_inches(target) - current;
        let direction = Direction::from_delta(delta.0);

        debug!(
            "{} axis: move to {} in from {} in",
            self.axis.as_str(),
            (current + delta).0,
            current.0
        );

        self.move_by(direction, delta.abs().0, Unit::Inch, false)
    }

    /// Ask the controller whether its hand remote was used since the last query.
    ///
    /// Does not touch the tracked position.
    pub fn check_remote(&mut self) -> Result<RemoteUsed> {
        let frame = encode_remote_check(&self.config);
        let response = self.exchange(&frame)?;
        let used = decode_remote_check_response(&response, &self.config)?;
        self.flush_input()?;
        Ok(used)
    }

    /// Flush, send `frame`, and block for the reply.
    fn exchange(&mut self, frame: &CommandFrame) -> Result<ResponseFrame> {
        self.flush_input()?;

        trace!("{} axis: tx {:?}", self.axis.as_str(), frame.as_bytes());
        self.transport
            .write(frame.as_bytes())
            .map_err(|_| Error::Transport(TransportError::Write))?;

        let mut buf = [0u8; RESPONSE_FRAME_LEN];
        self.transport
            .read_exact(&mut buf)
            .map_err(|_| Error::Transport(TransportError::Read))?;
        trace!("{} axis: rx {:?}", self.axis.as_str(), buf);

        Ok(ResponseFrame::from_bytes(buf))
    }

    fn flush_input(&mut self) -> Result<()> {
        self.transport
            .flush_input()
            .map_err(|_| Error::Transport(TransportError::Flush))
    }

    fn apply(&mut self, event: PositionEvent) {
        self.position = self.position.apply(event, &self.config.envelope());
    }
}
