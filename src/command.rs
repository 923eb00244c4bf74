//! Text commands for scripted axis control.
//!
//! ```text
//! move <+|-> <distance> [in|cm|mm] [limit]
//! tolimit <+|->
//! moveto <target> [in|cm|mm]
//! ```

use core::str::FromStr;

use crate::axis::Direction;
use crate::config::units::Unit;
use crate::error::{truncated, CommandError, Result};
use crate::motor::AxisController;
use crate::transport::Transport;

/// One parsed axis command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisCommand {
    /// Relative move.
    Move {
        /// Direction of travel.
        direction: Direction,
        /// Magnitude in `unit`.
        distance: f64,
        /// Unit of `distance`.
        unit: Unit,
        /// Run until the limit switch trips.
        limit_seek: bool,
    },
    /// Seek a limit switch.
    ToLimit(Direction),
    /// Absolute move.
    MoveTo {
        /// Target position in `unit`.
        target: f64,
        /// Unit of `target`.
        unit: Unit,
    },
}

fn invalid(msg: &str) -> CommandError {
    CommandError::InvalidCommand(truncated(msg))
}

fn parse_number(token: Option<&str>, what: &str) -> core::result::Result<f64, CommandError> {
    let token = token.ok_or_else(|| invalid(what))?;
    token.parse::<f64>().map_err(|_| invalid(token))
}

impl FromStr for AxisCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> core::result::Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or_else(|| invalid("empty command"))?;

        let command = match verb {
            "move" => {
                let direction = tokens
                    .next()
                    .ok_or_else(|| invalid("move: missing direction"))?
                    .parse()?;
                let distance = parse_number(tokens.next(), "move: missing distance")?;
                let mut unit = Unit::Inch;
                let mut unit_given = false;
                let mut limit_seek = false;
                for token in tokens.by_ref() {
                    if limit_seek || (unit_given && token != "limit") {
                        return Err(invalid(token));
                    }
                    if token == "limit" {
                        limit_seek = true;
                    } else {
                        unit = token.parse()?;
                        unit_given = true;
                    }
                }
                AxisCommand::Move {
                    direction,
                    distance,
                    unit,
                    limit_seek,
                }
            }
            "tolimit" => AxisCommand::ToLimit(
                tokens
                    .next()
                    .ok_or_else(|| invalid("tolimit: missing direction"))?
                    .parse()?,
            ),
            "moveto" => {
                let target = parse_number(tokens.next(), "moveto: missing target")?;
                let unit = match tokens.next() {
                    Some(tag) => tag.parse()?,
                    None => Unit::Inch,
                };
                AxisCommand::MoveTo { target, unit }
            }
            other => return Err(invalid(other)),
        };

        match tokens.next() {
            Some(extra) => Err(invalid(extra)),
            None => Ok(command),
        }
    }
}

impl<T> AxisController<T>
where
    T: Transport,
{
    /// Run a parsed command.
    pub fn execute(&mut self, command: &AxisCommand) -> Result<()> {
        match *command {
            AxisCommand::Move {
                direction,
                distance,
                unit,
                limit_seek,
            } => self.move_by(direction, distance, unit, limit_seek),
            AxisCommand::ToLimit(direction) => self.to_limit(direction),
            AxisCommand::MoveTo { target, unit } => self.move_to(target, unit),
        }
    }

    /// Parse and run one text command.
    pub fn execute_line(&mut self, line: &str) -> Result<()> {
        let command: AxisCommand = line.parse()?;
        self.execute(&command)
    }
}
