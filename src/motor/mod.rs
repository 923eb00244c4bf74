//! Motor module for stepper-link.
//!
//! Provides the axis controller facade and its position tracking.

mod builder;
mod driver;
mod position;

pub use builder::AxisControllerBuilder;
pub use driver::AxisController;
pub use position::{Position, PositionEvent};
