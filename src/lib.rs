//! # grid-robot
//!
//! A single robot on a bounded square grid, driven by line-oriented text commands.
//!
//! Commands place the robot, rotate it, move it, mark cells to avoid, and report its
//! state. Each line yields an [`ExecResult`]: `OK` when applied, `DENIED` when well-formed
//! but rejected by the current state, and `ERROR` when malformed.
//!
//! ```
//! use grid_robot::{ExecResult, Robot, RobotConfig, RobotInterpreter};
//!
//! let mut robot = RobotInterpreter::with_sink(RobotConfig::default(), Vec::new());
//! assert_eq!(robot.execute("PLACE 0,0,NORTH"), ExecResult::Ok);
//! assert_eq!(robot.execute("MOVE"), ExecResult::Ok);
//! assert_eq!(robot.execute("REPORT"), ExecResult::Ok);
//! assert_eq!(robot.sink().as_slice(), b"0,1,NORTH\n");
//! ```

pub mod command;
pub mod error;
pub mod grid;
pub mod interpreter;
pub mod turtle;

pub use command::*;
pub use error::ParseError;
pub use grid::*;
pub use interpreter::*;
pub use turtle::*;
