//! Interpreter that turns command lines into operations on a [`RobotState`].
//!
//! The entry point is [`RobotInterpreter`]. Construct it from a [`RobotConfig`], then feed it
//! one line at a time through [`Robot::execute`]. `REPORT` output goes to standard output by
//! default; use [`RobotInterpreter::with_sink`] to capture it elsewhere.

use crate::command::Command;
use crate::grid::ExecResult;
use crate::turtle::RobotState;
use std::io::{self, Write};
use tracing::{debug, warn};

/// Configuration for a simulated robot.
#[derive(Clone, Debug)]
pub struct RobotConfig {
    /// Side of the square grid. Valid coordinates are `0..side_length` on both axes.
    pub side_length: i32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self { side_length: 5 }
    }
}

impl RobotConfig {
    pub fn with_side_length(mut self, side_length: i32) -> Self {
        self.side_length = side_length;
        self
    }
}

/// Anything that can be driven by the line-oriented command protocol.
pub trait Robot {
    /// Parses and applies a single command line.
    fn execute(&mut self, command: &str) -> ExecResult;
}

/// Owns one robot's state and applies commands to it in order.
pub struct RobotInterpreter<W: Write = io::Stdout> {
    state: RobotState,
    sink: W,
}

impl RobotInterpreter {
    /// Creates an interpreter whose reports are printed to standard output.
    pub fn new(config: RobotConfig) -> Self {
        Self::with_sink(config, io::stdout())
    }
}

impl<W: Write> RobotInterpreter<W> {
    /// Creates an interpreter whose reports are written, one per line, to `sink`.
    pub fn with_sink(config: RobotConfig, sink: W) -> Self {
        Self {
            state: RobotState::new(config.side_length),
            sink,
        }
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Applies an already parsed command.
    pub fn apply(&mut self, command: Command) -> ExecResult {
        match command {
            Command::Place { x, y, bearing } => self.state.place(x, y, bearing),
            Command::Avoid { x, y } => self.state.avoid(x, y),
            Command::Left => self.state.left(),
            Command::Right => self.state.right(),
            Command::Move => self.state.move_forward(),
            Command::Report => self.report(),
        }
    }

    fn report(&mut self) -> ExecResult {
        let Some(line) = self.state.report_line() else {
            return ExecResult::Denied;
        };
        // The line was produced, so the command succeeded even if the sink refused it.
        if let Err(e) = writeln!(self.sink, "{line}").and_then(|_| self.sink.flush()) {
            warn!("failed to write report: {e}");
        }
        ExecResult::Ok
    }
}

impl<W: Write> Robot for RobotInterpreter<W> {
    fn execute(&mut self, command: &str) -> ExecResult {
        let result = match command.parse::<Command>() {
            Ok(parsed) => self.apply(parsed),
            Err(e) => {
                debug!(command, "malformed command: {e}");
                ExecResult::Error
            }
        };
        debug!(command, %result, "executed");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpreter(side: i32) -> RobotInterpreter<Vec<u8>> {
        RobotInterpreter::with_sink(RobotConfig::default().with_side_length(side), Vec::new())
    }

    fn output(robot: &RobotInterpreter<Vec<u8>>) -> &str {
        std::str::from_utf8(robot.sink()).unwrap()
    }

    #[test]
    fn report_writes_line_to_sink() {
        let mut robot = interpreter(5);
        assert_eq!(robot.execute("PLACE 1,2,EAST"), ExecResult::Ok);
        assert_eq!(robot.execute("REPORT"), ExecResult::Ok);
        assert_eq!(output(&robot), "1,2,EAST\n");
    }

    #[test]
    fn report_before_place_writes_nothing() {
        let mut robot = interpreter(5);
        assert_eq!(robot.execute("REPORT"), ExecResult::Denied);
        assert!(robot.sink().is_empty());
    }

    #[test]
    fn malformed_input_is_error_not_denied() {
        let mut robot = interpreter(5);
        assert_eq!(robot.execute(""), ExecResult::Error);
        assert_eq!(robot.execute("PLACE"), ExecResult::Error);
        assert_eq!(robot.execute("LEFT 1,2"), ExecResult::Error);
        assert_eq!(robot.execute("FLY"), ExecResult::Error);
        assert_eq!(robot.execute("LEFT"), ExecResult::Denied);
    }

    #[test]
    fn avoid_ignores_third_field() {
        let mut robot = interpreter(5);
        assert_eq!(robot.execute("AVOID 1,1,NORTH"), ExecResult::Ok);
        assert!(robot.state().is_avoided(1, 1));
        assert_eq!(robot.state().direction(), None);
    }

    #[test]
    fn default_config_is_five_by_five() {
        assert_eq!(RobotConfig::default().side_length, 5);
    }
}
