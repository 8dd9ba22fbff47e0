//! Robot state and the operations that validate and mutate it.

use crate::grid::{Bearing, ExecResult, GridBounds};
use glam::IVec2;
use serde::Serialize;
use std::collections::HashSet;
use tracing::trace;

/// The state of the grid robot.
///
/// Starts fully unset. Coordinates and direction are established by [`place`](Self::place)
/// and are never unset afterwards; the avoid set only grows.
///
/// The state serializes for inspection but cannot be rebuilt from a snapshot, so every
/// value it holds went through the bounds checks below:
///
/// ```compile_fail
/// let json = r#"{"x":99,"y":-7,"direction":"NORTH","avoid":[],"bounds":{"side_length":5}}"#;
/// let _state: grid_robot::RobotState = serde_json::from_str(json).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RobotState {
    x: Option<i32>,
    y: Option<i32>,
    direction: Option<Bearing>,

    /// Cells the robot may never occupy.
    avoid: HashSet<IVec2>,

    bounds: GridBounds,
}

impl RobotState {
    pub fn new(side_length: i32) -> Self {
        Self {
            x: None,
            y: None,
            direction: None,
            avoid: HashSet::new(),
            bounds: GridBounds::new(side_length),
        }
    }

    pub fn x(&self) -> Option<i32> {
        self.x
    }

    pub fn y(&self) -> Option<i32> {
        self.y
    }

    pub fn direction(&self) -> Option<Bearing> {
        self.direction
    }

    /// Current cell, if both coordinates are set.
    pub fn position(&self) -> Option<IVec2> {
        Some(IVec2::new(self.x?, self.y?))
    }

    pub fn side_length(&self) -> i32 {
        self.bounds.side_length()
    }

    /// True once x, y and direction are all set.
    pub fn is_valid(&self) -> bool {
        self.position().is_some() && self.direction.is_some()
    }

    pub fn is_avoided(&self, x: i32, y: i32) -> bool {
        self.avoid.contains(&IVec2::new(x, y))
    }

    pub fn avoided(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.avoid.iter().copied()
    }

    fn set_x(&mut self, candidate: i32) {
        self.x = self.bounds.assign(self.x, candidate);
    }

    fn set_y(&mut self, candidate: i32) {
        self.y = self.bounds.assign(self.y, candidate);
    }

    /// Absent bearings leave the current direction in place.
    fn set_direction(&mut self, bearing: Option<Bearing>) {
        if let Some(b) = bearing {
            self.direction = Some(b);
        }
    }

    /// Puts the robot at `(x, y)`, turning it to `bearing` when one is given.
    ///
    /// Denied, in this order, when the robot has never had a direction and none is
    /// supplied, when the cell is avoided, or when the cell is off the grid.
    pub fn place(&mut self, x: i32, y: i32, bearing: Option<Bearing>) -> ExecResult {
        if self.direction.is_none() && bearing.is_none() {
            return ExecResult::Denied;
        }
        if self.is_avoided(x, y) {
            return ExecResult::Denied;
        }
        if !self.bounds.contains(x) || !self.bounds.contains(y) {
            return ExecResult::Denied;
        }

        self.set_x(x);
        self.set_y(y);
        self.set_direction(bearing);
        trace!(x, y, direction = ?self.direction, "placed");
        ExecResult::Ok
    }

    pub fn left(&mut self) -> ExecResult {
        self.rotate(Bearing::left)
    }

    pub fn right(&mut self) -> ExecResult {
        self.rotate(Bearing::right)
    }

    fn rotate(&mut self, turn: fn(Bearing) -> Bearing) -> ExecResult {
        let Some(current) = self.direction else {
            return ExecResult::Denied;
        };
        let next = turn(current);
        self.direction = Some(next);
        trace!(from = %current, to = %next, "rotated");
        ExecResult::Ok
    }

    /// Marks `(x, y)` as forbidden. Re-marking a cell, or marking the robot's own
    /// cell, is allowed; only off-grid cells are denied.
    pub fn avoid(&mut self, x: i32, y: i32) -> ExecResult {
        let cell = IVec2::new(x, y);
        if !self.bounds.contains_cell(cell) {
            return ExecResult::Denied;
        }
        if self.avoid.insert(cell) {
            trace!(x, y, "cell avoided");
        }
        ExecResult::Ok
    }

    /// Advances one cell in the facing direction.
    ///
    /// Entering an avoided cell is denied. Stepping off the grid is not: the
    /// off-grid coordinate is ignored, the robot stays put and the move still succeeds.
    pub fn move_forward(&mut self) -> ExecResult {
        let (Some(position), Some(direction)) = (self.position(), self.direction) else {
            return ExecResult::Denied;
        };

        let target = position + direction.delta();
        if self.avoid.contains(&target) {
            trace!(x = target.x, y = target.y, "move blocked by avoided cell");
            return ExecResult::Denied;
        }

        self.set_x(target.x);
        self.set_y(target.y);
        trace!(x = ?self.x, y = ?self.y, "moved");
        ExecResult::Ok
    }

    /// The `X,Y,BEARING` report line, or `None` while the state is not valid.
    pub fn report_line(&self) -> Option<String> {
        let (position, direction) = (self.position()?, self.direction?);
        Some(format!("{},{},{}", position.x, position.y, direction))
    }
}
