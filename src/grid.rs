//! Grid primitives: compass bearings, command results, and the square bound.

use glam::IVec2;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Outcome of a single command.
///
/// The numeric codes are part of the public protocol: `OK` is 0, `DENIED` is 1, `ERROR` is 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExecResult {
    /// The command was accepted and applied.
    Ok = 0,
    /// The command was well-formed but rejected by the current state.
    Denied = 1,
    /// The command could not be parsed or names no known action.
    Error = 2,
}

impl ExecResult {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ExecResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExecResult::Ok => "OK",
            ExecResult::Denied => "DENIED",
            ExecResult::Error => "ERROR",
        })
    }
}

/// One of the four compass directions the robot can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Bearing {
    West,
    North,
    East,
    South,
}

impl Bearing {
    pub const ALL: [Bearing; 4] = [Bearing::West, Bearing::North, Bearing::East, Bearing::South];

    /// Quarter turn counter-clockwise: WEST -> SOUTH -> EAST -> NORTH -> WEST.
    pub fn left(self) -> Self {
        match self {
            Bearing::West => Bearing::South,
            Bearing::South => Bearing::East,
            Bearing::East => Bearing::North,
            Bearing::North => Bearing::West,
        }
    }

    /// Quarter turn clockwise, the inverse of [`left`](Self::left).
    pub fn right(self) -> Self {
        match self {
            Bearing::West => Bearing::North,
            Bearing::North => Bearing::East,
            Bearing::East => Bearing::South,
            Bearing::South => Bearing::West,
        }
    }

    /// Unit step taken by a single move while facing this bearing. North is `+Y`.
    pub fn delta(self) -> IVec2 {
        match self {
            Bearing::West => IVec2::NEG_X,
            Bearing::North => IVec2::Y,
            Bearing::East => IVec2::X,
            Bearing::South => IVec2::NEG_Y,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Bearing::West => "WEST",
            Bearing::North => "NORTH",
            Bearing::East => "EAST",
            Bearing::South => "SOUTH",
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not exactly one of the bearing names.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("not a bearing: {0:?}")]
pub struct UnknownBearing(pub String);

impl FromStr for Bearing {
    type Err = UnknownBearing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bearing::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| UnknownBearing(s.to_string()))
    }
}

/// The square bound `[0, side_length - 1]` shared by both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridBounds {
    side_length: i32,
}

impl GridBounds {
    pub fn new(side_length: i32) -> Self {
        Self { side_length }
    }

    pub fn side_length(&self) -> i32 {
        self.side_length
    }

    /// Whether `v` lies on the grid along one axis.
    pub fn contains(&self, v: i32) -> bool {
        (0..self.side_length).contains(&v)
    }

    pub fn contains_cell(&self, cell: IVec2) -> bool {
        self.contains(cell.x) && self.contains(cell.y)
    }

    /// Assigns `candidate` to a coordinate currently holding `current`.
    ///
    /// An off-grid candidate is ignored and `current` is returned unchanged, so a
    /// coordinate can never leave the grid and never becomes unset once set.
    pub fn assign(&self, current: Option<i32>, candidate: i32) -> Option<i32> {
        if self.contains(candidate) {
            Some(candidate)
        } else {
            current
        }
    }
}
