//! Command-line grammar: action names and the typed commands they parse into.
//!
//! A line is an action token, optionally followed by whitespace and a comma-separated
//! argument list of two or three fields: `x,y[,BEARING]`.

use crate::error::{ParseError, Result};
use crate::grid::Bearing;
use std::str::FromStr;

/// The named actions the robot understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Place,
    Avoid,
    Left,
    Right,
    Move,
    Report,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Place,
        Action::Avoid,
        Action::Left,
        Action::Right,
        Action::Move,
        Action::Report,
    ];

    /// Resolves an exact (case-sensitive) command name.
    pub fn lookup(name: &str) -> Option<Action> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::Place => "PLACE",
            Action::Avoid => "AVOID",
            Action::Left => "LEFT",
            Action::Right => "RIGHT",
            Action::Move => "MOVE",
            Action::Report => "REPORT",
        }
    }
}

/// A fully parsed command, ready to be applied to a [`RobotState`](crate::RobotState).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Put the robot at `(x, y)`, optionally turning it to `bearing`.
    Place {
        x: i32,
        y: i32,
        bearing: Option<Bearing>,
    },
    /// Forbid the cell `(x, y)`. A bearing field, if given, is discarded.
    Avoid { x: i32, y: i32 },
    Left,
    Right,
    Move,
    Report,
}

/// Coordinates and optional bearing taken from an argument list.
struct Arguments {
    x: i32,
    y: i32,
    bearing: Option<Bearing>,
}

fn parse_coordinate(field: &str) -> Result<i32> {
    field
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidCoordinate(field.to_string()))
}

fn parse_arguments(rest: &str) -> Result<Arguments> {
    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
    if fields.len() != 2 && fields.len() != 3 {
        return Err(ParseError::FieldCount(fields.len()));
    }

    let x = parse_coordinate(fields[0])?;
    let y = parse_coordinate(fields[1])?;
    // An unrecognised bearing is treated as absent, not as malformed input.
    let bearing = fields.get(2).and_then(|f| f.parse::<Bearing>().ok());

    Ok(Arguments { x, y, bearing })
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::EmptyCommand);
        }

        let (token, rest) = match line.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, Some(rest.trim_start()).filter(|r| !r.is_empty())),
            None => (line, None),
        };

        let action = Action::lookup(token)
            .ok_or_else(|| ParseError::UnknownAction(token.to_string()))?;

        match (action, rest) {
            (Action::Left, None) => Ok(Command::Left),
            (Action::Right, None) => Ok(Command::Right),
            (Action::Move, None) => Ok(Command::Move),
            (Action::Report, None) => Ok(Command::Report),
            (Action::Place | Action::Avoid, None) => {
                Err(ParseError::MissingArguments(action.name()))
            }
            (Action::Left | Action::Right | Action::Move | Action::Report, Some(_)) => {
                Err(ParseError::UnexpectedArguments(action.name()))
            }
            (Action::Place, Some(rest)) => {
                let Arguments { x, y, bearing } = parse_arguments(rest)?;
                Ok(Command::Place { x, y, bearing })
            }
            (Action::Avoid, Some(rest)) => {
                let Arguments { x, y, .. } = parse_arguments(rest)?;
                Ok(Command::Avoid { x, y })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zero_argument_actions() {
        assert_eq!("LEFT".parse::<Command>(), Ok(Command::Left));
        assert_eq!("RIGHT".parse::<Command>(), Ok(Command::Right));
        assert_eq!("  MOVE  ".parse::<Command>(), Ok(Command::Move));
        assert_eq!("REPORT".parse::<Command>(), Ok(Command::Report));
    }

    #[test]
    fn parses_place_with_and_without_bearing() {
        assert_eq!(
            "PLACE 1,2,EAST".parse::<Command>(),
            Ok(Command::Place {
                x: 1,
                y: 2,
                bearing: Some(Bearing::East)
            })
        );
        assert_eq!(
            "PLACE  3 , 4".parse::<Command>(),
            Ok(Command::Place {
                x: 3,
                y: 4,
                bearing: None
            })
        );
    }

    #[test]
    fn unknown_bearing_is_absent() {
        assert_eq!(
            "PLACE 0,0,north".parse::<Command>(),
            Ok(Command::Place {
                x: 0,
                y: 0,
                bearing: None
            })
        );
        assert_eq!(
            "PLACE 0,0,3".parse::<Command>(),
            Ok(Command::Place {
                x: 0,
                y: 0,
                bearing: None
            })
        );
    }

    #[test]
    fn avoid_discards_bearing() {
        assert_eq!("AVOID 1,1,WEST".parse::<Command>(), Ok(Command::Avoid { x: 1, y: 1 }));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!("".parse::<Command>(), Err(ParseError::EmptyCommand));
        assert_eq!("   ".parse::<Command>(), Err(ParseError::EmptyCommand));
        assert_eq!(
            "PLACE".parse::<Command>(),
            Err(ParseError::MissingArguments("PLACE"))
        );
        assert_eq!(
            "AVOID".parse::<Command>(),
            Err(ParseError::MissingArguments("AVOID"))
        );
        assert_eq!(
            "MOVE 1,2".parse::<Command>(),
            Err(ParseError::UnexpectedArguments("MOVE"))
        );
        assert_eq!("PLACE 1,2,3,4".parse::<Command>(), Err(ParseError::FieldCount(4)));
        assert_eq!("PLACE 1".parse::<Command>(), Err(ParseError::FieldCount(1)));
        assert_eq!(
            "PLACE a,b".parse::<Command>(),
            Err(ParseError::InvalidCoordinate("a".to_string()))
        );
        assert_eq!(
            "PLACE 1x,2".parse::<Command>(),
            Err(ParseError::InvalidCoordinate("1x".to_string()))
        );
        assert_eq!(
            "move".parse::<Command>(),
            Err(ParseError::UnknownAction("move".to_string()))
        );
        assert_eq!(
            "JUMP 1,2".parse::<Command>(),
            Err(ParseError::UnknownAction("JUMP".to_string()))
        );
    }

    #[test]
    fn signed_coordinates_parse() {
        assert_eq!(
            "PLACE -1,+2,NORTH".parse::<Command>(),
            Ok(Command::Place {
                x: -1,
                y: 2,
                bearing: Some(Bearing::North)
            })
        );
    }
}
