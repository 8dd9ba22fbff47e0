//! Reasons a command line is malformed.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Why a command line could not be turned into a [`Command`](crate::Command).
///
/// These never escape [`Robot::execute`](crate::Robot::execute); every variant is reported
/// to the caller as [`ExecResult::Error`](crate::ExecResult::Error).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    EmptyCommand,

    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// The action takes coordinates but none were given.
    #[error("{0} requires arguments")]
    MissingArguments(&'static str),

    /// The action takes no arguments but some were given.
    #[error("{0} takes no arguments")]
    UnexpectedArguments(&'static str),

    #[error("expected 2 or 3 comma-separated fields, got {0}")]
    FieldCount(usize),

    #[error("invalid coordinate: {0:?}")]
    InvalidCoordinate(String),
}
