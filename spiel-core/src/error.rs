//! Errors in the library.
use crate::Action;
use thiserror::Error;

/// Errors raised by games and states.
///
/// All of them indicate misuse by the driver. A state that returns one of these
/// errors has not been modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpielError {
    /// The operation is not allowed in the current phase of the episode.
    #[error("Invalid phase: {0}")]
    InvalidPhase(String),

    /// The action is out of range for the current phase of the episode.
    #[error("Invalid action {action}: {reason}")]
    InvalidAction {
        /// The rejected action.
        action: Action,
        /// Why it was rejected.
        reason: String,
    },

    /// A game parameter is missing a valid value.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Errors raised when reading a [`Record`](crate::record::Record).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}
