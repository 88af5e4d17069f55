//! Error types for raw assignment handling

use thiserror::Error;

/// Structural failures in a raw assignment.
///
/// Only malformed input is an error. Unknown player ids, empty rosters and
/// empty schedules are all valid and handled by the individual operations.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("raw assignment is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("raw assignment has unexpected shape: {0}")]
    MalformedShape(String),

    #[error("round {round}, match {match_number}: expected 4 player ids, found {len}")]
    WrongArity {
        round: usize,
        match_number: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
