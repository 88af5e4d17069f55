//! Generation failures

use picklebalance_core::ScheduleError;
use thiserror::Error;

/// Any failure that aborts a generation attempt.
///
/// No partial schedule is ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("generator {name} failed: {message}")]
    Generator { name: String, message: String },

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}
