//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: expected {0}")]
    RecordValueTypeError(String),

    /// The number of episodes must be positive.
    #[error("The number of episodes must be positive")]
    ZeroEpisodes,
}
