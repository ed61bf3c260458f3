//! Errors of the guess-the-number environment.
use thiserror::Error;

/// Errors of [`GuessEnv`](crate::GuessEnv).
#[derive(Error, Debug, PartialEq)]
pub enum GuessEnvError {
    /// The guess is outside `[0, n_values)`.
    #[error("Invalid action {action}: guesses must be in [0, {n_values})")]
    InvalidAction {
        /// The rejected guess.
        action: i64,
        /// Upper bound (exclusive) of the valid guesses.
        n_values: i64,
    },

    /// A step was requested before the first reset.
    #[error("The environment is not initialized, call reset() before step()")]
    NotInitialized,

    /// The configuration cannot be used to build an environment.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
