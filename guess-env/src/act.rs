//! Action of [`GuessEnv`](crate::GuessEnv).

/// A guess of the secret number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessAct(pub i64);

impl GuessAct {
    /// The guessed number.
    pub fn guess(&self) -> i64 {
        self.0
    }
}

impl guess_core::Act for GuessAct {}
