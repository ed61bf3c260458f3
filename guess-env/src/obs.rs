//! Observation of [`GuessEnv`](crate::GuessEnv).
use serde::{Deserialize, Serialize};

/// Feedback on the last guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i8)]
pub enum Hint {
    /// The episode just started, no guess yet.
    Start = -1,

    /// The last guess was lower than the secret.
    TooLow = 0,

    /// The last guess was the secret.
    Correct = 1,

    /// The last guess was higher than the secret.
    TooHigh = 2,
}

impl Hint {
    /// Numeric code of the hint: -1, 0, 1 or 2.
    pub fn value(self) -> i8 {
        self as i8
    }
}

/// The pair `(hint, last_guess)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessObs {
    /// Feedback on the last guess.
    pub hint: Hint,

    /// The last guess, or -1 at the beginning of an episode.
    pub last_guess: i64,
}

impl GuessObs {
    /// The observation right after a reset, `(-1, -1)`.
    pub const START: GuessObs = GuessObs {
        hint: Hint::Start,
        last_guess: -1,
    };

    /// Constructs an observation.
    pub fn new(hint: Hint, last_guess: i64) -> Self {
        Self { hint, last_guess }
    }

    /// Numeric form of the observation.
    pub fn as_tuple(&self) -> (i8, i64) {
        (self.hint.value(), self.last_guess)
    }
}

impl guess_core::Obs for GuessObs {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hint_codes() {
        let hints = [Hint::Start, Hint::TooLow, Hint::Correct, Hint::TooHigh];
        let codes: Vec<_> = hints.iter().map(|h| h.value()).collect();
        assert_eq!(codes, [-1, 0, 1, 2]);
        assert_eq!(GuessObs::START.as_tuple(), (-1, -1));
    }
}
