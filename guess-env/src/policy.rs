//! Guessing strategies for [`GuessEnv`](crate::GuessEnv).
use crate::{FastrandSource, GuessAct, GuessEnv, GuessObs, Hint, RandomSource};
use guess_core::{Configurable, Policy};
use serde::{Deserialize, Serialize};

/// Configuration of [`RandomGuessPolicy`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RandomGuessPolicyConfig {
    /// Seed of the random source.
    pub seed: u64,

    /// Guesses are drawn from `[0, n_values)`.
    pub n_values: i64,
}

impl Default for RandomGuessPolicyConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            n_values: 100,
        }
    }
}

/// Guesses at random, narrowing the range by the last hint only.
///
/// * At the start of an episode, a guess is drawn from `[0, n_values)`.
/// * After "too low", from `[last_guess, n_values)`.
/// * After "too high", from `[0, last_guess)`.
/// * After a correct guess, the last guess is repeated.
///
/// Bounds from earlier hints are forgotten, so an episode takes a few dozen
/// guesses on average over 100 values.
pub struct RandomGuessPolicy<R = FastrandSource> {
    rng: R,
    n_values: i64,
}

impl<R: RandomSource> RandomGuessPolicy<R> {
    /// Constructs a policy drawing guesses from `rng`.
    pub fn with_source(rng: R, n_values: i64) -> Self {
        Self { rng, n_values }
    }

    fn draw(&mut self, lo: i64, hi: i64) -> i64 {
        if lo < hi {
            self.rng.gen_range(lo, hi)
        } else {
            lo
        }
    }
}

impl Configurable for RandomGuessPolicy<FastrandSource> {
    type Config = RandomGuessPolicyConfig;

    fn build(config: Self::Config) -> Self {
        Self::with_source(FastrandSource::with_seed(config.seed), config.n_values)
    }
}

impl<R, S> Policy<GuessEnv<S>> for RandomGuessPolicy<R>
where
    R: RandomSource,
    S: RandomSource + Default,
{
    fn sample(&mut self, obs: &GuessObs) -> GuessAct {
        let guess = match obs.hint {
            Hint::Start => self.draw(0, self.n_values),
            Hint::TooLow => self.draw(obs.last_guess, self.n_values),
            Hint::TooHigh => self.draw(0, obs.last_guess),
            Hint::Correct => obs.last_guess,
        };
        GuessAct(guess)
    }
}

/// Guesses the midpoint of the range still consistent with all hints of the
/// episode. Needs at most `ceil(log2(n_values))` guesses.
#[derive(Clone, Debug)]
pub struct BisectionPolicy {
    n_values: i64,
    // Candidates are in [lo, hi).
    lo: i64,
    hi: i64,
}

impl BisectionPolicy {
    /// Constructs a policy for secrets in `[0, n_values)`.
    pub fn new(n_values: i64) -> Self {
        Self {
            n_values,
            lo: 0,
            hi: n_values,
        }
    }
}

impl Default for BisectionPolicy {
    fn default() -> Self {
        Self::new(100)
    }
}

impl<S> Policy<GuessEnv<S>> for BisectionPolicy
where
    S: RandomSource + Default,
{
    fn sample(&mut self, obs: &GuessObs) -> GuessAct {
        match obs.hint {
            Hint::Start => {
                self.lo = 0;
                self.hi = self.n_values;
            }
            Hint::TooLow => self.lo = self.lo.max(obs.last_guess + 1),
            Hint::TooHigh => self.hi = self.hi.min(obs.last_guess),
            Hint::Correct => return GuessAct(obs.last_guess),
        }
        if self.lo >= self.hi {
            // Hints contradict each other, start over.
            self.lo = 0;
            self.hi = self.n_values;
        }
        GuessAct(self.lo + (self.hi - self.lo) / 2)
    }

    fn reset(&mut self) {
        self.lo = 0;
        self.hi = self.n_values;
    }
}
