//! Guess-the-number environment.
use crate::{
    FastrandSource, GuessAct, GuessEnvConfig, GuessEnvError, GuessObs, Hint, RandomSource,
};
use anyhow::Result;
use guess_core::{
    record::{Record, RecordValue},
    Env, Info, Step,
};
use log::{debug, trace};
use std::cmp::Ordering;

/// Human-readable message attached to a reset or a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessInfo(pub String);

impl GuessInfo {
    /// The message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl Info for GuessInfo {}

/// An environment hiding a secret integer in `[0, n_values)`.
///
/// Every guess is answered with a [`Hint`]. A correct guess terminates the
/// episode with reward 0, every other guess costs reward -1.
///
/// A new secret is drawn at every [`Env::reset`]. Calling [`Env::step`] before
/// the first reset fails with [`GuessEnvError::NotInitialized`].
pub struct GuessEnv<R = FastrandSource> {
    config: GuessEnvConfig,

    // Seed given at build time, reset_with_index() reseeds relative to it.
    seed: u64,

    rng: R,

    // None until the first reset.
    secret: Option<i64>,

    // Number of steps in the current episode.
    n_steps: usize,

    steps_without_winning: usize,
}

impl<R: RandomSource> GuessEnv<R> {
    /// Builds an environment drawing secrets from `rng`.
    pub fn with_source(config: &GuessEnvConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            seed: 0,
            rng,
            secret: None,
            n_steps: 0,
            steps_without_winning: 0,
        })
    }

    /// The configuration of the environment.
    pub fn config(&self) -> &GuessEnvConfig {
        &self.config
    }

    /// Number of incorrect guesses in the current episode.
    pub fn steps_without_winning(&self) -> usize {
        self.steps_without_winning
    }

    fn check_action(&self, action: i64) -> Result<(), GuessEnvError> {
        if self.config.strict_actions && !(0..self.config.n_values).contains(&action) {
            return Err(GuessEnvError::InvalidAction {
                action,
                n_values: self.config.n_values,
            });
        }
        Ok(())
    }

    fn start_episode(&mut self) -> (GuessObs, GuessInfo) {
        let secret = self.rng.gen_range(0, self.config.n_values);
        self.secret = Some(secret);
        self.n_steps = 0;
        self.steps_without_winning = 0;
        debug!("New episode started");

        let info = GuessInfo(format!(
            "Guess a number in [0, {})",
            self.config.n_values
        ));
        (GuessObs::START, info)
    }
}

impl<R> Env for GuessEnv<R>
where
    R: RandomSource + Default,
{
    type Config = GuessEnvConfig;
    type Obs = GuessObs;
    type Act = GuessAct;
    type Info = GuessInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let mut rng = R::default();
        rng.seed(seed as u64);
        let mut env = Self::with_source(config, rng)?;
        env.seed = seed as u64;
        Ok(env)
    }

    fn reset(&mut self) -> Result<(GuessObs, GuessInfo)> {
        Ok(self.start_episode())
    }

    /// Reseeds the random source with `seed + ix` and starts an episode,
    /// so that episode `ix` always gets the same secret.
    fn reset_with_index(&mut self, ix: usize) -> Result<GuessObs> {
        self.rng.seed(self.seed.wrapping_add(ix as u64));
        Ok(self.start_episode().0)
    }

    fn step(&mut self, a: &GuessAct) -> Result<(Step<Self>, Record)> {
        let secret = self.secret.ok_or(GuessEnvError::NotInitialized)?;
        let action = a.guess();
        self.check_action(action)?;
        self.n_steps += 1;

        let (hint, reward, info) = match action.cmp(&secret) {
            Ordering::Less => (Hint::TooLow, -1.0, format!("{} is too low", action)),
            Ordering::Greater => (Hint::TooHigh, -1.0, format!("{} is too high", action)),
            Ordering::Equal => (
                Hint::Correct,
                0.0,
                format!("You win! The secret number was {}", action),
            ),
        };
        let is_terminated = hint == Hint::Correct;
        if !is_terminated {
            self.steps_without_winning += 1;
        }
        let is_truncated = !is_terminated
            && self
                .config
                .max_steps
                .map_or(false, |max_steps| self.n_steps >= max_steps);
        trace!("Guess {}: {:?}", action, hint);

        let record = Record::from_slice(&[
            ("guess", RecordValue::Scalar(action as f32)),
            ("hint", RecordValue::Scalar(hint.value() as f32)),
            (
                "steps_without_winning",
                RecordValue::Scalar(self.steps_without_winning as f32),
            ),
            ("info", RecordValue::String(info.clone())),
        ]);
        let step = Step::new(
            GuessObs::new(hint, action),
            *a,
            reward,
            is_terminated,
            is_truncated,
            GuessInfo(info),
        );

        Ok((step, record))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ScriptedSource;
    use test_log::test;

    fn env_with_secret(secret: i64) -> GuessEnv<ScriptedSource> {
        let mut env =
            GuessEnv::with_source(&GuessEnvConfig::default(), ScriptedSource::new(vec![secret]))
                .unwrap();
        env.reset().unwrap();
        env
    }

    #[test]
    fn test_reset_returns_start_observation() -> Result<()> {
        let mut env = GuessEnv::<FastrandSource>::build(&GuessEnvConfig::default(), 42)?;
        for _ in 0..10 {
            let (obs, info) = env.reset()?;
            assert_eq!(obs.as_tuple(), (-1, -1));
            assert!(!info.message().is_empty());
            assert_eq!(env.steps_without_winning(), 0);
        }
        Ok(())
    }

    #[test]
    fn test_step_feedback() -> Result<()> {
        for secret in [0, 1, 37, 98, 99].iter().copied() {
            let mut env = env_with_secret(secret);
            for a in 0..100 {
                let (step, _) = env.step(&GuessAct(a))?;
                assert_eq!(step.obs.last_guess, a);
                assert!(!step.is_truncated);
                if a < secret {
                    assert_eq!(step.obs.hint, Hint::TooLow);
                    assert_eq!(step.reward, -1.0);
                    assert!(!step.is_terminated);
                } else if a > secret {
                    assert_eq!(step.obs.hint, Hint::TooHigh);
                    assert_eq!(step.reward, -1.0);
                    assert!(!step.is_terminated);
                } else {
                    assert_eq!(step.obs.hint, Hint::Correct);
                    assert_eq!(step.reward, 0.0);
                    assert!(step.is_terminated);
                    assert!(step.info.message().starts_with("You win!"));
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_step_before_reset() {
        let mut env =
            GuessEnv::with_source(&GuessEnvConfig::default(), ScriptedSource::new(vec![5]))
                .unwrap();
        let err = env.step(&GuessAct(5)).err().unwrap();
        assert_eq!(
            err.downcast_ref::<GuessEnvError>(),
            Some(&GuessEnvError::NotInitialized)
        );
    }

    #[test]
    fn test_strict_actions_reject_out_of_range() -> Result<()> {
        let mut env = env_with_secret(50);
        for a in [-1, 100, 1000].iter().copied() {
            let err = env.step(&GuessAct(a)).err().unwrap();
            assert_eq!(
                err.downcast_ref::<GuessEnvError>(),
                Some(&GuessEnvError::InvalidAction {
                    action: a,
                    n_values: 100
                })
            );
        }
        // Rejected guesses are not counted.
        assert_eq!(env.steps_without_winning(), 0);
        let (step, _) = env.step(&GuessAct(50))?;
        assert!(step.is_terminated);
        Ok(())
    }

    #[test]
    fn test_permissive_actions_are_compared() -> Result<()> {
        let config = GuessEnvConfig::default().strict_actions(false);
        let mut env = GuessEnv::with_source(&config, ScriptedSource::new(vec![50]))?;
        env.reset()?;

        let (step, _) = env.step(&GuessAct(-5))?;
        assert_eq!(step.obs.as_tuple(), (0, -5));
        let (step, _) = env.step(&GuessAct(1000))?;
        assert_eq!(step.obs.as_tuple(), (2, 1000));
        assert_eq!(step.reward, -1.0);
        Ok(())
    }

    #[test]
    fn test_max_steps_truncates() -> Result<()> {
        let config = GuessEnvConfig::default().max_steps(Some(2));
        let mut env = GuessEnv::with_source(&config, ScriptedSource::new(vec![10, 20]))?;

        env.reset()?;
        let (step, _) = env.step(&GuessAct(0))?;
        assert!(!step.is_done());
        let (step, _) = env.step(&GuessAct(0))?;
        assert!(step.is_truncated && !step.is_terminated);

        // A correct guess at the cap terminates rather than truncates.
        env.reset()?;
        env.step(&GuessAct(0))?;
        let (step, _) = env.step(&GuessAct(20))?;
        assert!(step.is_terminated && !step.is_truncated);
        Ok(())
    }

    #[test]
    fn test_step_record() -> Result<()> {
        let mut env = env_with_secret(42);
        env.step(&GuessAct(99))?;
        let (_, record) = env.step(&GuessAct(0))?;
        assert_eq!(record.get_scalar("guess")?, 0.0);
        assert_eq!(record.get_scalar("hint")?, 0.0);
        assert_eq!(record.get_scalar("steps_without_winning")?, 2.0);
        assert_eq!(record.get_string("info")?, "0 is too low");
        assert!(record.get("secret").is_none());
        Ok(())
    }

    #[test]
    fn test_reset_with_index_is_reproducible() -> Result<()> {
        let config = GuessEnvConfig::default();
        let mut env1 = GuessEnv::<FastrandSource>::build(&config, 7)?;
        let mut env2 = GuessEnv::<FastrandSource>::build(&config, 7)?;
        env2.reset()?;

        for ix in 0..5 {
            env1.reset_with_index(ix)?;
            env2.reset_with_index(ix)?;
            assert_eq!(env1.secret, env2.secret);
        }
        Ok(())
    }

    #[test]
    fn test_invalid_config() {
        let config = GuessEnvConfig::default().n_values(-3);
        assert!(GuessEnv::<FastrandSource>::build(&config, 0).is_err());
    }
}
