//! Default implementation of the [`Evaluator`] trait.
use super::Evaluator;
use crate::{error::CoreError, record::Record, record::RecordValue, Env, Policy};
use anyhow::Result;

/// Runs a fixed number of episodes and reports the average return and length.
///
/// Episode `i` is started with [`Env::reset_with_index`]`(i)`, so evaluations
/// of different policies see the same sequence of episodes.
///
/// ```ignore
/// let config = GuessEnvConfig::default();
/// let mut evaluator = DefaultEvaluator::<GuessEnv>::new(&config, 42, 10)?;
/// let record = evaluator.evaluate(&mut policy)?;
/// println!("Average return: {}", record.get_scalar("episode_return")?);
/// ```
pub struct DefaultEvaluator<E: Env> {
    n_episodes: usize,
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    /// Returns a record with `episode_return` and `episode_length`,
    /// both averaged over episodes.
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>,
    {
        let mut r_total = 0f32;
        let mut n_steps = 0usize;

        for ix in 0..self.n_episodes {
            let mut prev_obs = self.env.reset_with_index(ix)?;
            policy.reset();

            loop {
                let act = policy.sample(&prev_obs);
                let (step, _) = self.env.step(&act)?;
                r_total += step.reward;
                n_steps += 1;
                if step.is_done() {
                    break;
                }
                prev_obs = step.obs;
            }
        }

        let n = self.n_episodes as f32;
        Ok(Record::from_slice(&[
            ("episode_return", RecordValue::Scalar(r_total / n)),
            ("episode_length", RecordValue::Scalar(n_steps as f32 / n)),
        ]))
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// * `config` - Configuration for the environment
    /// * `seed` - Random seed for environment initialization
    /// * `n_episodes` - Number of episodes to run during evaluation, must be positive
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        if n_episodes == 0 {
            return Err(CoreError::ZeroEpisodes.into());
        }
        Ok(Self {
            n_episodes,
            env: E::build(config, seed)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::runner::test::{CountEnv, CountUpPolicy};

    #[test]
    fn test_evaluate_with_indexed_episodes() -> Result<()> {
        // Episode i terminates at step i + 1.
        let mut evaluator = DefaultEvaluator::<CountEnv>::new(&(0, usize::MAX), 0, 3)?;
        let record = evaluator.evaluate(&mut CountUpPolicy)?;

        assert_eq!(record.get_scalar("episode_length")?, 2.0);
        assert_eq!(record.get_scalar("episode_return")?, -1.0);
        Ok(())
    }

    #[test]
    fn test_zero_episodes_is_rejected() {
        let err = DefaultEvaluator::<CountEnv>::new(&(0, 1), 0, 0).err().unwrap();
        assert_eq!(err.downcast_ref::<CoreError>(), Some(&CoreError::ZeroEpisodes));
    }
}
