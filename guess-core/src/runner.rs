//! Episode loop driving a policy against an environment.
use crate::{
    record::{Record, RecordValue, Recorder},
    Env, Policy,
};
use anyhow::Result;
use log::{info, trace};

/// Outcome of a single episode.
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeResult<A> {
    /// Index of the episode, starting from 0.
    pub episode: usize,

    /// Sum of rewards over the episode.
    pub total_reward: f32,

    /// Number of calls to [`Env::step`] in the episode.
    pub n_steps: usize,

    /// The action of the last step.
    pub final_act: A,

    /// `true` if the episode was cut off by the environment instead of terminated.
    pub is_truncated: bool,
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Runs episodes with a policy.
///
/// Entities interact as illustrated below. An episode ends when the step is
/// terminated or truncated; there is no step limit on the runner side.
///
/// ```mermaid
/// graph LR
///     Env --> Obs
///     Obs --> Policy
///     Policy --> Act
///     Act --> Env
/// ```
#[derive(Clone, Debug)]
pub struct EpisodeRunner {
    n_episodes: usize,
}

impl EpisodeRunner {
    /// Constructs a runner of `n_episodes` episodes.
    pub fn new(n_episodes: usize) -> Self {
        Self { n_episodes }
    }

    /// Runs episodes and returns their outcomes.
    pub fn run<E, P>(&self, env: &mut E, policy: &mut P) -> Result<Vec<EpisodeResult<E::Act>>>
    where
        E: Env,
        P: Policy<E>,
    {
        self.run_inner(env, policy, None)
    }

    /// Runs episodes, writing a record for every step to `recorder`.
    ///
    /// Step records hold `episode`, `step` and `reward` in addition to the
    /// record returned by the environment.
    pub fn run_with_recorder<E, P, R>(
        &self,
        env: &mut E,
        policy: &mut P,
        recorder: &mut R,
    ) -> Result<Vec<EpisodeResult<E::Act>>>
    where
        E: Env,
        P: Policy<E>,
        R: Recorder,
    {
        self.run_inner(env, policy, Some(recorder as &mut dyn Recorder))
    }

    fn run_inner<E, P>(
        &self,
        env: &mut E,
        policy: &mut P,
        mut recorder: Option<&mut dyn Recorder>,
    ) -> Result<Vec<EpisodeResult<E::Act>>>
    where
        E: Env,
        P: Policy<E>,
    {
        let mut results = Vec::with_capacity(self.n_episodes);

        for episode in 0..self.n_episodes {
            let (mut prev_obs, _) = env.reset()?;
            policy.reset();
            let mut r_total = 0f32;
            let mut count_step = 0;

            let result = loop {
                let act = policy.sample(&prev_obs);
                let (step, record) = env.step(&act)?;
                r_total += step.reward;
                count_step += 1;
                trace!("episode {}, step {}: {:?} -> {:?}", episode, count_step, act, step.obs);

                if let Some(recorder) = recorder.as_mut() {
                    recorder.write(record.merge(Record::from_slice(&[
                        ("episode", RecordValue::Scalar(episode as _)),
                        ("step", RecordValue::Scalar(count_step as _)),
                        ("reward", RecordValue::Scalar(step.reward)),
                    ])));
                }

                if step.is_done() {
                    break EpisodeResult {
                        episode,
                        total_reward: r_total,
                        n_steps: count_step,
                        final_act: step.act,
                        is_truncated: step.is_truncated && !step.is_terminated,
                    };
                }
                prev_obs = step.obs;
            };

            info!(
                "Episode {}, {} steps, reward = {}",
                episode, result.n_steps, result.total_reward
            );
            results.push(result);
        }

        Ok(results)
    }
}
