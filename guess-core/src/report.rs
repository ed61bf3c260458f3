//! Human-readable summary of episode outcomes.
use crate::{
    record::{Record, RecordStorage, RecordValue},
    runner::EpisodeResult,
};
use std::fmt;

/// One line of an [`EpisodeReport`].
#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    /// Index of the episode.
    pub episode: usize,

    /// Sum of rewards over the episode.
    pub total_reward: f32,

    /// Number of steps taken in the episode.
    pub n_steps: usize,
}

impl<A> From<&EpisodeResult<A>> for ReportRow {
    fn from(result: &EpisodeResult<A>) -> Self {
        Self {
            episode: result.episode,
            total_reward: result.total_reward,
            n_steps: result.n_steps,
        }
    }
}

/// Collects `(episode, total reward, steps)` rows and renders them as text.
///
/// The layout is meant for people reading a terminal, it is not a stable format.
#[derive(Clone, Debug, Default)]
pub struct EpisodeReport {
    rows: Vec<ReportRow>,
}

impl EpisodeReport {
    /// Constructs a report from outcomes of [`EpisodeRunner`](crate::EpisodeRunner).
    pub fn from_results<A>(results: &[EpisodeResult<A>]) -> Self {
        Self {
            rows: results.iter().map(ReportRow::from).collect(),
        }
    }

    /// Rows in the order they were added.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Average number of steps per episode, `None` for an empty report.
    pub fn mean_steps(&self) -> Option<f32> {
        if self.rows.is_empty() {
            None
        } else {
            let total: usize = self.rows.iter().map(|r| r.n_steps).sum();
            Some(total as f32 / self.rows.len() as f32)
        }
    }

    /// Statistics of rewards and steps over the episodes.
    ///
    /// Keys are `episode_return_{min,max,mean,median}` and
    /// `episode_length_{min,max,mean,median}`.
    pub fn summary(&self) -> Record {
        let mut storage = RecordStorage::new();
        for row in self.rows.iter() {
            storage.store(Record::from_slice(&[
                ("episode_return", RecordValue::Scalar(row.total_reward)),
                ("episode_length", RecordValue::Scalar(row.n_steps as f32)),
            ]));
        }
        storage.aggregate()
    }
}

impl fmt::Display for EpisodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>8} {:>8} {:>6}", "episode", "reward", "steps")?;
        for row in self.rows.iter() {
            writeln!(
                f,
                "{:>8} {:>8} {:>6}",
                row.episode, row.total_reward, row.n_steps
            )?;
        }
        if let Some(mean_steps) = self.mean_steps() {
            let mean_reward =
                self.rows.iter().map(|r| r.total_reward).sum::<f32>() / self.rows.len() as f32;
            writeln!(
                f,
                "{} episodes, mean reward {:.2}, mean steps {:.2}",
                self.rows.len(),
                mean_reward,
                mean_steps
            )?;
        }
        Ok(())
    }
}
