//! Record storage and aggregation.
use super::{Record, RecordValue};
use std::collections::HashSet;
use xxhash_rust::xxh3::Xxh3Builder;

/// A storage of records with aggregation.
///
/// Scalar values of the same key `k` are summarized as `k_min`, `k_max`, `k_mean`
/// and `k_median`, also when only one value was stored. For other value types
/// the most recent one is kept under its own key.
#[derive(Default)]
pub struct RecordStorage {
    data: Vec<Record>,
}

fn min(vs: &[f32]) -> RecordValue {
    RecordValue::Scalar(vs.iter().copied().fold(f32::INFINITY, f32::min))
}

fn max(vs: &[f32]) -> RecordValue {
    RecordValue::Scalar(vs.iter().copied().fold(f32::NEG_INFINITY, f32::max))
}

fn mean(vs: &[f32]) -> RecordValue {
    RecordValue::Scalar(vs.iter().sum::<f32>() / vs.len() as f32)
}

// Upper median for even lengths.
fn median(mut vs: Vec<f32>) -> RecordValue {
    vs.sort_by(|x, y| x.total_cmp(y));
    RecordValue::Scalar(vs[vs.len() / 2])
}

impl RecordStorage {
    /// Creates a new empty record storage.
    pub fn new() -> Self {
        Self { data: vec![] }
    }

    /// Stores a record in the storage.
    pub fn store(&mut self, record: Record) {
        self.data.push(record);
    }

    fn get_keys(&self) -> HashSet<String, Xxh3Builder> {
        let mut keys = HashSet::<String, Xxh3Builder>::default();
        for record in self.data.iter() {
            for k in record.keys() {
                keys.insert(k.clone());
            }
        }
        keys
    }

    fn latest(&self, key: &str) -> Option<&RecordValue> {
        self.data.iter().rev().find_map(|record| record.get(key))
    }

    fn scalar(&self, key: &str) -> Record {
        let vs: Vec<f32> = self
            .data
            .iter()
            .filter_map(|record| match record.get(key) {
                Some(RecordValue::Scalar(v)) => Some(*v),
                _ => None,
            })
            .collect();

        Record::from_slice(&[
            (format!("{}_min", key), min(&vs)),
            (format!("{}_max", key), max(&vs)),
            (format!("{}_mean", key), mean(&vs)),
            (format!("{}_median", key), median(vs)),
        ])
    }

    /// Aggregates all stored records and clears the storage.
    pub fn aggregate(&mut self) -> Record {
        let mut record = Record::empty();

        for key in self.get_keys().iter() {
            match self.latest(key) {
                Some(RecordValue::Scalar(..)) => record.merge_inplace(self.scalar(key)),
                Some(value) => record.insert(key.clone(), value.clone()),
                None => {}
            }
        }

        self.data.clear();

        record
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_aggregate_scalars() {
        let mut storage = RecordStorage::new();
        for (r, info) in [(-3.0, "a"), (0.0, "b"), (-6.0, "c"), (-1.0, "d")].iter() {
            storage.store(Record::from_slice(&[
                ("episode_return", RecordValue::Scalar(*r)),
                ("info", RecordValue::String(info.to_string())),
            ]));
        }
        storage.store(Record::from_scalar("n_episodes", 4.0));

        let record = storage.aggregate();
        assert_eq!(record.get_scalar("episode_return_min"), Ok(-6.0));
        assert_eq!(record.get_scalar("episode_return_max"), Ok(0.0));
        assert_eq!(record.get_scalar("episode_return_mean"), Ok(-2.5));
        assert_eq!(record.get_scalar("episode_return_median"), Ok(-1.0));
        assert_eq!(record.get_scalar("n_episodes_min"), Ok(4.0));
        assert_eq!(record.get_scalar("n_episodes_median"), Ok(4.0));
        assert!(record.get("n_episodes").is_none());
        assert_eq!(record.get_string("info"), Ok("d".to_string()));
        assert!(storage.aggregate().is_empty());
    }
}
