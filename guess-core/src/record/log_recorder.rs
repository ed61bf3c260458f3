use super::{Record, RecordValue, Recorder};
use log::info;

/// Writes records to the `log` facade at info level.
///
/// Keys are printed in sorted order so that lines of the same kind line up.
pub struct LogRecorder {
    prefix: String,
}

impl LogRecorder {
    /// Construct the recorder. Every line starts with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Renders a record as `key=value` pairs.
    pub fn format(record: &Record) -> String {
        let mut items: Vec<_> = record.iter().collect();
        items.sort_by(|a, b| a.0.cmp(b.0));
        items
            .into_iter()
            .map(|(k, v)| match v {
                RecordValue::Scalar(v) => format!("{}={}", k, v),
                RecordValue::String(s) => format!("{}={:?}", k, s),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Recorder for LogRecorder {
    fn write(&mut self, record: Record) {
        info!("{}: {}", self.prefix, Self::format(&record));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_sorts_keys() {
        let record = Record::from_slice(&[
            ("reward", RecordValue::Scalar(-1.0)),
            ("info", RecordValue::String("Too high".to_string())),
            ("guess", RecordValue::Scalar(99.0)),
        ]);
        assert_eq!(
            LogRecorder::format(&record),
            "guess=99, info=\"Too high\", reward=-1"
        );
    }
}
