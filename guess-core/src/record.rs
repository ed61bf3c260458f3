//! Types and traits for recording values emitted while running episodes.
//!
//! * [`Record`] - A container of key-value pairs of various data types
//! * [`RecordValue`] - Types of values that can be stored in a [`Record`]
//! * [`Recorder`] - Writes records to some destination
//! * [`RecordStorage`] - Aggregates scalars with min, max, mean and median
//! * [`BufferedRecorder`] - Keeps records in memory
//! * [`LogRecorder`] - Writes records through the `log` facade
//! * [`NullRecorder`] - Discards all records
//!
//! ```rust
//! use guess_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("step", RecordValue::Scalar(1.0));
//! record.insert("reward", RecordValue::Scalar(-1.0));
//! record.insert("info", RecordValue::String("Too low".to_string()));
//! ```
mod base;
mod buffered_recorder;
mod log_recorder;
mod null_recorder;
mod recorder;
mod storage;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use log_recorder::LogRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
pub use storage::RecordStorage;
