//! Types and traits for recording evaluation results.
//!
//! A [`Record`] is a set of key-value pairs emitted while episodes are played,
//! and a [`Recorder`] decides where the records go.
//!
//! ```rust
//! use spiel_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("Step", RecordValue::Scalar(1.0));
//! record.insert("Reward", RecordValue::Scalar(-1.0));
//! record.insert("Obs", RecordValue::Array1(vec![0.0, 1.0, 0.0]));
//! assert_eq!(record.get_scalar("Reward").unwrap(), -1.0);
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
