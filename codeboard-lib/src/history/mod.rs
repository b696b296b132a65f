//! Append-only series of past report snapshots
//!
//! Every global report run appends one [`HistorySnapshot`] holding the run's
//! `avg` and `sum` aggregates. The trend calculator compares the current run
//! against the most recent snapshot.
//!
//! # Implementation Model
//!
//! [`HistoryStore`] persists snapshots as `js/history-N.json` under the report
//! destination, plus a `js/latest.json` copy of the newest one. Each record
//! carries its own `sequence` so ordering never depends on how filenames sort;
//! records written before that field existed take their sequence from the
//! filename suffix.
//!
//! Loading is strict: an unreadable or malformed record, a sequence that
//! disagrees with its filename, and a gap in the series are all fatal, since
//! trends computed against a damaged history would be wrong. Records are created
//! with exclusive-create semantics and never rewritten.

mod series;
mod snapshot;
mod store;

pub use series::History;
pub use snapshot::HistorySnapshot;
pub use store::HistoryStore;
