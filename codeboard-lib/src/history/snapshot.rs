use crate::consolidate::Aggregates;
use serde::{Deserialize, Serialize};

/// The persisted aggregates of one past report run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistorySnapshot {
    pub sequence: u64,
    pub avg: Aggregates,
    pub sum: Aggregates,
}

impl HistorySnapshot {
    #[must_use]
    pub const fn new(sequence: u64, avg: Aggregates, sum: Aggregates) -> Self {
        Self { sequence, avg, sum }
    }
}
