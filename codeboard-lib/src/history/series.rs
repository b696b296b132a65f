use super::HistorySnapshot;
use serde::Serialize;

/// Snapshots ordered by ascending sequence number.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct History {
    snapshots: Vec<HistorySnapshot>,
}

impl History {
    /// Build a series from snapshots in any order.
    #[must_use]
    pub fn new(mut snapshots: Vec<HistorySnapshot>) -> Self {
        snapshots.sort_by_key(|s| s.sequence);
        Self { snapshots }
    }

    /// The snapshot with the highest sequence number.
    #[must_use]
    pub fn latest(&self) -> Option<&HistorySnapshot> {
        self.snapshots.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn snapshots(&self) -> &[HistorySnapshot] {
        &self.snapshots
    }
}
