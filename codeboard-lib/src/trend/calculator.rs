use super::{AggregateKind, TrendResult};
use crate::consolidate::{Aggregates, Consolidated};
use crate::history::{History, HistorySnapshot};

#[derive(Debug, Clone)]
struct Baseline {
    sum: Aggregates,
    avg: Aggregates,
    previous: HistorySnapshot,
}

/// Answers trend queries for one render scope.
#[derive(Debug, Clone, Default)]
pub struct TrendCalculator {
    baseline: Option<Baseline>,
}

impl TrendCalculator {
    /// Compare the given aggregates against the most recent snapshot in `history`.
    #[must_use]
    pub fn new(consolidated: &Consolidated, history: &History) -> Self {
        let baseline = history.latest().map(|previous| Baseline {
            sum: consolidated.sum().clone(),
            avg: consolidated.avg().clone(),
            previous: previous.clone(),
        });

        Self { baseline }
    }

    /// A calculator for scopes that never show trends.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { baseline: None }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.baseline.is_some()
    }

    /// Classify how `key` moved since the previous report.
    ///
    /// Returns `None` when there is no previous report or it never recorded `key`.
    /// A key missing from the current aggregates counts as zero.
    #[must_use]
    pub fn trend(&self, kind: AggregateKind, key: &str, lower_is_better: bool) -> Option<TrendResult> {
        let baseline = self.baseline.as_ref()?;

        let (current, previous) = match kind {
            AggregateKind::Sum => (&baseline.sum, &baseline.previous.sum),
            AggregateKind::Avg => (&baseline.avg, &baseline.previous.avg),
        };

        let previous = previous.get(key)?;
        let current = current.get(key).unwrap_or(0.0);

        Some(TrendResult::compare(current, previous, lower_is_better))
    }
}
