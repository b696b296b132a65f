//! Summary aggregates over a measurement subset
//!
//! # Implementation Model
//!
//! [`Consolidated::new`] reduces a [`Metrics`](crate::metrics::Metrics) subset to:
//! - **sum**: the total of every [`TrackedMetric`] plus the [`UnitCount`] tallies
//! - **avg**: the per-unit arithmetic mean of every [`TrackedMetric`], rounded to two decimals
//! - the flattened class, file and package listings and the project data
//!
//! Both aggregate maps always carry every tracked key, so an empty subset yields
//! zero-valued aggregates rather than missing entries. A [`Consolidated`] is built
//! once per scope and exposes read-only accessors only.

mod aggregates;
mod consolidated;
mod tracked_metric;

pub use aggregates::Aggregates;
pub use consolidated::Consolidated;
pub use tracked_metric::{TrackedMetric, Unit, UnitCount};

pub(crate) use aggregates::round_to_hundredths;
