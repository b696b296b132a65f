//! Comparison of current aggregates against history
//!
//! # Implementation Model
//!
//! A [`TrendCalculator`] is built per render scope. For the global scope it holds
//! the current `sum`/`avg` aggregates and the most recent history snapshot; for
//! group scopes it is [`TrendCalculator::disabled`] and answers every query with
//! no result, without comparing anything.
//!
//! [`TrendCalculator::trend`] looks a key up in the current aggregates and in the
//! baseline snapshot and classifies the change:
//! - **direction**: three-way comparison of current against previous
//! - **outcome**: `good`/`bad` depending on whether lower values are better,
//!   `neutral` when unchanged
//!
//! A missing baseline, or a key the baseline never recorded, yields `None`.

mod aggregate_kind;
mod calculator;
mod trend_result;

pub use aggregate_kind::AggregateKind;
pub use calculator::TrendCalculator;
pub use trend_result::{Direction, Outcome, TrendResult, format_number};
