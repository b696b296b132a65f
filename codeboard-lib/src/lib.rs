#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for codeboard
//!
//! This library turns a computed code-metrics measurement set into a browsable HTML
//! dashboard with historical trend indicators and a per-group breakdown.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`metrics`]: The measurement set produced by the analysis engine
//! - [`consolidate`]: Summary aggregates over a measurement subset
//! - [`groups`]: Named partitions of the measurement set
//! - [`history`]: Append-only series of past report snapshots
//! - [`trend`]: Comparison of current aggregates against history
//! - [`reports`]: Template rendering, asset publishing and the report pipeline

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod consolidate;
pub mod groups;
pub mod history;
pub mod metrics;
pub mod reports;
pub mod trend;

pub use crate::commands::{Host, run};
