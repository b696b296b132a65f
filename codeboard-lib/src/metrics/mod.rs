//! The measurement set produced by the analysis engine
//!
//! The analysis engine (outside this crate) parses source code and computes size,
//! complexity, coupling and violation numbers for every code unit. It hands the
//! result over as a JSON document which is deserialized into [`Metrics`].
//!
//! # Implementation Model
//!
//! [`Metrics`] holds four record families:
//! - **Classes** ([`ClassMetrics`]): one record per class or interface
//! - **Files** ([`FileMetrics`]): one record per analyzed source file
//! - **Packages** ([`PackageMetrics`]): one record per package/namespace
//! - **Project** ([`ProjectMetrics`]): project-wide data such as the dependency manifest
//!
//! Numeric fields default to zero when the engine omits them, so partially
//! populated documents still load. Subsets are derived with [`Metrics::retain`],
//! which is how groups carve out their slice of the measurement set.

mod class_metrics;
mod file_metrics;
mod metrics_set;
mod package_metrics;
mod project_metrics;

pub use class_metrics::{ClassMetrics, Violations};
pub use file_metrics::FileMetrics;
pub use metrics_set::Metrics;
pub use package_metrics::PackageMetrics;
pub use project_metrics::{ManifestDependency, ProjectMetrics};
