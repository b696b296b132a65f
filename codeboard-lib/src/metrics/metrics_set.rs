use super::{ClassMetrics, FileMetrics, PackageMetrics, ProjectMetrics};
use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

const LOG_TARGET: &str = "   metrics";

/// The full measurement set for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Metrics {
    pub classes: Vec<ClassMetrics>,
    pub files: Vec<FileMetrics>,
    pub packages: Vec<PackageMetrics>,
    pub project: ProjectMetrics,
}

impl Metrics {
    /// Load a measurement set from a JSON document on disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or does not hold a valid measurement set
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let file = File::open(path).into_app_err_with(|| format!("opening metrics file '{path}'"))?;
        let metrics: Self = serde_json::from_reader(BufReader::new(file)).into_app_err_with(|| format!("parsing metrics file '{path}'"))?;

        log::info!(
            target: LOG_TARGET,
            "Loaded {} classes, {} files and {} packages from '{path}'",
            metrics.classes.len(),
            metrics.files.len(),
            metrics.packages.len()
        );

        Ok(metrics)
    }

    /// Derive a subset holding only the units whose name satisfies the predicate.
    ///
    /// Project-level data is carried over unchanged.
    #[must_use]
    pub fn retain(&self, mut matches: impl FnMut(&str) -> bool) -> Self {
        Self {
            classes: self.classes.iter().filter(|c| matches(&c.name)).cloned().collect(),
            files: self.files.iter().filter(|f| matches(&f.name)).cloned().collect(),
            packages: self.packages.iter().filter(|p| matches(&p.name)).cloned().collect(),
            project: self.project.clone(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.files.is_empty() && self.packages.is_empty()
    }
}
