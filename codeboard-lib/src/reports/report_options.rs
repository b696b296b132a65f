use crate::groups::Group;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

/// Settings for one HTML report run, also exposed to templates as `config`.
#[derive(Debug, Clone, Serialize)]
pub struct ReportOptions {
    /// Report directory; absent or empty disables the report.
    pub destination: Option<Utf8PathBuf>,

    /// Directory holding the page templates and the static bundles; `None` uses
    /// the set compiled into the binary.
    pub template_dir: Option<Utf8PathBuf>,

    /// Sub-reports, each rendered into a directory named after the group.
    pub groups: Vec<Group>,
}

impl ReportOptions {
    #[must_use]
    pub fn new(destination: Option<Utf8PathBuf>) -> Self {
        Self {
            destination,
            template_dir: None,
            groups: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_template_dir(mut self, template_dir: impl Into<Utf8PathBuf>) -> Self {
        self.template_dir = Some(template_dir.into());
        self
    }

    #[must_use]
    pub fn template_dir(&self) -> Option<&Utf8Path> {
        self.template_dir.as_deref()
    }

    #[must_use]
    pub fn with_groups(mut self, groups: Vec<Group>) -> Self {
        self.groups = groups;
        self
    }

    /// The report directory, unless reporting is disabled.
    #[must_use]
    pub fn destination(&self) -> Option<&Utf8Path> {
        self.destination.as_deref().filter(|d| !d.as_str().is_empty())
    }
}
