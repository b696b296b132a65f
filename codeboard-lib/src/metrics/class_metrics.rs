use serde::{Deserialize, Serialize};

/// Violation counts attached to a class, by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Violations {
    pub information: u32,
    pub warning: u32,
    pub error: u32,
    pub critical: u32,
}

impl Violations {
    /// Sum of all severities, saturating at `u32::MAX`.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.information
            .saturating_add(self.warning)
            .saturating_add(self.error)
            .saturating_add(self.critical)
    }
}

/// Measurements for a single class or interface.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassMetrics {
    pub name: String,
    pub interface: bool,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    // size
    pub loc: f64,
    pub lloc: f64,
    pub cloc: f64,

    // complexity
    pub ccn: f64,
    pub ccn_method: f64,
    pub wmc: f64,
    pub relative_system_complexity: f64,
    pub relative_data_complexity: f64,
    pub relative_structural_complexity: f64,

    // object orientation
    pub nb_methods: f64,
    pub lcom: f64,

    // coupling
    pub afferent_coupling: f64,
    pub efferent_coupling: f64,
    pub instability: f64,
    pub externals: Vec<String>,

    // halstead and maintainability
    pub bugs: f64,
    pub kan_defect: f64,
    pub difficulty: f64,
    pub volume: f64,
    pub intelligent_content: f64,
    pub comment_weight: f64,
    pub mi: f64,

    pub violations: Violations,
}
