use serde::{Deserialize, Serialize};

/// One entry of the project's dependency manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ManifestDependency {
    pub name: String,
    pub required: String,
    pub installed: String,
    pub license: Vec<String>,
}

/// Project-wide data that does not belong to any single unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectMetrics {
    pub name: String,
    pub dependencies: Vec<ManifestDependency>,
}
