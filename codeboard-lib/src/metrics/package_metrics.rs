use serde::{Deserialize, Serialize};

/// Measurements for a package (namespace) and its outgoing package dependencies.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageMetrics {
    pub name: String,
    pub classes: Vec<String>,
    pub abstraction: f64,
    pub instability: f64,
    pub normalized_distance: f64,
    pub dependencies: Vec<String>,
}
