use serde::{Deserialize, Serialize};

/// Size measurements for a single source file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FileMetrics {
    pub name: String,
    pub loc: f64,
    pub lloc: f64,
    pub cloc: f64,
}
