use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: ProjectSettings,
}

/// Per-project settings the panel edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Metrics endpoint path (default: "/api/v1/metrics").
    #[serde(default = "default_address")]
    pub address: String,
    /// Project name the metrics are queried for.
    #[serde(default)]
    pub project: String,
    /// Displayed metric intervals in seconds, in display order.
    #[serde(default = "default_intervals")]
    pub intervals: Vec<i64>,
}

fn default_address() -> String {
    "/api/v1/metrics".to_string()
}

fn default_intervals() -> Vec<i64> {
    // 1 hour, 1 day, 30 days
    vec![3600, 86_400, 2_592_000]
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            address: default_address(),
            project: String::new(),
            intervals: default_intervals(),
        }
    }
}
