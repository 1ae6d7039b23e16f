use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Snapshot of directory/index state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub directory_users: usize,
    pub index_vectors: usize,
    pub dimensions: usize,
    pub metric: String,
    /// Users inserted since the index was built (not yet searchable).
    pub pending_users: usize,
    pub message: Option<String>,
}
