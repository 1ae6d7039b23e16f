use serde::{Deserialize, Serialize};

use super::defaults;

/// Community clustering and insights configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityConfig {
    /// Minimum HDBSCAN cluster size.
    pub min_cluster_size: usize,
    /// Number of interests reported by insights.
    pub top_interests: usize,
    /// Number of cities reported by insights.
    pub top_cities: usize,
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self {
            min_cluster_size: defaults::DEFAULT_MIN_CLUSTER_SIZE,
            top_interests: defaults::DEFAULT_TOP_INTERESTS,
            top_cities: defaults::DEFAULT_TOP_CITIES,
        }
    }
}
