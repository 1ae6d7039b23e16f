use serde::{Deserialize, Serialize};

use super::defaults;

/// Distance metric used by the vector store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexMetric {
    /// Squared Euclidean distance.
    L2,
    /// `1 - cosine_similarity`.
    Cosine,
}

impl IndexMetric {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "l2" | "squared_l2" => Some(Self::L2),
            "cosine" => Some(Self::Cosine),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::L2 => "l2",
            Self::Cosine => "cosine",
        }
    }
}

/// Vector store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Path to the persisted index file.
    pub index_path: String,
    /// Distance metric used when building a new index.
    pub metric: IndexMetric,
    /// Vector count at which k-NN scans switch to rayon.
    pub parallel_threshold: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            index_path: defaults::DEFAULT_INDEX_FILENAME.to_string(),
            metric: IndexMetric::parse(defaults::DEFAULT_INDEX_METRIC).unwrap_or(IndexMetric::L2),
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
